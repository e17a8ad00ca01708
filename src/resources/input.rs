//! Per-frame input resource.
//!
//! Captures the subset of keyboard and gamepad state the game cares about and
//! exposes it to systems via the [`InputState`] resource. WASD drives the
//! player, Escape (or the gamepad "back" button) ends the session and F11
//! toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::ffi::{GamepadButton, KeyboardKey};

/// Held/edge state of one keyboard action.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Key is down this frame.
    pub active: bool,
    /// Key went down this frame.
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Held state of a single gamepad button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    pub active: bool,
    /// Gamepad index as reported by raylib.
    pub gamepad: i32,
    pub button: GamepadButton,
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub gamepad_back: ButtonState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            gamepad_back: ButtonState {
                active: false,
                gamepad: 0,
                button: GamepadButton::GAMEPAD_BUTTON_MIDDLE_LEFT,
            },
        }
    }
}

impl InputState {
    /// True when the player asked to leave the session this frame.
    pub fn exit_requested(&self) -> bool {
        self.action_back.active || self.gamepad_back.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_to_starts_released() {
        let bs = BoolState::bound_to(KeyboardKey::KEY_Q);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_Q);
        assert!(!bs.active && !bs.just_pressed);
        assert_eq!(BoolState::default().key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.maindirection_up.active);
        assert!(!input.maindirection_down.active);
        assert!(!input.maindirection_left.active);
        assert!(!input.maindirection_right.active);
        assert!(!input.action_back.active);
        assert!(!input.mode_debug.active);
        assert!(!input.gamepad_back.active);
        assert!(!input.exit_requested());
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.maindirection_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.maindirection_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.maindirection_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert_eq!(input.gamepad_back.gamepad, 0);
        assert_eq!(
            input.gamepad_back.button,
            GamepadButton::GAMEPAD_BUTTON_MIDDLE_LEFT
        );
    }

    #[test]
    fn test_exit_requested_by_escape_or_gamepad() {
        let mut input = InputState::default();
        input.action_back.active = true;
        assert!(input.exit_requested());

        let mut input = InputState::default();
        input.gamepad_back.active = true;
        assert!(input.exit_requested());
    }
}

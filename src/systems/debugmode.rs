use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Toggle the debug overlay on the frame F11 goes down.
pub fn toggle_debug_mode(mut commands: Commands, input: Res<InputState>) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

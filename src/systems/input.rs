//! Input polling.
//!
//! [`update_input_state`] reads hardware input from raylib once per frame and
//! writes the results into [`crate::resources::input::InputState`]. It runs
//! outside the update schedule so that the schedule itself never touches the
//! window and can be driven headlessly.
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::resources::input::{BoolState, ButtonState, InputState};

/// Poll raylib for keyboard and gamepad input and update the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let mut input = world.resource_mut::<InputState>();

    poll_key(&mut input.maindirection_up, rl);
    poll_key(&mut input.maindirection_left, rl);
    poll_key(&mut input.maindirection_down, rl);
    poll_key(&mut input.maindirection_right, rl);
    poll_key(&mut input.action_back, rl);
    poll_key(&mut input.mode_debug, rl);
    poll_button(&mut input.gamepad_back, rl);
}

fn poll_key(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
}

fn poll_button(state: &mut ButtonState, rl: &RaylibHandle) {
    state.active =
        rl.is_gamepad_available(state.gamepad) && rl.is_gamepad_button_down(state.gamepad, state.button);
}

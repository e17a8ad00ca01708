use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;

/// End the session when Escape or the gamepad "back" button is held.
///
/// Runs first in the update schedule; the transition is applied by the
/// [`GameStateChangedEvent`] observer before the sprite and camera systems,
/// which are gated on [`state_is_running`].
pub fn check_exit_request(
    mut commands: Commands,
    input: Res<InputState>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.exit_requested() {
        log::info!("Exit requested");
        next_state.set(GameStates::Exited);
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_running(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Running)
}

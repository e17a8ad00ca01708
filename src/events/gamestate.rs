//! Game state transition event and observer.
//!
//! Systems (and the [`GameLoop`](crate::game::GameLoop) phases) request a
//! change to the lifecycle [`GameStates`] by updating [`NextGameState`].
//! Emitting a [`GameStateChangedEvent`] then triggers the observer in this
//! module, which validates the transition against the lifecycle order and
//! applies it to [`GameState`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending and allowed by [`GameStates::can_transition_to`], copies the
///   new value into [`GameState`] and logs the exit/enter pair.
/// - Rejected transitions are logged and dropped.
/// - Always resets [`NextGameState`] to [`Unchanged`].
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    next_game_state: Option<ResMut<NextGameState>>,
    game_state: Option<ResMut<GameState>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(mut next_game_state), Some(mut game_state)) = (next_game_state, game_state) else {
        warn!("NextGameState or GameState resource missing in observe_gamestate_change_event");
        return;
    };

    match next_game_state.get() {
        Pending(new_state) => {
            let old_state = game_state.get();
            next_game_state.reset();
            if !old_state.can_transition_to(new_state) {
                warn!(
                    "Ignoring invalid transition from {:?} to {:?}",
                    old_state, new_state
                );
                return;
            }
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            on_state_exit(old_state);
            on_state_enter(new_state);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

fn on_state_enter(state: GameStates) {
    match state {
        GameStates::Uninitialized => debug!("Entered Uninitialized state"),
        GameStates::Initialized => debug!("Entered Initialized state"),
        GameStates::ContentLoaded => debug!("Entered ContentLoaded state"),
        GameStates::Running => info!("Game loop running"),
        GameStates::Exited => info!("Session ended"),
    }
}

fn on_state_exit(state: GameStates) {
    debug!("Exited {:?} state", state);
}

//! High-level game state resources.
//!
//! These resources track the authoritative lifecycle state of the game loop
//! and any pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied.

use bevy_ecs::prelude::Resource;

/// Lifecycle of the game loop.
///
/// `Uninitialized -> Initialized -> ContentLoaded -> Running -> Exited`.
/// `Exited` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Uninitialized,
    Initialized,
    ContentLoaded,
    Running,
    Exited,
}

impl GameStates {
    /// Whether moving from `self` to `next` follows the lifecycle order.
    pub fn can_transition_to(self, next: GameStates) -> bool {
        matches!(
            (self, next),
            (GameStates::Uninitialized, GameStates::Initialized)
                | (GameStates::Initialized, GameStates::ContentLoaded)
                | (GameStates::ContentLoaded, GameStates::Running)
                | (GameStates::Running, GameStates::Exited)
        )
    }
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Uninitialized`].
    pub fn new() -> Self {
        Self::default()
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so the observer
    /// validates and logs them.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

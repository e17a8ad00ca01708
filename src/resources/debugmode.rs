//! Debug overlay toggle.
//!
//! While this resource is present the draw pass adds a text overlay with
//! frame timing, player and camera state. F11 inserts or removes it through
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug overlay is drawn.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;

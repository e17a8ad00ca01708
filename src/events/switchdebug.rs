//! Event and observer to toggle the debug overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource. The draw pass renders its overlay only while the resource is
//! present.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Fired by the F11 handler; carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert [`DebugMode`] when absent, remove it when present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug overlay disabled");
    } else {
        commands.insert_resource(DebugMode);
        info!("Debug overlay enabled");
    }
}

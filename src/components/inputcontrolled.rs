//! Input-controlled marker component.
//!
//! Entities carrying [`InputControlled`] are moved and animated from the
//! shared [`InputState`](crate::resources::input::InputState) by
//! [`crate::systems::animatedsprite::animated_sprite_system`].

use bevy_ecs::prelude::Component;

/// Marks the entity driven by the keyboard (W/A/S/D).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct InputControlled;

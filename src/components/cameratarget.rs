use bevy_ecs::prelude::Component;

/// Marks the entity the [`Camera`](crate::resources::camera::Camera) follows.
///
/// Only the first matching entity is tracked.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;

//! Camera follow system.
//!
//! Recomputes the [`Camera`] transforms from the tracked entity's final
//! position for the frame, so the rendered frame and the transform agree.
//! Must run after [`animated_sprite_system`](crate::systems::animatedsprite::animated_sprite_system).
use bevy_ecs::prelude::*;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::cameratarget::CameraTarget;
use crate::resources::camera::Camera;
use crate::resources::screensize::ScreenSize;

/// Point the camera at the first [`CameraTarget`] sprite.
///
/// The viewport follows [`ScreenSize`] so a resized window stays centred on
/// the target. Without a target the camera keeps its last position but still
/// picks up viewport changes.
pub fn camera_follow_system(
    mut camera: ResMut<Camera>,
    screen: Res<ScreenSize>,
    query: Query<&AnimatedSprite, With<CameraTarget>>,
) {
    let viewport = screen.as_vector2();
    camera.set_viewport(viewport.x, viewport.y);

    let tracked = query
        .iter()
        .next()
        .map(|sprite| sprite.position)
        .unwrap_or_else(|| camera.position());
    camera.update(tracked);
}

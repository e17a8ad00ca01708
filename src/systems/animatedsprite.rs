//! Player sprite update system.
//!
//! Each frame the held keys are resolved into a direction and walk animation
//! ([`resolve_input`]), then every input-controlled [`AnimatedSprite`] is
//! replaced by the value [`AnimatedSprite::step`] computes from it: the
//! animation is advanced, restarted or held, and the position integrated and
//! clamped to the screen.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – frame strip and cursor
//! - [`crate::systems::camera::camera_follow_system`] – runs after this one
use bevy_ecs::prelude::*;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::inputcontrolled::InputControlled;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::inputresolver::resolve_input;

/// Advance input-controlled sprites by one frame.
///
/// Contract
/// - Reads [`InputState`], [`WorldTime::delta`] and [`ScreenSize`].
/// - Replaces each matching [`AnimatedSprite`] with its stepped value.
pub fn animated_sprite_system(
    mut query: Query<&mut AnimatedSprite, With<InputControlled>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let (direction, resolved_key) = resolve_input(&input);
    let viewport = screen.as_vector2();

    for mut sprite in query.iter_mut() {
        let next = sprite.step(direction, resolved_key, time.delta, viewport);
        if next.current != sprite.current {
            log::debug!("Animation {:?} -> {:?}", sprite.current, next.current);
        }
        *sprite = next;
    }
}

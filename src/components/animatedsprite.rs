//! Player-style animated sprite component.
//!
//! An [`AnimatedSprite`] owns a full [`AnimationSet`] so that every
//! direction keeps its own playback progress, plus the key currently shown,
//! its position and its walking speed. The per-frame update is a pure
//! function ([`AnimatedSprite::step`]) that returns the next value; the
//! system in [`crate::systems::animatedsprite`] swaps it in.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::animation::{Animation, AnimationKey, AnimationSet};

#[derive(Component, Debug, Clone)]
pub struct AnimatedSprite {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    pub animations: AnimationSet,
    pub current: AnimationKey,
    /// True while the sprite moved during the last update.
    pub is_animating: bool,
    /// Movement speed in pixels per second.
    pub speed: f32,
    /// Top-left corner of the drawn frame, in world units.
    pub position: Vector2,
}

impl AnimatedSprite {
    pub fn new(
        tex_key: impl Into<Arc<str>>,
        animations: AnimationSet,
        current: AnimationKey,
        speed: f32,
        position: Vector2,
    ) -> Self {
        Self {
            tex_key: tex_key.into(),
            animations,
            current,
            is_animating: false,
            speed,
            position,
        }
    }

    pub fn current_animation(&self) -> &Animation {
        self.animations.get(self.current)
    }

    /// Source rectangle of the frame to draw this tick.
    pub fn current_frame(&self) -> Rectangle {
        self.current_animation().current_frame()
    }

    pub fn frame_size(&self) -> Vector2 {
        self.current_animation().frame_size()
    }

    /// Compute the sprite for the next frame.
    ///
    /// `direction` and `resolved_key` come from
    /// [`resolve_input`](crate::systems::inputresolver::resolve_input).
    /// A zero direction switches to the idle animation facing the previous
    /// way. Re-selecting the same key advances it (only while moving);
    /// selecting a different key restarts that key's animation. The new
    /// position is clamped to the viewport.
    #[must_use]
    pub fn step(
        &self,
        direction: Vector2,
        resolved_key: AnimationKey,
        dt: f32,
        viewport: Vector2,
    ) -> Self {
        let is_moving = direction.x != 0.0 || direction.y != 0.0;
        let (key, velocity) = if is_moving {
            (resolved_key, direction.normalized())
        } else {
            (self.current.to_idle(), Vector2 { x: 0.0, y: 0.0 })
        };

        let previous = self.animations.get(key);
        let animation = if key != self.current {
            previous.reset()
        } else if is_moving {
            previous.advance(dt)
        } else {
            previous.clone()
        };

        let proposed = self.position + velocity.scale_by(self.speed * dt);
        let position = clamp_to_viewport(proposed, animation.frame_size(), viewport);

        Self {
            tex_key: Arc::clone(&self.tex_key),
            animations: self.animations.with(key, animation),
            current: key,
            is_animating: is_moving,
            speed: self.speed,
            position,
        }
    }
}

/// Keep a sprite of `frame_size` inside the viewport, using half the frame as
/// the margin on every side.
pub fn clamp_to_viewport(position: Vector2, frame_size: Vector2, viewport: Vector2) -> Vector2 {
    let half_w = frame_size.x * 0.5;
    let half_h = frame_size.y * 0.5;
    // max() keeps the range valid when the window is smaller than a frame
    Vector2 {
        x: position.x.clamp(-half_w, (viewport.x - half_w).max(-half_w)),
        y: position.y.clamp(-half_h, (viewport.y - half_h).max(-half_h)),
    }
}

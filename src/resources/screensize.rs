//! Screen size resource.
//!
//! Stores the current window dimensions in pixels. The game loop refreshes it
//! every frame from raylib, which is how window resizes reach the movement
//! clamp and the camera.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Size as a float vector, the form the clamp and camera use.
    pub fn as_vector2(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32,
            y: self.h as f32,
        }
    }
}

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Static sprite drawn at a fixed pose.
///
/// The sprite is identified by a texture key, a world position and the frame
/// it shows: `frame_offset` selects the top-left corner of the frame inside
/// the spritesheet and `frame_size` its extent.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: Arc<str>,
    pub position: Vector2,
    pub speed: f32,
    pub frame_size: Vector2,
    pub frame_offset: Vector2,
}

impl Sprite {
    /// Source rectangle on the spritesheet.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: self.frame_offset.x,
            y: self.frame_offset.y,
            width: self.frame_size.x,
            height: self.frame_size.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rect_uses_offset_and_size() {
        let sprite = Sprite {
            tex_key: Arc::from("skeleton"),
            position: Vector2 { x: 10.0, y: 20.0 },
            speed: 0.0,
            frame_size: Vector2 { x: 64.0, y: 32.0 },
            frame_offset: Vector2 { x: 128.0, y: 640.0 },
        };
        let src = sprite.source_rect();
        assert_eq!(src.x, 128.0);
        assert_eq!(src.y, 640.0);
        assert_eq!(src.width, 64.0);
        assert_eq!(src.height, 32.0);
    }
}

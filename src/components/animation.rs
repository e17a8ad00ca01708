//! Sprite-sheet animation state.
//!
//! An [`Animation`] pairs an immutable frame strip (source rectangles inside a
//! sprite sheet plus a playback rate) with a cursor that advances over time.
//! Updates never mutate in place: [`Animation::advance`] and
//! [`Animation::reset`] return a new value, and the frame strip is shared
//! between copies.
//!
//! [`AnimationSet`] holds one animation per [`AnimationKey`] so every
//! direction/state keeps its own playback progress.

use std::sync::Arc;

use raylib::prelude::{Rectangle, Vector2};

/// Tag selecting one of the eight directional animations of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    IdleUp,
    IdleDown,
    IdleLeft,
    IdleRight,
    WalkUp,
    WalkDown,
    WalkLeft,
    WalkRight,
}

impl AnimationKey {
    /// All keys, in index order.
    pub const ALL: [AnimationKey; 8] = [
        AnimationKey::IdleUp,
        AnimationKey::IdleDown,
        AnimationKey::IdleLeft,
        AnimationKey::IdleRight,
        AnimationKey::WalkUp,
        AnimationKey::WalkDown,
        AnimationKey::WalkLeft,
        AnimationKey::WalkRight,
    ];

    /// Position of this key inside [`AnimationKey::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Idle animation facing the same way (`WalkX -> IdleX`, idle keys map to themselves).
    pub fn to_idle(self) -> AnimationKey {
        match self {
            AnimationKey::WalkUp | AnimationKey::IdleUp => AnimationKey::IdleUp,
            AnimationKey::WalkDown | AnimationKey::IdleDown => AnimationKey::IdleDown,
            AnimationKey::WalkLeft | AnimationKey::IdleLeft => AnimationKey::IdleLeft,
            AnimationKey::WalkRight | AnimationKey::IdleRight => AnimationKey::IdleRight,
        }
    }

    pub fn is_idle(self) -> bool {
        self.to_idle() == self
    }
}

/// A horizontal frame strip and its playback cursor.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Arc<[Rectangle]>,
    fps: f32,
    frame_duration: f32,
    frame_size: Vector2,
    frame_index: usize,
    elapsed_time: f32,
}

impl Animation {
    /// Build `frame_count` frames of `frame_size`, laid out left to right on
    /// the sheet starting at `sheet_offset`.
    ///
    /// # Panics
    ///
    /// Panics if `frame_count` is zero or `fps` is not strictly positive.
    pub fn new(frame_count: usize, fps: f32, frame_size: Vector2, sheet_offset: Vector2) -> Self {
        assert!(frame_count > 0, "animation needs at least one frame");
        assert!(fps > 0.0, "animation fps must be positive, got {fps}");

        let frames: Arc<[Rectangle]> = (0..frame_count)
            .map(|i| Rectangle {
                x: sheet_offset.x + i as f32 * frame_size.x,
                y: sheet_offset.y,
                width: frame_size.x,
                height: frame_size.y,
            })
            .collect();

        Self {
            frames,
            fps,
            frame_duration: 1.0 / fps,
            frame_size,
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Return the animation advanced by `elapsed` seconds.
    ///
    /// Once the accumulated in-frame time reaches the frame duration the
    /// cursor moves one frame forward (wrapping) and the in-frame time drops
    /// back to zero. A single call never advances more than one frame.
    #[must_use]
    pub fn advance(&self, elapsed: f32) -> Self {
        let accumulated = self.elapsed_time + elapsed;
        let (frame_index, elapsed_time) = if accumulated >= self.frame_duration {
            ((self.frame_index + 1) % self.frames.len(), 0.0)
        } else {
            (self.frame_index, accumulated)
        };
        Self {
            frame_index,
            elapsed_time,
            ..self.clone()
        }
    }

    /// Return the animation rewound to its first frame.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            frame_index: 0,
            elapsed_time: 0.0,
            ..self.clone()
        }
    }

    /// Source rectangle on the sprite sheet for the current frame.
    pub fn current_frame(&self) -> Rectangle {
        self.frames[self.frame_index]
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn frame_size(&self) -> Vector2 {
        self.frame_size
    }
}

/// One [`Animation`] for every [`AnimationKey`].
#[derive(Debug, Clone)]
pub struct AnimationSet {
    animations: [Animation; 8],
}

impl AnimationSet {
    /// Build the set by asking `make` for the animation of each key.
    pub fn from_fn(mut make: impl FnMut(AnimationKey) -> Animation) -> Self {
        Self {
            animations: std::array::from_fn(|i| make(AnimationKey::ALL[i])),
        }
    }

    pub fn get(&self, key: AnimationKey) -> &Animation {
        &self.animations[key.index()]
    }

    /// Copy of the set with `key` replaced by `animation`; the other keys keep their state.
    #[must_use]
    pub fn with(&self, key: AnimationKey, animation: Animation) -> Self {
        let mut animations = self.animations.clone();
        animations[key.index()] = animation;
        Self { animations }
    }
}

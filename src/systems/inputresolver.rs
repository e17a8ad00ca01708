//! Keyboard to movement resolution.
//!
//! [`resolve_input`] turns the held WASD keys into a movement direction and
//! the walk animation that goes with it. Rules are checked in a fixed order
//! and the first match wins, diagonals before single directions:
//!
//! | keys         | direction | animation |
//! |--------------|-----------|-----------|
//! | up + left    | (-1, -1)  | WalkLeft  |
//! | up + right   | (1, -1)   | WalkRight |
//! | down + left  | (-1, 1)   | WalkLeft  |
//! | down + right | (1, 1)    | WalkRight |
//! | up           | (0, -1)   | WalkUp    |
//! | down         | (0, 1)    | WalkDown  |
//! | left         | (-1, 0)   | WalkLeft  |
//! | right        | (1, 0)    | WalkRight |
//! | nothing      | (0, 0)    | WalkDown  |
//!
//! Diagonals always show the horizontal walk. The direction is not
//! normalized here, and a zero direction's key is replaced by the idle
//! mapping in [`AnimatedSprite::step`](crate::components::animatedsprite::AnimatedSprite::step).
use raylib::prelude::Vector2;

use crate::components::animation::AnimationKey;
use crate::resources::input::InputState;

/// Resolve the held direction keys into `(direction, walk animation)`.
pub fn resolve_input(input: &InputState) -> (Vector2, AnimationKey) {
    let up = input.maindirection_up.active;
    let down = input.maindirection_down.active;
    let left = input.maindirection_left.active;
    let right = input.maindirection_right.active;

    let (x, y, key) = if up && left {
        (-1.0, -1.0, AnimationKey::WalkLeft)
    } else if up && right {
        (1.0, -1.0, AnimationKey::WalkRight)
    } else if down && left {
        (-1.0, 1.0, AnimationKey::WalkLeft)
    } else if down && right {
        (1.0, 1.0, AnimationKey::WalkRight)
    } else if up {
        (0.0, -1.0, AnimationKey::WalkUp)
    } else if down {
        (0.0, 1.0, AnimationKey::WalkDown)
    } else if left {
        (-1.0, 0.0, AnimationKey::WalkLeft)
    } else if right {
        (1.0, 0.0, AnimationKey::WalkRight)
    } else {
        (0.0, 0.0, AnimationKey::WalkDown)
    };

    (Vector2 { x, y }, key)
}

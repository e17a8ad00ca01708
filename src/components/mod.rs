//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animatedsprite`] – player sprite with per-direction animations, position and speed
//! - [`animation`] – sprite-sheet frame strips, playback cursor and the directional key set
//! - [`cameratarget`] – marker for the entity the camera follows
//! - [`inputcontrolled`] – marker for the entity driven by the keyboard
//! - [`sprite`] – static decorative sprite drawn at a fixed pose

pub mod animatedsprite;
pub mod animation;
pub mod cameratarget;
pub mod inputcontrolled;
pub mod sprite;

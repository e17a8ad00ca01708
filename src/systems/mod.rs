//! Game systems.
//!
//! Submodules overview
//! - [`animatedsprite`] – step the player sprite: animation, movement, clamping
//! - [`camera`] – recompute the camera transforms from the tracked sprite
//! - [`debugmode`] – toggle the debug overlay from F11
//! - [`gamestate`] – exit request handling and the running-state condition
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputresolver`] – map held keys to a direction and walk animation
//! - [`render`] – draw sprites and the debug overlay using raylib
//! - [`time`] – update simulation time and delta

pub mod animatedsprite;
pub mod camera;
pub mod debugmode;
pub mod gamestate;
pub mod input;
pub mod inputresolver;
pub mod render;
pub mod time;

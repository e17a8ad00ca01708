//! Events and their observers.
//!
//! - [`gamestate`] – apply pending lifecycle transitions of the game loop
//! - [`switchdebug`] – toggle the debug overlay

pub mod gamestate;
pub mod switchdebug;

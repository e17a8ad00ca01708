//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, camera, asset
//! stores and configuration.
//!
//! Overview
//! - `animationstore` – animation sets built at initialization, keyed by sheet
//! - `camera` – world/screen transforms that follow the player
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window, player and camera settings
//! - `gamestate` – authoritative and pending lifecycle state
//! - `input` – per-frame keyboard and gamepad state
//! - `screensize` – current window dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;

//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [player]
//! speed = 200
//!
//! [camera]
//! zoom = 1.0
//! rotation = 0.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_PLAYER_SPEED: f32 = 200.0;
const DEFAULT_CAMERA_ZOOM: f32 = 1.0;
const DEFAULT_CAMERA_ROTATION: f32 = 0.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the player's walking speed and the camera
/// parameters. Read once at startup; the window is created from it and the
/// game loop copies the gameplay values into the entities it spawns.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Player walking speed in pixels per second.
    pub player_speed: f32,
    /// Camera zoom factor (1.0 = no zoom).
    pub camera_zoom: f32,
    /// Camera rotation in radians.
    pub camera_rotation: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            player_speed: DEFAULT_PLAYER_SPEED,
            camera_zoom: DEFAULT_CAMERA_ZOOM,
            camera_rotation: DEFAULT_CAMERA_ROTATION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }

        // [camera] section
        if let Some(zoom) = config.getfloat("camera", "zoom").ok().flatten() {
            if zoom > 0.0 {
                self.camera_zoom = zoom as f32;
            } else {
                log::warn!("Ignoring non-positive camera zoom {} in config", zoom);
            }
        }
        if let Some(rotation) = config.getfloat("camera", "rotation").ok().flatten() {
            self.camera_rotation = rotation as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, speed={}, zoom={}, rotation={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.player_speed,
            self.camera_zoom,
            self.camera_rotation
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));

        // [camera] section
        config.set("camera", "zoom", Some(self.camera_zoom.to_string()));
        config.set("camera", "rotation", Some(self.camera_rotation.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

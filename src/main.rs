//! Skeleton walk main entry point.
//!
//! A small 2D game sample written in Rust using:
//! - **raylib** for windowing, graphics, textures and input
//! - **bevy_ecs** for the entity-component-system state behind the loop
//!
//! A skeleton walks around with W/A/S/D while a camera keeps it centred.
//! Walking plays a directional sprite-sheet animation; standing still shows
//! the idle pose facing the last direction. Escape (or the gamepad "back"
//! button) quits, F11 toggles the debug overlay.
//!
//! # Project Structure
//!
//! - [`components`] – animations, animated and static sprites, marker components
//! - [`events`] – lifecycle transition and debug toggle events
//! - [`game`] – the [`GameLoop`](game::GameLoop) orchestrator and content setup
//! - [`resources`] – input, camera, config, state, textures, time
//! - [`systems`] – input polling/resolution, sprite update, camera, rendering
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window
//! 2. Initialize the game loop, load the skeleton sheet, spawn the sprites
//! 3. Each frame: refresh the window size, poll input, update, draw
//! 4. Leave when the window closes or the session is exited
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::game::{GameLoop, SKELETON_TEX_KEY, SKELETON_TEX_PATH};
use crate::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::systems::input::update_input_state;
use clap::Parser;
use std::path::PathBuf;

const WINDOW_TITLE: &str = "Skeleton Walk";

/// Skeleton Walk 2D
#[derive(Parser)]
#[command(version, about = "A skeleton walks around a camera-followed view.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{}; using defaults", e);
    }

    // Early-exit: write the config file and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    log::info!("Starting {}", WINDOW_TITLE);
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let target_fps = config.target_fps;

    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title(WINDOW_TITLE);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(target_fps);
    // Escape is handled by the game loop as the exit request
    rl.set_exit_key(None);

    // --------------- Game loop phases ---------------
    let mut game = GameLoop::new(config);
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    if let Err(e) = game.initialize(screen) {
        log::error!("Initialization failed: {}", e);
        std::process::exit(1);
    }

    let mut textures = TextureStore::new();
    if let Err(e) = textures.load(&mut rl, &thread, SKELETON_TEX_KEY, SKELETON_TEX_PATH) {
        log::error!("{}", e);
        std::process::exit(1);
    }
    if let Err(e) = game.load_content(textures) {
        log::error!("Content loading failed: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !rl.window_should_close() && !game.is_exited() {
        let dt = rl.get_frame_time();

        // Window size may change due to resize
        game.set_screen_size(rl.get_screen_width(), rl.get_screen_height());
        update_input_state(game.world_mut(), &rl);

        game.update(dt);

        let mut d = rl.begin_drawing(&thread);
        game.draw(&mut d);
    }
    log::info!("Bye!");
}

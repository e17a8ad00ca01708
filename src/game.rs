//! Game loop orchestration.
//!
//! [`GameLoop`] owns the ECS world and drives it through the lifecycle
//! `Uninitialized -> Initialized -> ContentLoaded -> Running -> Exited`:
//!
//! 1. [`GameLoop::initialize`] builds the camera and the skeleton animations.
//! 2. [`GameLoop::load_content`] binds the textures and spawns the player and
//!    the decorative sprite, then starts running.
//! 3. [`GameLoop::update`] runs once per tick: time, exit check, debug toggle,
//!    sprite update, camera follow.
//! 4. [`GameLoop::draw`] renders the latest state without mutating it.
//!
//! Nothing here touches the window directly; `main` polls raylib and passes
//! the results in, which keeps the loop testable without a display.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::animation::{Animation, AnimationKey, AnimationSet};
use crate::components::cameratarget::CameraTarget;
use crate::components::inputcontrolled::InputControlled;
use crate::components::sprite::Sprite;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera::Camera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animatedsprite::animated_sprite_system;
use crate::systems::camera::camera_follow_system;
use crate::systems::debugmode::toggle_debug_mode;
use crate::systems::gamestate::{check_exit_request, state_is_running};
use crate::systems::render::{render_debug_ui, render_pass};
use crate::systems::time::update_world_time;

/// Texture key of the skeleton sprite sheet.
pub const SKELETON_TEX_KEY: &str = "skeleton";
/// Location of the skeleton sprite sheet.
pub const SKELETON_TEX_PATH: &str = "./assets/textures/skeleton.png";

/// Side of one square frame on the skeleton sheet, in pixels.
const FRAME_SIZE: f32 = 64.0;
/// Walk cycles skip the standing pose in column 0.
const WALK_FRAME_COUNT: usize = 8;
const WALK_FPS: f32 = 10.0;
const IDLE_FPS: f32 = 1.0;
/// First row of the walk block on the sheet (up, left, down, right).
const WALK_FIRST_ROW: f32 = 8.0;

/// Where the decorative skeleton stands, and the frame it shows.
const DECOR_POSITION: Vector2 = Vector2 { x: 160.0, y: 160.0 };
const DECOR_FRAME_OFFSET: Vector2 = Vector2 {
    x: 0.0,
    y: (WALK_FIRST_ROW + 2.0) * FRAME_SIZE,
};

/// Sheet row holding the walk cycle that faces the way `key` does.
fn sheet_row(key: AnimationKey) -> f32 {
    let facing = match key.to_idle() {
        AnimationKey::IdleUp => 0.0,
        AnimationKey::IdleLeft => 1.0,
        AnimationKey::IdleDown => 2.0,
        _ => 3.0,
    };
    WALK_FIRST_ROW + facing
}

/// Build the eight skeleton animations.
///
/// Idle keys show the standing pose (column 0) of the matching row as a
/// single frame; walk keys play the remaining eight columns at 10 fps.
pub fn skeleton_animations() -> AnimationSet {
    let size = Vector2 {
        x: FRAME_SIZE,
        y: FRAME_SIZE,
    };
    AnimationSet::from_fn(|key| {
        let y = sheet_row(key) * FRAME_SIZE;
        if key.is_idle() {
            Animation::new(1, IDLE_FPS, size, Vector2 { x: 0.0, y })
        } else {
            Animation::new(WALK_FRAME_COUNT, WALK_FPS, size, Vector2 { x: FRAME_SIZE, y })
        }
    })
}

pub struct GameLoop {
    world: World,
    update: Schedule,
}

impl GameLoop {
    /// Create an uninitialized loop around `config`.
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(config);
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.spawn(Observer::new(observe_gamestate_change_event));
        world.spawn(Observer::new(switch_debug_observer));
        world.flush();

        let mut update = Schedule::default();
        update.add_systems(check_exit_request);
        update.add_systems(toggle_debug_mode.after(check_exit_request));
        update.add_systems(
            animated_sprite_system
                .run_if(state_is_running)
                .after(check_exit_request),
        );
        update.add_systems(
            camera_follow_system
                .run_if(state_is_running)
                .after(animated_sprite_system),
        );

        Self { world, update }
    }

    /// Construct the frame-independent state: time, input, camera and animations.
    pub fn initialize(&mut self, screen: ScreenSize) -> Result<(), String> {
        self.expect_state(GameStates::Uninitialized, "initialize")?;

        let (zoom, rotation) = {
            let config = self.world.resource::<GameConfig>();
            (config.camera_zoom, config.camera_rotation)
        };

        let mut animations = AnimationStore::new();
        animations.insert(SKELETON_TEX_KEY, skeleton_animations());

        self.world.insert_resource(WorldTime::default());
        self.world.insert_resource(InputState::default());
        self.world.insert_resource(screen);
        self.world.insert_resource(Camera::new(
            screen.w as f32,
            screen.h as f32,
            zoom,
            rotation,
        ));
        self.world.insert_resource(animations);

        self.transition(GameStates::Initialized);
        Ok(())
    }

    /// Bind the loaded textures and spawn the sprites, then start running.
    pub fn load_content(&mut self, textures: TextureStore) -> Result<(), String> {
        self.expect_state(GameStates::Initialized, "load_content")?;

        if !textures.contains(SKELETON_TEX_KEY) {
            log::warn!("Texture '{}' not loaded; sprites will not be drawn", SKELETON_TEX_KEY);
        }
        self.world.insert_non_send_resource(textures);

        let skeleton = self
            .world
            .resource::<AnimationStore>()
            .get(SKELETON_TEX_KEY)
            .cloned()
            .ok_or_else(|| format!("No animations registered for '{}'", SKELETON_TEX_KEY))?;
        let speed = self.world.resource::<GameConfig>().player_speed;
        let start = {
            let screen = self.world.resource::<ScreenSize>();
            Vector2 {
                x: screen.w as f32 * 0.5,
                y: screen.h as f32 * 0.5,
            }
        };

        self.world.spawn((
            AnimatedSprite::new(SKELETON_TEX_KEY, skeleton, AnimationKey::IdleDown, speed, start),
            InputControlled,
            CameraTarget,
        ));
        self.world.spawn(Sprite {
            tex_key: SKELETON_TEX_KEY.into(),
            position: DECOR_POSITION,
            speed: 0.0,
            frame_size: Vector2 {
                x: FRAME_SIZE,
                y: FRAME_SIZE,
            },
            frame_offset: DECOR_FRAME_OFFSET,
        });
        self.world.resource_mut::<Camera>().update(start);
        info!("Spawned player at ({:.1}, {:.1})", start.x, start.y);

        self.transition(GameStates::ContentLoaded);
        self.transition(GameStates::Running);
        Ok(())
    }

    /// Resize notification from the window.
    pub fn set_screen_size(&mut self, w: i32, h: i32) {
        if let Some(mut screen) = self.world.get_resource_mut::<ScreenSize>() {
            if screen.w != w || screen.h != h {
                log::debug!("Screen resized to {}x{}", w, h);
                screen.w = w;
                screen.h = h;
            }
        }
    }

    /// Run one update tick of `dt` seconds. Does nothing unless running.
    pub fn update(&mut self, dt: f32) {
        if self.state() != GameStates::Running {
            return;
        }
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
    }

    /// Render the state computed by the latest [`GameLoop::update`].
    pub fn draw(&mut self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::RAYWHITE);
        if !matches!(self.state(), GameStates::Running | GameStates::Exited) {
            return;
        }
        let cam = self.world.resource::<Camera>().as_camera2d();
        {
            let mut d2 = d.begin_mode2D(cam);
            render_pass(&mut self.world, &mut d2);
        }
        render_debug_ui(&mut self.world, d);
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn is_exited(&self) -> bool {
        self.state() == GameStates::Exited
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn expect_state(&self, expected: GameStates, phase: &str) -> Result<(), String> {
        let current = self.state();
        if current != expected {
            return Err(format!(
                "{} called in state {:?}, expected {:?}",
                phase, current, expected
            ));
        }
        Ok(())
    }

    fn transition(&mut self, next: GameStates) {
        self.world.resource_mut::<NextGameState>().set(next);
        self.world.trigger(GameStateChangedEvent {});
    }
}

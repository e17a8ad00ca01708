//! Game loop integration tests: lifecycle, input-driven movement, camera
//! follow, exit handling and the draw list. Runs headless with an empty
//! texture store.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use skeletonwalk::components::animatedsprite::AnimatedSprite;
use skeletonwalk::components::animation::AnimationKey;
use skeletonwalk::components::sprite::Sprite;
use skeletonwalk::game::GameLoop;
use skeletonwalk::resources::camera::Camera;
use skeletonwalk::resources::debugmode::DebugMode;
use skeletonwalk::resources::gameconfig::GameConfig;
use skeletonwalk::resources::gamestate::GameStates;
use skeletonwalk::resources::input::InputState;
use skeletonwalk::resources::screensize::ScreenSize;
use skeletonwalk::resources::texturestore::TextureStore;
use skeletonwalk::resources::worldtime::WorldTime;
use skeletonwalk::systems::render::collect_draw_commands;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn running_game() -> GameLoop {
    let mut game = GameLoop::new(GameConfig::new());
    game.initialize(ScreenSize { w: 1280, h: 720 }).unwrap();
    game.load_content(TextureStore::new()).unwrap();
    assert_eq!(game.state(), GameStates::Running);
    game
}

fn player(game: &mut GameLoop) -> AnimatedSprite {
    let world = game.world_mut();
    let mut q = world.query::<&AnimatedSprite>();
    q.single(world).unwrap().clone()
}

fn with_input(game: &mut GameLoop, f: impl FnOnce(&mut InputState)) {
    let mut input = game.world_mut().resource_mut::<InputState>();
    *input = InputState::default();
    f(&mut *input);
}

#[test]
fn test_lifecycle_phases_must_run_in_order() {
    let mut game = GameLoop::new(GameConfig::new());
    assert_eq!(game.state(), GameStates::Uninitialized);

    assert!(game.load_content(TextureStore::new()).is_err());
    assert_eq!(game.state(), GameStates::Uninitialized);

    game.initialize(ScreenSize { w: 800, h: 600 }).unwrap();
    assert_eq!(game.state(), GameStates::Initialized);
    assert!(game.initialize(ScreenSize { w: 800, h: 600 }).is_err());

    game.load_content(TextureStore::new()).unwrap();
    assert_eq!(game.state(), GameStates::Running);
    assert!(game.load_content(TextureStore::new()).is_err());
}

#[test]
fn test_update_before_running_is_ignored() {
    let mut game = GameLoop::new(GameConfig::new());
    game.update(0.016);
    assert_eq!(game.state(), GameStates::Uninitialized);

    game.initialize(ScreenSize { w: 800, h: 600 }).unwrap();
    game.update(0.016);
    assert_eq!(game.world().resource::<WorldTime>().frame_count, 0);
}

#[test]
fn test_load_content_spawns_player_and_decoration() {
    let mut game = running_game();
    let p = player(&mut game);
    assert_eq!(p.current, AnimationKey::IdleDown);
    assert!(approx_eq(p.position.x, 640.0));
    assert!(approx_eq(p.position.y, 360.0));
    assert!(!p.is_animating);

    let world = game.world_mut();
    let mut q = world.query::<&Sprite>();
    let decor = q.single(world).unwrap();
    assert!(approx_eq(decor.position.x, 160.0));
    assert!(approx_eq(decor.position.y, 160.0));
    assert_eq!(decor.speed, 0.0);
}

#[test]
fn test_holding_w_walks_up_and_camera_follows() {
    let mut game = running_game();
    with_input(&mut game, |input| input.maindirection_up.active = true);

    game.update(0.1);

    let p = player(&mut game);
    assert_eq!(p.current, AnimationKey::WalkUp);
    assert!(p.is_animating);
    assert!(approx_eq(p.position.x, 640.0));
    assert!(approx_eq(p.position.y, 340.0));

    let camera = game.world().resource::<Camera>();
    let on_screen = camera.world_to_screen_point(p.position);
    assert!(approx_eq(on_screen.x, 640.0));
    assert!(approx_eq(on_screen.y, 360.0));
}

#[test]
fn test_walk_animation_advances_while_key_held() {
    let mut game = running_game();
    with_input(&mut game, |input| input.maindirection_left.active = true);

    // First tick switches to WalkLeft at frame 0.
    game.update(0.05);
    assert_eq!(player(&mut game).current_animation().frame_index(), 0);

    // 10 fps: one frame after 0.1 s of holding.
    game.update(0.05);
    game.update(0.05);
    assert_eq!(player(&mut game).current_animation().frame_index(), 1);
}

#[test]
fn test_release_shows_idle_facing_last_direction() {
    let mut game = running_game();
    with_input(&mut game, |input| input.maindirection_right.active = true);
    game.update(0.1);
    assert_eq!(player(&mut game).current, AnimationKey::WalkRight);

    with_input(&mut game, |_| {});
    game.update(0.1);

    let p = player(&mut game);
    assert_eq!(p.current, AnimationKey::IdleRight);
    assert!(!p.is_animating);
}

#[test]
fn test_player_stays_inside_screen() {
    let mut game = running_game();
    with_input(&mut game, |input| input.maindirection_left.active = true);
    for _ in 0..100 {
        game.update(0.1);
    }
    let p = player(&mut game);
    assert!(approx_eq(p.position.x, -32.0));
}

#[test]
fn test_escape_ends_session() {
    let mut game = running_game();
    with_input(&mut game, |input| {
        input.action_back.active = true;
        input.maindirection_up.active = true;
    });

    game.update(0.1);

    assert!(game.is_exited());
    // The movement system is gated on the running state.
    let p = player(&mut game);
    assert!(approx_eq(p.position.y, 360.0));

    // Further updates are ignored.
    game.update(0.1);
    assert_eq!(game.state(), GameStates::Exited);
}

#[test]
fn test_gamepad_back_ends_session() {
    let mut game = running_game();
    with_input(&mut game, |input| input.gamepad_back.active = true);
    game.update(0.016);
    assert!(game.is_exited());
}

#[test]
fn test_f11_toggles_debug_mode() {
    let mut game = running_game();
    assert!(!game.world().contains_resource::<DebugMode>());

    with_input(&mut game, |input| {
        input.mode_debug.active = true;
        input.mode_debug.just_pressed = true;
    });
    game.update(0.016);
    assert!(game.world().contains_resource::<DebugMode>());

    // Held but not newly pressed: no toggle.
    with_input(&mut game, |input| input.mode_debug.active = true);
    game.update(0.016);
    assert!(game.world().contains_resource::<DebugMode>());

    with_input(&mut game, |input| {
        input.mode_debug.active = true;
        input.mode_debug.just_pressed = true;
    });
    game.update(0.016);
    assert!(!game.world().contains_resource::<DebugMode>());
}

#[test]
fn test_draw_list_puts_player_last() {
    let mut game = running_game();
    game.update(0.016);

    let commands = collect_draw_commands(game.world_mut());
    assert_eq!(commands.len(), 2);
    assert!(approx_eq(commands[0].position.x, 160.0));
    assert!(approx_eq(commands[1].position.x, 640.0));
    assert!(approx_eq(commands[1].source.y, 640.0));
    assert!(commands.iter().all(|c| &*c.tex_key == "skeleton"));
}

#[test]
fn test_draw_list_culls_offscreen_sprites() {
    let mut game = running_game();
    // Move the decoration far away from the camera.
    {
        let world = game.world_mut();
        let mut q = world.query::<&mut Sprite>();
        for mut sprite in q.iter_mut(world) {
            sprite.position = Vector2 {
                x: 10_000.0,
                y: 10_000.0,
            };
        }
    }
    game.update(0.016);

    let commands = collect_draw_commands(game.world_mut());
    assert_eq!(commands.len(), 1);
}

#[test]
fn test_resize_updates_clamp_and_camera_centre() {
    let mut game = running_game();
    game.set_screen_size(400, 300);
    with_input(&mut game, |input| input.maindirection_right.active = true);

    game.update(0.1);

    // 400 - 32 is the rightmost x for a 64 px frame.
    let p = player(&mut game);
    assert!(approx_eq(p.position.x, 368.0));

    let camera = game.world().resource::<Camera>();
    assert!(approx_eq(camera.viewport().x, 400.0));
    let on_screen = camera.world_to_screen_point(p.position);
    assert!(approx_eq(on_screen.x, 200.0));
    assert!(approx_eq(on_screen.y, 150.0));
}

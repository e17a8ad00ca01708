use bevy_ecs::prelude::*;
use raylib::prelude::*;
use std::sync::Arc;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::sprite::Sprite;
use crate::resources::camera::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// One textured quad to issue: texture key, source rectangle, world position.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub tex_key: Arc<str>,
    pub source: Rectangle,
    pub position: Vector2,
}

/// Collect what to draw this frame, in draw order.
///
/// Static sprites come first so the animated sprite is drawn on top. Anything
/// whose frame does not intersect the camera's visible world rectangle is
/// culled.
pub fn collect_draw_commands(world: &mut World) -> Vec<DrawCommand> {
    let view = world.resource::<Camera>().visible_world_rect();

    let mut commands: Vec<DrawCommand> = {
        let mut q = world.query::<&Sprite>();
        q.iter(world)
            .map(|s| DrawCommand {
                tex_key: Arc::clone(&s.tex_key),
                source: s.source_rect(),
                position: s.position,
            })
            .collect()
    };
    {
        let mut q = world.query::<&AnimatedSprite>();
        commands.extend(q.iter(world).map(|s| DrawCommand {
            tex_key: Arc::clone(&s.tex_key),
            source: s.current_frame(),
            position: s.position,
        }));
    }

    commands.retain(|cmd| {
        let min_x = cmd.position.x;
        let min_y = cmd.position.y;
        let max_x = min_x + cmd.source.width;
        let max_y = min_y + cmd.source.height;
        !(max_x < view.x
            || min_x > view.x + view.width
            || max_y < view.y
            || min_y > view.y + view.height)
    });
    commands
}

/// We render inside raylib's 2D camera scope, which applies the same
/// world→screen transform as [`Camera`]. Textures missing from the store are
/// skipped.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let to_draw = collect_draw_commands(world);
    let textures = world.non_send_resource::<TextureStore>();

    for cmd in to_draw.iter() {
        if let Some(tex) = textures.get(&*cmd.tex_key) {
            d2.draw_texture_rec(tex, cmd.source, cmd.position, Color::WHITE);
        }
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();
    let time = *world.resource::<WorldTime>();
    let cam = world.resource::<Camera>().clone();

    let text = format!(
        "DEBUG MODE (press F11 to toggle) | FPS: {} | Frame: {}",
        d.get_fps(),
        time.frame_count
    );
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    let player = {
        let mut q = world.query::<&AnimatedSprite>();
        q.iter(world).next().cloned()
    };
    if let Some(player) = player {
        let text = format!(
            "Player pos: ({:.1}, {:.1}) Anim: {:?} frame {} moving: {}",
            player.position.x,
            player.position.y,
            player.current,
            player.current_animation().frame_index(),
            player.is_animating
        );
        d.draw_text(&text, 10, 30, 10, Color::BLACK);
    }

    let mouse_pos = d.get_mouse_position();
    let mouse_world = cam.screen_to_world_point(mouse_pos);
    let mouse_text = format!(
        "Mouse screen: ({:.1}, {:.1}) World: ({:.1}, {:.1})",
        mouse_pos.x, mouse_pos.y, mouse_world.x, mouse_world.y
    );
    d.draw_text(&mouse_text, 10, 50, 10, Color::BLACK);

    let cam_pos = cam.position();
    let cam_text = format!(
        "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
        cam_pos.x,
        cam_pos.y,
        cam.zoom()
    );
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::BLACK);
}

//! Shared 2D camera resource.
//!
//! Keeps a world→screen transform and its inverse, derived from a tracked
//! position, a zoom factor and a rotation. [`Camera::update`] recomputes both
//! matrices together, once per frame, after the tracked entity has moved.
//!
//! The transform matches raylib's own 2D camera, so the draw pass can hand
//! [`Camera::as_camera2d`] to `begin_mode2D` and get the same picture.

use bevy_ecs::prelude::Resource;
use glam::{Mat4, Vec3};
use raylib::prelude::{Camera2D, Rectangle, Vector2};

#[derive(Resource, Debug, Clone)]
pub struct Camera {
    world_to_screen: Mat4,
    screen_to_world: Mat4,
    zoom: f32,
    /// Rotation around the view centre, in radians.
    rotation: f32,
    position: Vector2,
    viewport: Vector2,
}

impl Camera {
    /// Camera looking at the world origin with the given viewport size.
    pub fn new(viewport_width: f32, viewport_height: f32, zoom: f32, rotation: f32) -> Self {
        let mut camera = Self {
            world_to_screen: Mat4::IDENTITY,
            screen_to_world: Mat4::IDENTITY,
            zoom,
            rotation,
            position: Vector2 { x: 0.0, y: 0.0 },
            viewport: Vector2 {
                x: viewport_width,
                y: viewport_height,
            },
        };
        camera.update(camera.position);
        camera
    }

    /// Recompute both transforms so that `tracked` lands on the viewport centre.
    pub fn update(&mut self, tracked: Vector2) {
        self.position = tracked;
        let centre = self.viewport_centre();
        // Column-vector order of translate(-p) · rotate · scale · translate(centre).
        self.world_to_screen = Mat4::from_translation(Vec3::new(centre.x, centre.y, 0.0))
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_translation(Vec3::new(-tracked.x, -tracked.y, 0.0));
        self.screen_to_world = self.world_to_screen.inverse();
    }

    /// Apply a viewport resize. Takes effect on the next [`Camera::update`].
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vector2 {
            x: width,
            y: height,
        };
    }

    pub fn world_to_screen(&self) -> Mat4 {
        self.world_to_screen
    }

    pub fn screen_to_world(&self) -> Mat4 {
        self.screen_to_world
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn viewport(&self) -> Vector2 {
        self.viewport
    }

    pub fn viewport_centre(&self) -> Vector2 {
        Vector2 {
            x: self.viewport.x * 0.5,
            y: self.viewport.y * 0.5,
        }
    }

    pub fn world_to_screen_point(&self, point: Vector2) -> Vector2 {
        transform(self.world_to_screen, point)
    }

    pub fn screen_to_world_point(&self, point: Vector2) -> Vector2 {
        transform(self.screen_to_world, point)
    }

    /// Axis-aligned world rectangle covering everything on screen.
    pub fn visible_world_rect(&self) -> Rectangle {
        let corners = [
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 {
                x: self.viewport.x,
                y: 0.0,
            },
            Vector2 {
                x: 0.0,
                y: self.viewport.y,
            },
            self.viewport,
        ]
        .map(|corner| self.screen_to_world_point(corner));

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for c in corners {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        Rectangle {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Equivalent raylib camera for `begin_mode2D`.
    pub fn as_camera2d(&self) -> Camera2D {
        Camera2D {
            target: self.position,
            offset: self.viewport_centre(),
            rotation: self.rotation.to_degrees(),
            zoom: self.zoom,
        }
    }
}

fn transform(matrix: Mat4, point: Vector2) -> Vector2 {
    let p = matrix.transform_point3(Vec3::new(point.x, point.y, 0.0));
    Vector2 { x: p.x, y: p.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_inverse_pair(camera: &Camera) {
        let product = camera.screen_to_world() * camera.world_to_screen();
        assert!(
            product.abs_diff_eq(Mat4::IDENTITY, 1e-3),
            "screen_to_world is not the inverse of world_to_screen: {product:?}"
        );
    }

    #[test]
    fn test_update_keeps_matrices_inverse() {
        let mut camera = Camera::new(1280.0, 720.0, 1.0, 0.0);
        for p in [
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 640.0, y: 360.0 },
            Vector2 {
                x: -1234.5,
                y: 987.25,
            },
        ] {
            camera.update(p);
            assert_inverse_pair(&camera);
        }
    }

    #[test]
    fn test_update_keeps_matrices_inverse_with_zoom_and_rotation() {
        let mut camera = Camera::new(1920.0, 1080.0, 2.5, 0.7);
        camera.update(Vector2 { x: 300.0, y: -80.0 });
        assert_inverse_pair(&camera);
    }

    #[test]
    fn test_tracked_position_maps_to_viewport_centre() {
        let mut camera = Camera::new(1280.0, 720.0, 2.0, 0.3);
        let tracked = Vector2 { x: 100.0, y: 50.0 };
        camera.update(tracked);
        let screen = camera.world_to_screen_point(tracked);
        assert!(approx_eq(screen.x, 640.0));
        assert!(approx_eq(screen.y, 360.0));
    }

    #[test]
    fn test_zoom_scales_distances_from_centre() {
        let mut camera = Camera::new(800.0, 600.0, 2.0, 0.0);
        camera.update(Vector2 { x: 0.0, y: 0.0 });
        let screen = camera.world_to_screen_point(Vector2 { x: 10.0, y: 5.0 });
        assert!(approx_eq(screen.x, 420.0));
        assert!(approx_eq(screen.y, 310.0));
    }

    #[test]
    fn test_screen_to_world_point_round_trips() {
        let mut camera = Camera::new(800.0, 600.0, 1.5, 1.1);
        camera.update(Vector2 { x: 42.0, y: 17.0 });
        let world = Vector2 { x: -3.0, y: 99.0 };
        let back = camera.screen_to_world_point(camera.world_to_screen_point(world));
        assert!(approx_eq(back.x, world.x));
        assert!(approx_eq(back.y, world.y));
    }

    #[test]
    fn test_set_viewport_moves_centre_on_next_update() {
        let mut camera = Camera::new(800.0, 600.0, 1.0, 0.0);
        camera.set_viewport(1000.0, 500.0);
        camera.update(Vector2 { x: 0.0, y: 0.0 });
        let screen = camera.world_to_screen_point(Vector2 { x: 0.0, y: 0.0 });
        assert!(approx_eq(screen.x, 500.0));
        assert!(approx_eq(screen.y, 250.0));
    }

    #[test]
    fn test_visible_world_rect_without_rotation() {
        let mut camera = Camera::new(800.0, 600.0, 2.0, 0.0);
        camera.update(Vector2 { x: 100.0, y: 100.0 });
        let rect = camera.visible_world_rect();
        assert!(approx_eq(rect.x, -100.0));
        assert!(approx_eq(rect.y, -50.0));
        assert!(approx_eq(rect.width, 400.0));
        assert!(approx_eq(rect.height, 300.0));
    }

    #[test]
    fn test_as_camera2d_matches_fields() {
        let mut camera = Camera::new(800.0, 600.0, 1.5, std::f32::consts::FRAC_PI_2);
        camera.update(Vector2 { x: 12.0, y: 34.0 });
        let cam2d = camera.as_camera2d();
        assert!(approx_eq(cam2d.target.x, 12.0));
        assert!(approx_eq(cam2d.target.y, 34.0));
        assert!(approx_eq(cam2d.offset.x, 400.0));
        assert!(approx_eq(cam2d.offset.y, 300.0));
        assert!(approx_eq(cam2d.rotation, 90.0));
        assert!(approx_eq(cam2d.zoom, 1.5));
    }
}

//! # 2D Camera
//!
//! Orthographic camera for sprite rendering. World units map one-to-one onto
//! screen pixels at scale 1, and the camera position is shown at the center
//! of the screen.
//!
//! ## Coordinate System
//!
//! - World and projection space: X+ right, Y+ up, origin bottom-left
//! - Screen (window) space: X+ right, Y+ down, origin top-left
//!
//! Matrices are recomputed lazily: setters mark the camera dirty and
//! [`Camera2D::update`] rebuilds the view-projection once per change.

use crate::foundation::math::{Mat4, Vec2, Vec3};

/// 2D camera with position and uniform zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    screen_width: u32,
    screen_height: u32,
    position: Vec2,
    scale: f32,
    projection: Mat4,
    view_projection: Mat4,
    needs_update: bool,
}

impl Camera2D {
    /// Create a camera for a screen of the given size, centered on the origin
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let mut camera = Self {
            screen_width,
            screen_height,
            position: Vec2::zeros(),
            scale: 1.0,
            projection: Mat4::identity(),
            view_projection: Mat4::identity(),
            needs_update: true,
        };
        camera.rebuild_projection();
        camera
    }

    /// Recompute the view-projection if anything changed
    pub fn update(&mut self) {
        if !self.needs_update {
            return;
        }

        let (half_width, half_height) = self.half_screen();
        let translation = Mat4::new_translation(&Vec3::new(
            -self.position.x + half_width,
            -self.position.y + half_height,
            0.0,
        ));
        let scaling = Mat4::new_nonuniform_scaling(&Vec3::new(self.scale, self.scale, 1.0));

        self.view_projection = scaling * self.projection * translation;
        self.needs_update = false;
    }

    /// Matrix taking world positions to clip space
    ///
    /// Reflects the state as of the last [`update`](Self::update).
    pub const fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    /// Convert a window position (Y down) to world coordinates
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let (half_width, half_height) = self.half_screen();
        let flipped = Vec2::new(screen.x, self.screen_height as f32 - screen.y);
        let centered = flipped - Vec2::new(half_width, half_height);
        centered / self.scale + self.position
    }

    /// World position shown at the screen center
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the camera
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.needs_update = true;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Zoom factor; 2.0 shows everything twice as large
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the zoom factor
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.needs_update = true;
    }

    /// Screen size in pixels
    pub const fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    /// Resize the screen, e.g. after a window resize
    pub fn set_screen_size(&mut self, screen_width: u32, screen_height: u32) {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        self.rebuild_projection();
        log::debug!("Camera screen size set to {}x{}", screen_width, screen_height);
    }

    /// Whether the matrices are stale
    pub const fn needs_update(&self) -> bool {
        self.needs_update
    }

    fn half_screen(&self) -> (f32, f32) {
        (self.screen_width as f32 * 0.5, self.screen_height as f32 * 0.5)
    }

    fn rebuild_projection(&mut self) {
        self.projection = Mat4::new_orthographic(
            0.0,
            self.screen_width as f32,
            0.0,
            self.screen_height as f32,
            -1.0,
            1.0,
        );
        self.needs_update = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec4;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn to_clip(camera: &Camera2D, x: f32, y: f32) -> Vec4 {
        camera.view_projection() * Vec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_position_maps_to_screen_center() {
        let mut camera = Camera2D::new(800, 600);
        camera.set_position(Vec2::new(100.0, -50.0));
        camera.update();

        let clip = to_clip(&camera, 100.0, -50.0);
        assert_relative_eq!(clip.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(clip.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_screen_edges_at_unit_scale() {
        let mut camera = Camera2D::new(800, 600);
        camera.update();

        let corner = to_clip(&camera, 400.0, 300.0);
        assert_relative_eq!(corner.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.y, 1.0, epsilon = EPSILON);

        let corner = to_clip(&camera, -400.0, -300.0);
        assert_relative_eq!(corner.x, -1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.y, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_scale_zooms_about_center() {
        let mut camera = Camera2D::new(800, 600);
        camera.set_scale(2.0);
        camera.update();

        let corner = to_clip(&camera, 200.0, 150.0);
        assert_relative_eq!(corner.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_update_only_when_dirty() {
        let mut camera = Camera2D::new(800, 600);
        assert!(camera.needs_update());
        camera.update();
        assert!(!camera.needs_update());

        let before = camera.view_projection();
        camera.set_position(Vec2::new(10.0, 0.0));
        // Stale until the next update
        assert_eq!(camera.view_projection(), before);
        camera.update();
        assert_ne!(camera.view_projection(), before);
    }

    #[test]
    fn test_screen_to_world() {
        let mut camera = Camera2D::new(800, 600);

        let center = camera.screen_to_world(Vec2::new(400.0, 300.0));
        assert_relative_eq!(center, Vec2::zeros(), epsilon = EPSILON);

        camera.set_position(Vec2::new(50.0, 20.0));
        camera.set_scale(2.0);
        let top_right = camera.screen_to_world(Vec2::new(800.0, 0.0));
        assert_relative_eq!(top_right, Vec2::new(250.0, 170.0), epsilon = EPSILON);
    }

    #[test]
    fn test_resize_rebuilds_projection() {
        let mut camera = Camera2D::new(800, 600);
        camera.update();
        camera.set_screen_size(1024, 768);
        assert!(camera.needs_update());
        camera.update();

        let corner = to_clip(&camera, 512.0, 384.0);
        assert_relative_eq!(corner.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.y, 1.0, epsilon = EPSILON);
        assert_eq!(camera.screen_size(), (1024, 768));
    }
}

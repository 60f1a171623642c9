//! Projectiles fired from the screen center

use sprite_engine::foundation::math::Vec2;
use sprite_engine::render::{Glyph, Rect, ResourceHandle, SpriteBatch, SpriteBatchError};

/// Bullet sprite size in world units
pub const BULLET_SIZE: f32 = 30.0;

/// A straight-moving projectile with a limited lifetime
#[derive(Debug, Clone)]
pub struct Bullet {
    position: Vec2,
    direction: Vec2,
    speed: f32,
    frames_left: u32,
}

impl Bullet {
    /// Fire a bullet; `direction` is normalized here
    pub fn new(position: Vec2, direction: Vec2, speed: f32, lifetime_frames: u32) -> Self {
        let direction = direction
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(|| Vec2::new(1.0, 0.0));
        Self {
            position,
            direction,
            speed,
            frames_left: lifetime_frames,
        }
    }

    /// Advance one frame; returns true once the bullet has expired
    pub fn update(&mut self) -> bool {
        self.position += self.direction * self.speed;
        self.frames_left = self.frames_left.saturating_sub(1);
        self.frames_left == 0
    }

    /// Queue the bullet's sprite
    pub fn draw(
        &self,
        batch: &mut SpriteBatch,
        texture: ResourceHandle,
    ) -> Result<(), SpriteBatchError> {
        let dest = Rect::new(self.position.x, self.position.y, BULLET_SIZE, BULLET_SIZE);
        batch.submit(Glyph::new(dest, texture).with_depth(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_along_direction() {
        let mut bullet = Bullet::new(Vec2::zeros(), Vec2::new(0.0, 2.0), 5.0, 10);
        assert!(!bullet.update());
        assert_eq!(bullet.position, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_expires_after_lifetime() {
        let mut bullet = Bullet::new(Vec2::zeros(), Vec2::new(1.0, 0.0), 1.0, 3);
        assert!(!bullet.update());
        assert!(!bullet.update());
        assert!(bullet.update());
    }

    #[test]
    fn test_zero_direction_does_not_produce_nan() {
        let mut bullet = Bullet::new(Vec2::zeros(), Vec2::zeros(), 1.0, 5);
        bullet.update();
        assert!(bullet.position.x.is_finite());
    }

    #[test]
    fn test_draw_submits_one_glyph() {
        let bullet = Bullet::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, 0.0), 1.0, 5);
        let mut batch = SpriteBatch::new();
        batch.begin().unwrap();
        bullet.draw(&mut batch, ResourceHandle(2)).unwrap();
        assert_eq!(batch.glyph_count(), 1);
    }
}

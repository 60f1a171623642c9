//! Sprite demo scene
//!
//! A crowd of identical character sprites plus a stream of bullets fired
//! from the camera position, drawn every frame through a headless backend.

use std::time::Instant;

use rand::Rng;
use sprite_engine::foundation::math::Vec2;
use sprite_engine::foundation::time::{FpsCounter, FrameLimiter};
use sprite_engine::render::{
    Camera2D, Glyph, HeadlessBackend, Rect, ResourceHandle, SpriteBatch, SpriteRenderer,
    TextureInfo, TextureRegistry,
};

use crate::bullet::Bullet;
use crate::config::DemoConfig;
use crate::DemoError;

/// Character sprite edge length in world units
const SPRITE_SIZE: f32 = 64.0;

/// Size assumed for textures that cannot be read from disk
const PLACEHOLDER_TEXTURE_SIZE: u32 = 32;

/// Summary of a finished run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Frames drawn
    pub frames: u64,
    /// Draw calls issued over the run
    pub draw_calls: usize,
    /// Bullets alive at the end
    pub bullets_alive: usize,
    /// Last averaged FPS
    pub fps: f32,
}

/// Demo state
pub struct SpriteDemo {
    config: DemoConfig,
    camera: Camera2D,
    batch: SpriteBatch,
    renderer: SpriteRenderer,
    backend: HeadlessBackend,
    sprites: Vec<Glyph>,
    bullets: Vec<Bullet>,
    bullet_texture: ResourceHandle,
    fps_counter: FpsCounter,
    limiter: Option<FrameLimiter>,
}

impl SpriteDemo {
    /// Build the scene described by `config`
    pub fn new(config: DemoConfig) -> Self {
        log::info!("Creating sprite demo...");

        let mut textures = TextureRegistry::new();
        let character = load_texture(&mut textures, &config.character_texture);
        let bullet = load_texture(&mut textures, &config.bullet_texture);

        let sprites = build_scene(character.handle, config.sprite_count);
        log::info!("Scene has {} sprites", sprites.len());

        let mut camera = Camera2D::new(config.screen_width, config.screen_height);
        camera.update();

        let timing = &config.engine.timing;
        let limiter = config
            .limit_frame_rate
            .then(|| FrameLimiter::new(timing.max_fps));

        Self {
            camera,
            batch: SpriteBatch::with_config(&config.engine.batch),
            renderer: SpriteRenderer::new(),
            backend: HeadlessBackend::new(),
            sprites,
            bullets: Vec::new(),
            bullet_texture: bullet.handle,
            fps_counter: FpsCounter::new(timing.fps_sample_count),
            limiter,
            config,
        }
    }

    /// Run the configured number of frames
    pub fn run(&mut self) -> Result<RunSummary, DemoError> {
        log::info!("Running {} frames", self.config.frame_count);

        let mut rng = rand::thread_rng();
        let mut summary = RunSummary::default();

        for frame in 0..self.config.frame_count {
            let frame_start = Instant::now();

            if frame % self.config.bullet_interval_frames == 0 {
                self.fire_bullet(&mut rng);
            }
            self.bullets.retain_mut(|bullet| !bullet.update());

            summary.draw_calls += self.draw_frame()?;
            summary.frames += 1;

            let fps = self.fps_counter.tick();
            if (frame + 1) % self.config.engine.timing.report_interval_frames == 0 {
                let stats = self.batch.stats();
                log::info!(
                    "FPS: {:.1} | {} glyphs in {} batches | {} bullets",
                    fps,
                    stats.glyph_count,
                    stats.batch_count,
                    self.bullets.len()
                );
            }

            if let Some(limiter) = &self.limiter {
                limiter.wait(frame_start.elapsed());
            }
        }

        summary.bullets_alive = self.bullets.len();
        summary.fps = self.fps_counter.fps();
        Ok(summary)
    }

    fn fire_bullet(&mut self, rng: &mut impl Rng) {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let direction = Vec2::new(angle.cos(), angle.sin());
        self.bullets.push(Bullet::new(
            self.camera.position(),
            direction,
            self.config.bullet_speed,
            self.config.bullet_lifetime,
        ));
    }

    fn draw_frame(&mut self) -> Result<usize, DemoError> {
        self.camera.update();

        self.batch.begin()?;
        for sprite in &self.sprites {
            self.batch.submit(*sprite)?;
        }
        for bullet in &self.bullets {
            bullet.draw(&mut self.batch, self.bullet_texture)?;
        }
        self.batch.end()?;

        let stats = self
            .renderer
            .render(&self.batch, &self.camera.view_projection(), &mut self.backend)?;
        self.backend.clear_calls();
        Ok(stats.draw_calls)
    }
}

/// Two marker sprites below the origin, then `count` stacked on the left
fn build_scene(texture: ResourceHandle, count: usize) -> Vec<Glyph> {
    let mut sprites = Vec::with_capacity(count + 2);
    sprites.push(Glyph::new(
        Rect::new(-SPRITE_SIZE, -SPRITE_SIZE, SPRITE_SIZE, SPRITE_SIZE),
        texture,
    ));
    sprites.push(Glyph::new(
        Rect::new(0.0, -SPRITE_SIZE, SPRITE_SIZE, SPRITE_SIZE),
        texture,
    ));
    sprites.extend(
        std::iter::repeat(Glyph::new(
            Rect::new(-SPRITE_SIZE, 0.0, SPRITE_SIZE, SPRITE_SIZE),
            texture,
        ))
        .take(count),
    );
    sprites
}

fn load_texture(textures: &mut TextureRegistry, path: &str) -> TextureInfo {
    match textures.load(path) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("Could not read texture {}: {}; using placeholder size", path, e);
            textures.register(path, PLACEHOLDER_TEXTURE_SIZE, PLACEHOLDER_TEXTURE_SIZE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> DemoConfig {
        DemoConfig {
            frame_count: 12,
            sprite_count: 50,
            limit_frame_rate: false,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_scene_layout() {
        let sprites = build_scene(ResourceHandle(1), 1000);
        assert_eq!(sprites.len(), 1002);
        assert!(sprites.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_run_draws_every_frame() {
        let mut demo = SpriteDemo::new(quick_config());
        let summary = demo.run().unwrap();

        assert_eq!(summary.frames, 12);
        // Bullets fired on frames 0, 5 and 10 are still alive
        assert_eq!(summary.bullets_alive, 3);
        // Characters and bullets use different textures
        assert_eq!(summary.draw_calls, 12 * 2);
    }

    #[test]
    fn test_bullets_expire() {
        let config = DemoConfig {
            bullet_lifetime: 2,
            ..quick_config()
        };
        let mut demo = SpriteDemo::new(config);
        let summary = demo.run().unwrap();

        assert_eq!(summary.bullets_alive, 0);
    }
}

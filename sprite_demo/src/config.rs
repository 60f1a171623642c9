//! Demo configuration

use serde::{Deserialize, Serialize};
use sprite_engine::config::{Config, ConfigError};
use sprite_engine::core::EngineConfig;

/// Settings for the sprite demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Engine settings shared with any other application
    pub engine: EngineConfig,
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Frames to run before exiting
    pub frame_count: u64,
    /// Static character sprites in addition to the two markers
    pub sprite_count: usize,
    /// Texture drawn by the character sprites
    pub character_texture: String,
    /// Texture drawn by bullets
    pub bullet_texture: String,
    /// Fire a bullet every this many frames
    pub bullet_interval_frames: u64,
    /// World units per frame
    pub bullet_speed: f32,
    /// Frames before a bullet disappears
    pub bullet_lifetime: u32,
    /// Sleep to honor `engine.timing.max_fps`
    pub limit_frame_rate: bool,
}

impl DemoConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be non-zero (got {}x{})",
                self.screen_width, self.screen_height
            )));
        }
        if self.bullet_interval_frames == 0 {
            return Err(ConfigError::Invalid(
                "bullet_interval_frames must be at least 1".to_string(),
            ));
        }
        self.engine.validate()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            screen_width: 1024,
            screen_height: 768,
            frame_count: 600,
            sprite_count: 1000,
            character_texture: "textures/character_right_standing.png".to_string(),
            bullet_texture: "textures/bullet.png".to_string(),
            bullet_interval_frames: 5,
            bullet_speed: 5.0,
            bullet_lifetime: 120,
            limit_frame_rate: true,
        }
    }
}

impl Config for DemoConfig {}

//! # Engine Configuration
//!
//! Configuration for the batching core and the frame loop that drives it.
//!
//! ## Configuration Categories
//!
//! - **Batch Config**: Glyph storage capacity and draw-order policy
//! - **Timing Config**: Frame-rate cap and FPS reporting
//! - **Engine Config**: Top-level aggregate plus logging
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::render::sprite_batch::GlyphSortMode;

/// Largest `initial_glyph_capacity` accepted from configuration
pub const MAX_INITIAL_GLYPH_CAPACITY: usize = 1 << 16;

/// # Batch Configuration
///
/// Settings for [`SpriteBatch`](crate::render::sprite_batch::SpriteBatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Glyphs pre-allocated before the first frame
    pub initial_glyph_capacity: usize,
    /// Draw-order policy applied at the end of recording
    pub sort_mode: GlyphSortMode,
}

impl BatchConfig {
    /// Create a batch configuration with defaults
    pub fn new() -> Self {
        Self {
            initial_glyph_capacity: 1024,
            sort_mode: GlyphSortMode::Texture,
        }
    }

    /// Set the initial glyph capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_glyph_capacity = capacity;
        self
    }

    /// Set the sort mode
    pub fn with_sort_mode(mut self, sort_mode: GlyphSortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_glyph_capacity > MAX_INITIAL_GLYPH_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_glyph_capacity must be at most {MAX_INITIAL_GLYPH_CAPACITY} (got {})",
                self.initial_glyph_capacity
            )));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Timing Configuration
///
/// Frame pacing and FPS reporting for the render loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frame-rate cap; zero disables limiting
    pub max_fps: f32,
    /// Frames averaged by the FPS counter
    pub fps_sample_count: usize,
    /// Log the FPS once every this many frames
    pub report_interval_frames: u64,
}

impl TimingConfig {
    /// Create a timing configuration with defaults
    pub fn new() -> Self {
        Self {
            max_fps: 60.0,
            fps_sample_count: 10,
            report_interval_frames: 10,
        }
    }

    /// Set the frame-rate cap
    pub fn with_max_fps(mut self, max_fps: f32) -> Self {
        self.max_fps = max_fps;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_fps.is_finite() || self.max_fps < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_fps must be a finite, non-negative number (got {})",
                self.max_fps
            )));
        }
        if self.fps_sample_count == 0 {
            return Err(ConfigError::Invalid(
                "fps_sample_count must be at least 1".to_string(),
            ));
        }
        if self.report_interval_frames == 0 {
            return Err(ConfigError::Invalid(
                "report_interval_frames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Engine Configuration
///
/// Top-level configuration that applications load from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Sprite batch settings
    pub batch: BatchConfig,
    /// Frame timing settings
    pub timing: TimingConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            batch: BatchConfig::default(),
            timing: TimingConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set batch configuration
    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    /// Set timing configuration
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        self.batch.validate()?;
        self.timing.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

//! Sprite batching demo
//!
//! Draws a scene of 1000+ sprites with moving bullets through the headless
//! backend and reports FPS and batch counts.
//!
//! ```text
//! sprite_demo [config.toml | config.ron]
//! ```

mod bullet;
mod config;
mod demo;

use std::path::PathBuf;

use sprite_engine::config::{Config, ConfigError};
use sprite_engine::foundation::logging;
use sprite_engine::render::{RenderError, SpriteBatchError};

use crate::config::DemoConfig;
use crate::demo::SpriteDemo;

/// Errors that end the demo
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A frame could not be recorded
    #[error("Sprite batch error: {0}")]
    Batch(#[from] SpriteBatchError),

    /// A frame could not be drawn
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

fn main() -> Result<(), DemoError> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load_or_default(config_path.as_deref())?;

    logging::init(&config.engine.log_level);
    log::info!("Starting sprite demo");

    config.validate()?;

    let mut demo = SpriteDemo::new(config);
    match demo.run() {
        Ok(summary) => {
            log::info!(
                "Sprite demo finished: {} frames, {} draw calls, {} bullets alive, final FPS {:.1}",
                summary.frames,
                summary.draw_calls,
                summary.bullets_alive,
                summary.fps
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Application error: {}", e);
            Err(e)
        }
    }
}

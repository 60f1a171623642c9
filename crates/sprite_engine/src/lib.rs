//! # Sprite Engine
//!
//! A 2D sprite batching engine that turns large numbers of per-frame quad
//! requests into the smallest practical number of GPU draw calls.
//!
//! ## Features
//!
//! - **Glyph Collection**: Record sprites in any order between `begin` and `end`
//! - **Batch Building**: Sort by texture then depth, emit vertices, merge runs
//! - **Backend Agnostic**: Any GPU API that can upload vertices and draw ranges
//! - **Frame Timing**: FPS averaging and frame-rate limiting as owned objects
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut batch = SpriteBatch::new();
//!     let mut renderer = SpriteRenderer::new();
//!     let mut backend = HeadlessBackend::new();
//!     let mut camera = Camera2D::new(1024, 768);
//!     camera.update();
//!
//!     batch.begin()?;
//!     batch.submit(Glyph::new(Rect::new(0.0, 0.0, 32.0, 32.0), ResourceHandle(1)))?;
//!     batch.end()?;
//!
//!     renderer.render(&batch, &camera.view_projection(), &mut backend)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{BatchConfig, EngineConfig, TimingConfig},
        config::{Config, ConfigError},
        foundation::{
            math::{Mat4, Vec2, Vec4},
            time::{FpsCounter, FrameLimiter},
        },
        render::{
            backend::{BackendError, HeadlessBackend, SpriteBackend},
            camera::Camera2D,
            sprite_batch::{
                Glyph, GlyphSortMode, Rect, RenderBatch, ResourceHandle, SpriteBatch,
                SpriteBatchError, SpriteVertex,
            },
            sprite_renderer::{RenderError, SpriteRenderer},
            texture_registry::{TextureInfo, TextureRegistry},
        },
    };
}

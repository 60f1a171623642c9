//! # Rendering System
//!
//! Sprite batching and the seam to the GPU.
//!
//! ## Architecture
//!
//! ```text
//! Application -> SpriteBatch -> SpriteRenderer -> SpriteBackend
//!                    ^               ^
//!              TextureRegistry    Camera2D
//! ```
//!
//! - [`sprite_batch`]: Per-frame glyph collection and batch building
//! - [`sprite_renderer`]: Replays built batches into a backend
//! - [`backend`]: The trait a GPU backend implements, plus a headless recorder
//! - [`camera`]: 2D view-projection
//! - [`texture_registry`]: Path to resource handle mapping

pub mod backend;
pub mod camera;
pub mod sprite_batch;
pub mod sprite_renderer;
pub mod texture_registry;

pub use backend::{BackendCall, BackendError, BackendResult, HeadlessBackend, SpriteBackend};
pub use camera::Camera2D;
pub use sprite_batch::{
    Glyph, GlyphRejection, GlyphSortMode, Rect, RecordingState, RenderBatch, RenderBatches,
    ResourceHandle, SpriteBatch, SpriteBatchError, SpriteVertex,
};
pub use sprite_renderer::{FrameRenderStats, RenderError, SpriteRenderer};
pub use texture_registry::{TextureError, TextureInfo, TextureRegistry};

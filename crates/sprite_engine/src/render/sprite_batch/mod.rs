//! # Sprite Batch
//!
//! Collects a frame's sprite requests and turns them into the smallest set of
//! draw calls that keeps each texture's sprites in depth order.
//!
//! ## Architecture
//!
//! - **SpriteBatch**: Recording state machine and owner of the frame arenas
//! - **BatchBuilder**: Sort, vertex emission and merge at end of recording
//! - **RenderBatch**: Vertex range plus the resource to bind for it
//!
//! ## Frame Lifecycle
//!
//! ```text
//! begin() -> submit(glyph)* -> end() -> batches() / vertices()
//! ```
//!
//! Storage is cleared, not reallocated, at `begin()`; after the first few
//! frames submitting a glyph no longer allocates.
//!
//! ## Draw Order
//!
//! The default [`GlyphSortMode::Texture`] groups by texture first and only
//! then by depth. Two overlapping sprites with different textures may
//! therefore paint in either order regardless of their depths; callers that
//! need cross-texture ordering select a depth-only sort mode and accept more
//! draw calls.

mod batch;
mod builder;
mod glyph;
mod vertex;


use std::fmt;
use std::time::Instant;

pub use batch::{RenderBatch, RenderBatches};
pub use builder::{BatchBuilder, GlyphSortMode};
pub use glyph::{Glyph, GlyphRejection, Rect, ResourceHandle};
pub use vertex::{quad_vertices, SpriteVertex, VERTICES_PER_GLYPH};

use crate::core::config::{BatchConfig, MAX_INITIAL_GLYPH_CAPACITY};

/// Result type for sprite batch operations
pub type BatchResult<T> = Result<T, SpriteBatchError>;

/// Errors reported by the sprite batch
///
/// Neither error changes the batch state: a rejected call can be corrected
/// and the frame completed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpriteBatchError {
    /// Operation called out of the begin/submit/end sequence
    #[error("Invalid state: {operation}() called while {state}")]
    InvalidState {
        /// Operation that was refused
        operation: &'static str,
        /// State the batch was in
        state: RecordingState,
    },

    /// Glyph refused at submit time
    #[error("Invalid glyph: {0}")]
    InvalidGlyph(#[from] GlyphRejection),
}

/// Recording phase of a sprite batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    /// No frame has been recorded yet
    #[default]
    Idle,
    /// Between `begin` and `end`
    Recording,
    /// `end` has run; batches are available
    Finished,
}

impl fmt::Display for RecordingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Statistics for the most recent frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Glyphs accepted this frame
    pub glyph_count: usize,
    /// Glyphs refused this frame
    pub rejected_glyphs: usize,
    /// Batches produced at `end`
    pub batch_count: usize,
    /// Vertices emitted at `end`
    pub vertex_count: usize,
    /// Time spent sorting, emitting and merging (microseconds)
    pub build_time_us: u64,
}

impl BatchStats {
    /// Average glyphs per batch
    pub fn avg_glyphs_per_batch(&self) -> f32 {
        if self.batch_count == 0 {
            0.0
        } else {
            self.glyph_count as f32 / self.batch_count as f32
        }
    }
}

/// Collector for one frame of sprite draw requests
#[derive(Debug)]
pub struct SpriteBatch {
    state: RecordingState,
    builder: BatchBuilder,
    glyphs: Vec<Glyph>,
    vertices: Vec<SpriteVertex>,
    batches: Vec<RenderBatch>,
    stats: BatchStats,
}

impl SpriteBatch {
    /// Create a sprite batch with default settings
    pub fn new() -> Self {
        Self::with_config(&BatchConfig::default())
    }

    /// Create a sprite batch from configuration
    ///
    /// The pre-allocation is capped at [`MAX_INITIAL_GLYPH_CAPACITY`]; storage
    /// still grows past it on demand.
    pub fn with_config(config: &BatchConfig) -> Self {
        let capacity = config.initial_glyph_capacity.min(MAX_INITIAL_GLYPH_CAPACITY);
        Self {
            state: RecordingState::Idle,
            builder: BatchBuilder::new(config.sort_mode),
            glyphs: Vec::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity.saturating_mul(VERTICES_PER_GLYPH)),
            batches: Vec::new(),
            stats: BatchStats::default(),
        }
    }

    /// Start recording a frame
    ///
    /// Drops the previous frame's glyphs, vertices and batches while keeping
    /// their allocations.
    pub fn begin(&mut self) -> BatchResult<()> {
        self.expect_not_recording("begin")?;

        self.glyphs.clear();
        self.vertices.clear();
        self.batches.clear();
        self.stats = BatchStats::default();
        self.state = RecordingState::Recording;
        Ok(())
    }

    /// Queue a glyph for this frame
    pub fn submit(&mut self, glyph: Glyph) -> BatchResult<()> {
        self.expect_recording("submit")?;

        if let Err(rejection) = glyph.validate() {
            self.stats.rejected_glyphs += 1;
            log::warn!("Rejected glyph for resource {}: {}", glyph.resource, rejection);
            return Err(rejection.into());
        }

        self.glyphs.push(glyph);
        Ok(())
    }

    /// Finish recording and build this frame's batches
    pub fn end(&mut self) -> BatchResult<()> {
        self.expect_recording("end")?;

        let start_time = Instant::now();
        self.builder
            .build(&mut self.glyphs, &mut self.vertices, &mut self.batches);
        let build_time = start_time.elapsed();

        self.stats.glyph_count = self.glyphs.len();
        self.stats.batch_count = self.batches.len();
        self.stats.vertex_count = self.vertices.len();
        self.stats.build_time_us = u64::try_from(build_time.as_micros()).unwrap_or(u64::MAX);
        self.state = RecordingState::Finished;

        log::debug!(
            "Sprite batch built: {} glyphs -> {} batches ({:.1} glyphs/batch, {} rejected) in {}us",
            self.stats.glyph_count,
            self.stats.batch_count,
            self.stats.avg_glyphs_per_batch(),
            self.stats.rejected_glyphs,
            self.stats.build_time_us,
        );
        Ok(())
    }

    /// Batches of the last finished frame, in draw order
    ///
    /// Empty while recording or before the first frame.
    pub fn batches(&self) -> RenderBatches<'_> {
        match self.state {
            RecordingState::Finished => RenderBatches::new(&self.batches),
            RecordingState::Idle | RecordingState::Recording => RenderBatches::new(&[]),
        }
    }

    /// Vertex buffer of the last finished frame
    ///
    /// Empty while recording or before the first frame.
    pub fn vertices(&self) -> &[SpriteVertex] {
        match self.state {
            RecordingState::Finished => &self.vertices,
            RecordingState::Idle | RecordingState::Recording => &[],
        }
    }

    /// Current recording state
    pub const fn state(&self) -> RecordingState {
        self.state
    }

    /// Whether `begin` has been called without a matching `end`
    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    /// Glyphs accepted since the last `begin`
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Statistics for the current or last frame
    pub const fn stats(&self) -> &BatchStats {
        &self.stats
    }

    /// Sort mode used at the next `end`
    pub const fn sort_mode(&self) -> GlyphSortMode {
        self.builder.sort_mode()
    }

    /// Change the sort mode; takes effect at the next `end`
    pub fn set_sort_mode(&mut self, sort_mode: GlyphSortMode) {
        self.builder.set_sort_mode(sort_mode);
    }

    fn expect_recording(&self, operation: &'static str) -> BatchResult<()> {
        if self.state == RecordingState::Recording {
            Ok(())
        } else {
            Err(SpriteBatchError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn expect_not_recording(&self, operation: &'static str) -> BatchResult<()> {
        if self.state == RecordingState::Recording {
            Err(SpriteBatchError::InvalidState {
                operation,
                state: self.state,
            })
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    fn storage_capacity(&self) -> (usize, usize) {
        (self.glyphs.capacity(), self.vertices.capacity())
    }
}

impl Default for SpriteBatch {
    fn default() -> Self {
        Self::new()
    }
}

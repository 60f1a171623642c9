//! Sprite renderer
//!
//! Replays a finished [`SpriteBatch`] into a [`SpriteBackend`]: one vertex
//! upload per frame, then one bind and one draw per render batch.

use crate::foundation::math::Mat4;
use crate::render::backend::{BackendError, SpriteBackend};
use crate::render::sprite_batch::{SpriteBatch, SpriteBatchError};

/// Errors that can occur while rendering a sprite batch
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The batch is not in a drawable state
    #[error("Sprite batch error: {0}")]
    Batch(#[from] SpriteBatchError),

    /// The backend refused a call
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Per-frame draw statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRenderStats {
    /// Draw calls issued
    pub draw_calls: usize,
    /// Vertices uploaded
    pub vertices_uploaded: usize,
}

/// Draws finished sprite batches through a backend
#[derive(Debug, Default)]
pub struct SpriteRenderer {
    last_frame: FrameRenderStats,
    frames_rendered: u64,
}

impl SpriteRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the last finished frame of `batch`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Batch`] if `batch` is still recording, or
    /// [`RenderError::Backend`] when the backend rejects a call. A failed
    /// frame leaves the batch untouched and can be drawn again.
    pub fn render<B: SpriteBackend + ?Sized>(
        &mut self,
        batch: &SpriteBatch,
        view_projection: &Mat4,
        backend: &mut B,
    ) -> Result<FrameRenderStats, RenderError> {
        if batch.is_recording() {
            return Err(SpriteBatchError::InvalidState {
                operation: "render",
                state: batch.state(),
            }
            .into());
        }

        backend.set_view_projection(view_projection);

        let vertices = batch.vertices();
        if !vertices.is_empty() {
            backend.upload_vertices(vertices)?;
        }

        let mut stats = FrameRenderStats {
            draw_calls: 0,
            vertices_uploaded: vertices.len(),
        };

        for render_batch in batch.batches() {
            backend.bind_resource(render_batch.resource())?;
            backend.draw_range(render_batch.offset(), render_batch.vertex_count())?;
            stats.draw_calls += 1;

            log::trace!(
                "Draw {} vertices at {} with resource {}",
                render_batch.vertex_count(),
                render_batch.offset(),
                render_batch.resource()
            );
        }

        self.last_frame = stats;
        self.frames_rendered += 1;
        Ok(stats)
    }

    /// Statistics of the last successful frame
    pub const fn last_frame(&self) -> FrameRenderStats {
        self.last_frame
    }

    /// Frames rendered successfully
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

//! Backend abstraction for sprite drawing
//!
//! A backend receives one frame as: a view-projection matrix, a single
//! vertex upload, then alternating resource binds and range draws. Anything
//! that can do those four things can draw sprites.

use crate::foundation::math::Mat4;
use crate::render::sprite_batch::{ResourceHandle, SpriteVertex};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors reported by a sprite backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Vertex data could not be transferred to the GPU
    #[error("Vertex upload failed: {0}")]
    UploadFailed(String),

    /// The resource handle is unknown to the backend
    #[error("Invalid resource: {0}")]
    InvalidResource(ResourceHandle),

    /// A draw referenced vertices outside the uploaded buffer
    #[error("Draw range {offset}..{end} exceeds {available} uploaded vertices")]
    InvalidRange {
        /// First vertex of the draw
        offset: usize,
        /// One past the last vertex of the draw
        end: usize,
        /// Vertices in the current upload
        available: usize,
    },

    /// The draw itself failed
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}

/// GPU backend for sprite rendering
pub trait SpriteBackend {
    /// Set the matrix applied to every vertex this frame
    fn set_view_projection(&mut self, view_projection: &Mat4);

    /// Replace the vertex buffer with this frame's vertices
    fn upload_vertices(&mut self, vertices: &[SpriteVertex]) -> BackendResult<()>;

    /// Bind the texture used by subsequent draws
    fn bind_resource(&mut self, resource: ResourceHandle) -> BackendResult<()>;

    /// Draw `count` vertices starting at `offset` as a triangle list
    fn draw_range(&mut self, offset: usize, count: usize) -> BackendResult<()>;
}

/// A call received by [`HeadlessBackend`]
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    /// `set_view_projection`
    SetViewProjection(Mat4),
    /// `upload_vertices`
    UploadVertices {
        /// Vertices uploaded
        vertex_count: usize,
        /// Size of the upload in bytes
        byte_len: usize,
    },
    /// `bind_resource`
    BindResource(ResourceHandle),
    /// `draw_range`
    DrawRange {
        /// First vertex
        offset: usize,
        /// Vertex count
        count: usize,
    },
}

/// Backend that records calls instead of drawing
///
/// Used by tests and the demo. It applies the same checks a GPU backend would
/// need: no null binds, no draws without a bound resource and no draws past
/// the end of the uploaded buffer.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    calls: Vec<BackendCall>,
    uploaded_vertices: usize,
    bound: Option<ResourceHandle>,
    total_bytes_uploaded: usize,
    total_draw_calls: usize,
}

impl HeadlessBackend {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received since the last `clear_calls`
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Forget recorded calls and the bound resource, keeping totals
    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.bound = None;
        self.uploaded_vertices = 0;
    }

    /// Number of draw calls over the backend's lifetime
    pub const fn total_draw_calls(&self) -> usize {
        self.total_draw_calls
    }

    /// Bytes uploaded over the backend's lifetime
    pub const fn total_bytes_uploaded(&self) -> usize {
        self.total_bytes_uploaded
    }
}

impl SpriteBackend for HeadlessBackend {
    fn set_view_projection(&mut self, view_projection: &Mat4) {
        self.calls.push(BackendCall::SetViewProjection(*view_projection));
    }

    fn upload_vertices(&mut self, vertices: &[SpriteVertex]) -> BackendResult<()> {
        let byte_len = bytemuck::cast_slice::<SpriteVertex, u8>(vertices).len();

        self.uploaded_vertices = vertices.len();
        self.total_bytes_uploaded += byte_len;
        self.calls.push(BackendCall::UploadVertices {
            vertex_count: vertices.len(),
            byte_len,
        });
        Ok(())
    }

    fn bind_resource(&mut self, resource: ResourceHandle) -> BackendResult<()> {
        if resource.is_null() {
            return Err(BackendError::InvalidResource(resource));
        }
        self.bound = Some(resource);
        self.calls.push(BackendCall::BindResource(resource));
        Ok(())
    }

    fn draw_range(&mut self, offset: usize, count: usize) -> BackendResult<()> {
        if self.bound.is_none() {
            return Err(BackendError::DrawFailed("no resource bound".to_string()));
        }
        let end = offset.saturating_add(count);
        if end > self.uploaded_vertices {
            return Err(BackendError::InvalidRange {
                offset,
                end,
                available: self.uploaded_vertices,
            });
        }

        self.total_draw_calls += 1;
        self.calls.push(BackendCall::DrawRange { offset, count });
        Ok(())
    }
}

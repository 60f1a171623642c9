//! Render batches and their iteration

use std::iter::FusedIterator;
use std::ops::Range;

use super::glyph::ResourceHandle;
use super::vertex::VERTICES_PER_GLYPH;

/// A contiguous run of vertices drawn with one resource bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBatch {
    pub(super) offset: usize,
    pub(super) vertex_count: usize,
    pub(super) resource: ResourceHandle,
}

impl RenderBatch {
    pub(super) const fn new(offset: usize, vertex_count: usize, resource: ResourceHandle) -> Self {
        Self {
            offset,
            vertex_count,
            resource,
        }
    }

    /// Index of the first vertex in the frame's vertex buffer
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of vertices in this batch
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Resource bound for this batch
    pub const fn resource(&self) -> ResourceHandle {
        self.resource
    }

    /// Number of glyphs merged into this batch
    pub const fn glyph_count(&self) -> usize {
        self.vertex_count / VERTICES_PER_GLYPH
    }

    /// Vertex index range covered by this batch
    pub const fn vertex_range(&self) -> Range<usize> {
        self.offset..self.offset + self.vertex_count
    }
}

/// Ordered iterator over one frame's batches
///
/// Cloning the iterator, or asking the sprite batch for a fresh one, restarts
/// iteration from the first batch.
#[derive(Debug, Clone)]
pub struct RenderBatches<'a> {
    inner: std::slice::Iter<'a, RenderBatch>,
}

impl<'a> RenderBatches<'a> {
    pub(super) fn new(batches: &'a [RenderBatch]) -> Self {
        Self {
            inner: batches.iter(),
        }
    }

    /// Remaining batches as a slice
    pub fn as_slice(&self) -> &'a [RenderBatch] {
        self.inner.as_slice()
    }
}

impl<'a> Iterator for RenderBatches<'a> {
    type Item = &'a RenderBatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RenderBatches<'_> {}

impl FusedIterator for RenderBatches<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_batch_accessors() {
        let batch = RenderBatch::new(12, 18, ResourceHandle(4));
        assert_eq!(batch.offset(), 12);
        assert_eq!(batch.vertex_count(), 18);
        assert_eq!(batch.resource(), ResourceHandle(4));
        assert_eq!(batch.glyph_count(), 3);
        assert_eq!(batch.vertex_range(), 12..30);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let storage = [
            RenderBatch::new(0, 6, ResourceHandle(1)),
            RenderBatch::new(6, 12, ResourceHandle(2)),
        ];
        let batches = RenderBatches::new(&storage);
        assert_eq!(batches.len(), 2);

        let first_pass: Vec<_> = batches.clone().collect();
        let second_pass: Vec<_> = batches.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass[1].resource(), ResourceHandle(2));
    }
}

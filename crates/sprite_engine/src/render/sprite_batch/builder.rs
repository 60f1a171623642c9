//! # Batch Builder
//!
//! Turns the frame's unsorted glyph list into a vertex buffer and a list of
//! render batches:
//!
//! 1. Sort glyphs by the configured [`GlyphSortMode`]
//! 2. Emit six vertices per glyph in sorted order
//! 3. Start a new batch whenever the resource handle changes
//!
//! The builder owns no storage. It writes into the arenas held by the sprite
//! batch, which keeps their capacity across frames.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::batch::RenderBatch;
use super::glyph::Glyph;
use super::vertex::{quad_vertices, SpriteVertex, VERTICES_PER_GLYPH};

/// Draw-order policy applied when recording ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphSortMode {
    /// Group by resource handle, then ascending depth within a group
    ///
    /// Yields the fewest draw calls. Depth is only honored between glyphs
    /// that share a resource.
    #[default]
    Texture,
    /// Ascending depth across all resources
    FrontToBack,
    /// Descending depth across all resources
    BackToFront,
    /// Keep submission order
    None,
}

impl GlyphSortMode {
    fn compare(self, a: &Glyph, b: &Glyph) -> Ordering {
        match self {
            Self::Texture => a
                .resource
                .cmp(&b.resource)
                .then_with(|| a.depth.total_cmp(&b.depth)),
            Self::FrontToBack => a.depth.total_cmp(&b.depth),
            Self::BackToFront => b.depth.total_cmp(&a.depth),
            Self::None => Ordering::Equal,
        }
    }
}

/// Sorts, expands and merges one frame of glyphs
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchBuilder {
    sort_mode: GlyphSortMode,
}

impl BatchBuilder {
    /// Create a builder with the given sort mode
    pub const fn new(sort_mode: GlyphSortMode) -> Self {
        Self { sort_mode }
    }

    /// Current sort mode
    pub const fn sort_mode(&self) -> GlyphSortMode {
        self.sort_mode
    }

    /// Change the sort mode used by the next build
    pub fn set_sort_mode(&mut self, sort_mode: GlyphSortMode) {
        self.sort_mode = sort_mode;
    }

    /// Build vertices and batches from `glyphs`
    ///
    /// `glyphs` is sorted in place. `vertices` and `batches` are cleared
    /// first, so after the call they describe exactly this set of glyphs.
    pub fn build(
        &self,
        glyphs: &mut [Glyph],
        vertices: &mut Vec<SpriteVertex>,
        batches: &mut Vec<RenderBatch>,
    ) {
        vertices.clear();
        batches.clear();

        if glyphs.is_empty() {
            return;
        }

        self.sort(glyphs);

        vertices.reserve(glyphs.len() * VERTICES_PER_GLYPH);

        for glyph in glyphs.iter() {
            let offset = vertices.len();
            vertices.extend_from_slice(&quad_vertices(glyph));

            match batches.last_mut() {
                Some(batch) if batch.resource == glyph.resource => {
                    batch.vertex_count += VERTICES_PER_GLYPH;
                }
                _ => batches.push(RenderBatch::new(offset, VERTICES_PER_GLYPH, glyph.resource)),
            }
        }
    }

    fn sort(&self, glyphs: &mut [Glyph]) {
        if self.sort_mode == GlyphSortMode::None {
            return;
        }
        let mode = self.sort_mode;
        glyphs.sort_by(|a, b| mode.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sprite_batch::glyph::{Rect, ResourceHandle};
    use bytemuck::Zeroable;

    fn glyph(resource: u64, depth: f32) -> Glyph {
        Glyph::new(Rect::new(0.0, 0.0, 1.0, 1.0), ResourceHandle(resource)).with_depth(depth)
    }

    fn build(mode: GlyphSortMode, glyphs: &mut [Glyph]) -> (Vec<SpriteVertex>, Vec<RenderBatch>) {
        let mut vertices = Vec::new();
        let mut batches = Vec::new();
        BatchBuilder::new(mode).build(glyphs, &mut vertices, &mut batches);
        (vertices, batches)
    }

    #[test]
    fn test_empty_input_builds_nothing() {
        let (vertices, batches) = build(GlyphSortMode::Texture, &mut []);
        assert!(vertices.is_empty());
        assert!(batches.is_empty());
    }

    #[test]
    fn test_texture_mode_orders_by_resource_then_depth() {
        let mut glyphs = [glyph(2, 0.0), glyph(1, 5.0), glyph(1, -1.0), glyph(2, -3.0)];
        build(GlyphSortMode::Texture, &mut glyphs);

        let order: Vec<_> = glyphs.iter().map(|g| (g.resource.0, g.depth)).collect();
        assert_eq!(order, vec![(1, -1.0), (1, 5.0), (2, -3.0), (2, 0.0)]);
    }

    #[test]
    fn test_depth_modes_ignore_resource() {
        let mut glyphs = [glyph(1, 2.0), glyph(2, 1.0), glyph(1, 0.0)];
        let (_, batches) = build(GlyphSortMode::FrontToBack, &mut glyphs);
        let depths: Vec<_> = glyphs.iter().map(|g| g.depth).collect();
        assert_eq!(depths, vec![0.0, 1.0, 2.0]);
        // 1, 2, 1 interleaves resources, so three batches
        assert_eq!(batches.len(), 3);

        let (_, batches) = build(GlyphSortMode::BackToFront, &mut glyphs);
        let depths: Vec<_> = glyphs.iter().map(|g| g.depth).collect();
        assert_eq!(depths, vec![2.0, 1.0, 0.0]);
        assert_eq!(batches.len(), 3);
    }

    #[test]
    fn test_none_mode_keeps_submission_order() {
        let mut glyphs = [glyph(3, 9.0), glyph(3, 1.0), glyph(1, 4.0)];
        let (_, batches) = build(GlyphSortMode::None, &mut glyphs);

        assert_eq!(glyphs[0].depth, 9.0);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].resource(), ResourceHandle(3));
        assert_eq!(batches[0].vertex_count(), 12);
    }

    #[test]
    fn test_build_clears_previous_output() {
        let mut vertices = vec![SpriteVertex::zeroed(); 3];
        let mut batches = vec![RenderBatch::new(0, 3, ResourceHandle(9))];
        let mut glyphs = [glyph(1, 0.0)];

        BatchBuilder::default().build(&mut glyphs, &mut vertices, &mut batches);

        assert_eq!(vertices.len(), VERTICES_PER_GLYPH);
        assert_eq!(batches, vec![RenderBatch::new(0, 6, ResourceHandle(1))]);
    }

    #[test]
    fn test_sort_mode_deserializes_from_snake_case() {
        let mode: GlyphSortMode = ron::from_str("back_to_front").unwrap();
        assert_eq!(mode, GlyphSortMode::BackToFront);
    }
}

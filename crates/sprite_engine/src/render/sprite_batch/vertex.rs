//! Vertex layout and quad expansion

use bytemuck::{Pod, Zeroable};

use super::glyph::Glyph;
use crate::foundation::math::{utils, Vec2};

/// Vertices emitted per glyph: two triangles, no index buffer
pub const VERTICES_PER_GLYPH: usize = 6;

/// Vertex data consumed by the sprite shader
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Position in world units
    pub position: [f32; 2],
    /// Normalized texture coordinates
    pub uv: [f32; 2],
    /// RGBA tint
    pub color: [f32; 4],
}

/// Expand a glyph into its six vertices
///
/// Corners are rotated about the rectangle center before being moved to
/// their final position. Triangle order is top-left, bottom-left,
/// bottom-right, then bottom-right, top-right, top-left.
pub fn quad_vertices(glyph: &Glyph) -> [SpriteVertex; VERTICES_PER_GLYPH] {
    let dest = &glyph.dest;
    let half = Vec2::new(dest.width * 0.5, dest.height * 0.5);
    let center = Vec2::new(dest.x + half.x, dest.y + half.y);

    let corner = |local: Vec2| {
        let p = center + utils::rotate(local, glyph.rotation);
        [p.x, p.y]
    };

    let top_left = corner(Vec2::new(-half.x, half.y));
    let bottom_left = corner(Vec2::new(-half.x, -half.y));
    let bottom_right = corner(Vec2::new(half.x, -half.y));
    let top_right = corner(Vec2::new(half.x, half.y));

    let uv = &glyph.uv;
    let uv_top_left = [uv.x, uv.y + uv.height];
    let uv_bottom_left = [uv.x, uv.y];
    let uv_bottom_right = [uv.x + uv.width, uv.y];
    let uv_top_right = [uv.x + uv.width, uv.y + uv.height];

    let color = [glyph.color.x, glyph.color.y, glyph.color.z, glyph.color.w];
    let vertex = |position, uv| SpriteVertex { position, uv, color };

    [
        vertex(top_left, uv_top_left),
        vertex(bottom_left, uv_bottom_left),
        vertex(bottom_right, uv_bottom_right),
        vertex(bottom_right, uv_bottom_right),
        vertex(top_right, uv_top_right),
        vertex(top_left, uv_top_left),
    ]
}

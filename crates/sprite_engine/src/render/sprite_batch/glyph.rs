//! Glyph data structures
//!
//! A glyph is one requested quad for one frame. Glyphs are plain values: the
//! batch copies them on submit and forgets them at the next `begin`.

use std::fmt;

use crate::foundation::math::Vec4;

/// Opaque identifier of a bound texture or material
///
/// The batching core only compares and orders handles; what they refer to is
/// up to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResourceHandle(pub u64);

impl ResourceHandle {
    /// Handle that never refers to a resource
    pub const NULL: Self = Self(0);

    /// Whether this is the null handle
    pub const fn is_null(self) -> bool {
        self.0 == Self::NULL.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis-aligned rectangle: `(x, y)` is the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its bottom-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The whole texture in normalized coordinates
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// One sprite draw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Destination rectangle in world units
    pub dest: Rect,
    /// Source region in normalized texture coordinates
    pub uv: Rect,
    /// Texture the quad samples from
    pub resource: ResourceHandle,
    /// Paint-order key; lower depth is drawn first
    pub depth: f32,
    /// Rotation in radians about the destination center
    pub rotation: f32,
    /// RGBA tint multiplied with the sampled texel
    pub color: Vec4,
}

impl Glyph {
    /// Create a glyph covering `dest` with the full texture, no tint and no rotation
    pub fn new(dest: Rect, resource: ResourceHandle) -> Self {
        Self {
            dest,
            uv: Rect::unit(),
            resource,
            depth: 0.0,
            rotation: 0.0,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    /// Set the texture region
    pub fn with_uv(mut self, uv: Rect) -> Self {
        self.uv = uv;
        self
    }

    /// Set the depth
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the rotation in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the RGBA tint
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Check that the glyph can be turned into geometry
    pub fn validate(&self) -> Result<(), GlyphRejection> {
        if !self.dest.is_finite() || !self.rotation.is_finite() {
            return Err(GlyphRejection::NonFiniteGeometry);
        }
        if self.dest.width <= 0.0 || self.dest.height <= 0.0 {
            return Err(GlyphRejection::EmptyDestination {
                width: self.dest.width,
                height: self.dest.height,
            });
        }
        if self.resource.is_null() {
            return Err(GlyphRejection::NullResource);
        }
        if !self.depth.is_finite() {
            return Err(GlyphRejection::NonFiniteDepth(self.depth));
        }
        Ok(())
    }
}

/// Reason a glyph was refused at submit time
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GlyphRejection {
    /// Destination rectangle has no area
    #[error("destination rectangle has no area ({width} x {height})")]
    EmptyDestination {
        /// Submitted width
        width: f32,
        /// Submitted height
        height: f32,
    },

    /// Position, size or rotation is NaN or infinite
    #[error("destination rectangle or rotation is not finite")]
    NonFiniteGeometry,

    /// Glyph refers to the null resource
    #[error("glyph uses the null resource handle")]
    NullResource,

    /// Depth cannot be ordered
    #[error("depth {0} is not finite")]
    NonFiniteDepth(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_glyph_defaults() {
        let glyph = Glyph::new(Rect::new(1.0, 2.0, 3.0, 4.0), ResourceHandle(7));
        assert_eq!(glyph.uv, Rect::unit());
        assert_eq!(glyph.depth, 0.0);
        assert_eq!(glyph.rotation, 0.0);
        assert_eq!(glyph.color, Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert!(glyph.validate().is_ok());
    }

    #[test]
    fn test_zero_area_rejected() {
        let glyph = Glyph::new(Rect::new(0.0, 0.0, 0.0, 10.0), ResourceHandle(1));
        assert!(matches!(
            glyph.validate(),
            Err(GlyphRejection::EmptyDestination { .. })
        ));

        let glyph = Glyph::new(Rect::new(0.0, 0.0, 10.0, -1.0), ResourceHandle(1));
        assert!(matches!(
            glyph.validate(),
            Err(GlyphRejection::EmptyDestination { .. })
        ));
    }

    #[test]
    fn test_null_resource_rejected() {
        let glyph = Glyph::new(Rect::new(0.0, 0.0, 1.0, 1.0), ResourceHandle::NULL);
        assert_eq!(glyph.validate(), Err(GlyphRejection::NullResource));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let base = Glyph::new(Rect::new(0.0, 0.0, 1.0, 1.0), ResourceHandle(1));

        assert!(matches!(
            base.with_depth(f32::NAN).validate(),
            Err(GlyphRejection::NonFiniteDepth(_))
        ));
        assert_eq!(
            base.with_rotation(f32::INFINITY).validate(),
            Err(GlyphRejection::NonFiniteGeometry)
        );
    }

    #[test]
    fn test_handle_ordering() {
        assert!(ResourceHandle(1) < ResourceHandle(2));
        assert!(ResourceHandle::NULL.is_null());
        assert_eq!(ResourceHandle(3).to_string(), "#3");
    }
}

//! Math utilities and types
//!
//! Provides the small set of math types the 2D pipeline needs.

pub use nalgebra::{Matrix4, Rotation2, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math utility functions
pub mod utils {
    use super::{Rotation2, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }

    /// Rotate `point` counter-clockwise by `angle` radians around the origin
    ///
    /// A zero angle returns the point untouched so axis-aligned sprites do not
    /// pick up rounding error from `sin`/`cos`.
    pub fn rotate(point: Vec2, angle: f32) -> Vec2 {
        if angle == 0.0 {
            return point;
        }
        Rotation2::new(angle) * point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = utils::rotate(Vec2::new(1.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(rotated, Vec2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let point = Vec2::new(3.5, -2.25);
        assert_eq!(utils::rotate(point, 0.0), point);
    }
}

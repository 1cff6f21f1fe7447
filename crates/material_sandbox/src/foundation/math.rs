//! Math utilities and types
//!
//! Provides the small set of vector and matrix types the sandbox needs.

pub use nalgebra::{Matrix3, Vector3, Vector4, Unit};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// Rotation matrix of `angle` radians around the +Y axis
pub fn rotation_y(angle: f32) -> Mat3 {
    nalgebra::Rotation3::from_axis_angle(&Vec3::y_axis(), angle).into_inner()
}

/// Normalize a direction, falling back to `fallback` for degenerate input
pub fn normalize_or(direction: Vec3, fallback: Vec3) -> Vec3 {
    direction.try_normalize(f32::EPSILON).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_y_quarter_turn() {
        let rotated = rotation_y(std::f32::consts::FRAC_PI_2) * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_or_degenerate() {
        let fallback = Vec3::new(0.0, -1.0, 0.0);
        assert_eq!(normalize_or(Vec3::zeros(), fallback), fallback);
        assert_relative_eq!(normalize_or(Vec3::new(0.0, 0.0, 2.0), fallback), Vec3::new(0.0, 0.0, 1.0));
    }
}

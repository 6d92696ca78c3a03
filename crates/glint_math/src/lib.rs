// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod aabb;
mod ray;

pub use aabb::{Aabb, AABB_PAD_ABSOLUTE, AABB_PAD_RELATIVE};
pub use ray::Ray;

/// Tolerance used by [`is_normalized`].
pub const NORMALIZED_TOLERANCE: f32 = 1e-4;

/// Returns true if `v` has unit length within [`NORMALIZED_TOLERANCE`].
///
/// Used by debug assertions in the shading code; comparing squared lengths
/// avoids a square root.
#[inline]
pub fn is_normalized(v: Vec3) -> bool {
    (v.length_squared() - 1.0).abs() < NORMALIZED_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized(Vec3::X));
        assert!(is_normalized(Vec3::new(1.0, 1.0, 0.0).normalize()));
        assert!(!is_normalized(Vec3::new(1.0, 1.0, 0.0)));
        assert!(!is_normalized(Vec3::ZERO));
    }
}

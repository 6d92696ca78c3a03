//! Ray-sphere intersection.

use crate::hittable::Hittable;
use glint_core::Sphere;
use glint_math::{is_normalized, Ray};

impl Hittable for Sphere {
    /// Geometric form of the ray-sphere test for a unit-length direction.
    ///
    /// Returns the nearer non-negative root. When the origin is inside the
    /// sphere the near root is negative and the exit point is reported
    /// instead. Both roots behind the origin is a miss.
    fn hit(&self, ray: &Ray) -> Option<f32> {
        debug_assert!(is_normalized(ray.direction()));

        let oc = ray.origin() - self.center;
        let b = ray.direction().dot(oc);
        let discriminant = b * b - (oc.length_squared() - self.radius_squared);

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let far_root = -b + sqrt_discriminant;
        if far_root < 0.0 {
            return None;
        }

        let near_root = -b - sqrt_discriminant;
        Some(if near_root >= 0.0 { near_root } else { far_root })
    }
}

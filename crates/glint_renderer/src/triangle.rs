//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm.

use crate::hittable::Hittable;
use glint_core::Triangle;
use glint_math::Ray;

/// Parallel-ray threshold for the determinant, and the minimum accepted hit
/// distance. The distance cutoff keeps shadow rays from re-hitting the
/// surface they start on.
pub const TRIANGLE_EPSILON: f32 = 1e-7;

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < TRIANGLE_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        // Line intersection; only in front of the origin is a ray hit
        let t = f * edge2.dot(q);
        (t > TRIANGLE_EPSILON).then_some(t)
    }
}

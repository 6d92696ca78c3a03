use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized on construction and the fields are private,
/// so every `Ray` in the system satisfies `|direction| == 1`. The intersection
/// and shading code relies on this (the sphere test and the Blinn-Phong terms
/// assume unit vectors).
///
/// The componentwise reciprocal of the direction is cached for the slab test
/// in [`crate::Aabb::hit`]. A zero component becomes `±inf`, which the slab
/// test handles through IEEE-754 arithmetic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` does not need to be normalized, but it
    /// must be finite and non-zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.length_squared() > 0.0 && direction.is_finite(),
            "ray direction must be finite and non-zero, got {direction}"
        );
        let direction = direction.normalize();

        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Componentwise `1 / direction`.
    #[inline]
    pub fn inv_direction(&self) -> Vec3 {
        self.inv_direction
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

//! Geometric primitives: spheres and triangles.
//!
//! These are plain value types. Intersection routines live in the renderer;
//! this module only provides the derived quantities the scene store and the
//! shader need (normals, centroids, bounds).

use glint_math::{Aabb, Vec3};

/// A sphere stored as center and squared radius.
///
/// The squared radius is what the intersection test consumes, so it is kept
/// instead of the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius_squared: f32,
}

impl Sphere {
    /// Create a sphere from its squared radius.
    pub fn new(center: Vec3, radius_squared: f32) -> Self {
        Self {
            center,
            radius_squared,
        }
    }

    /// Create a sphere from its radius.
    pub fn with_radius(center: Vec3, radius: f32) -> Self {
        Self::new(center, radius * radius)
    }

    pub fn radius(&self) -> f32 {
        self.radius_squared.sqrt()
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, surface_point: Vec3) -> Vec3 {
        (surface_point - self.center).normalize()
    }

    /// `[center - radius, center + radius]`
    pub fn bounding_box(&self) -> Aabb {
        let r = Vec3::splat(self.radius());
        Aabb::new(self.center - r, self.center + r)
    }
}

/// A triangle given by three vertices.
///
/// Zero-area triangles are not rejected here; their normal is NaN and the
/// intersection test never reports a hit on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Geometric unit normal, `normalize(cross(v2 - v0, v1 - v0))`.
    ///
    /// Front faces are wound clockwise when seen from the side the normal
    /// points to.
    pub fn normal(&self) -> Vec3 {
        (self.v2 - self.v0).cross(self.v1 - self.v0).normalize()
    }

    /// Mean of the three vertices.
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Twice the area; zero for degenerate triangles.
    pub fn double_area(&self) -> f32 {
        (self.v1 - self.v0).cross(self.v2 - self.v0).length()
    }

    pub fn is_degenerate(&self) -> bool {
        self.double_area() <= f32::EPSILON
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_iter_points([self.v0, self.v1, self.v2])
    }
}

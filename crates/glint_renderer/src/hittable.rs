//! Hittable trait and the scene intersector.

use glint_core::{ObjectRef, Scene};
use glint_math::Ray;

/// Trait for primitives that can be hit by rays.
pub trait Hittable {
    /// Distance along `ray` to the intersection, if there is one.
    ///
    /// A distance is only ever returned together with a hit; a miss carries
    /// no value that could be mistaken for one.
    fn hit(&self, ray: &Ray) -> Option<f32>;
}

/// Result of a scene intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Distance along the ray; `f32::MAX` when nothing was hit
    pub distance: f32,
    /// The primitive that was hit; `ObjectRef::None` on a miss
    pub object: ObjectRef,
}

impl HitResult {
    pub const MISS: HitResult = HitResult {
        distance: f32::MAX,
        object: ObjectRef::None,
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.object.is_none()
    }
}

impl Default for HitResult {
    fn default() -> Self {
        Self::MISS
    }
}

/// Running nearest-hit selection.
///
/// Only a strictly closer hit replaces the current best, so on exact ties the
/// first primitive offered wins.
struct Closest {
    best: HitResult,
}

impl Closest {
    fn new() -> Self {
        Self {
            best: HitResult::MISS,
        }
    }

    #[inline]
    fn offer(&mut self, distance: Option<f32>, object: ObjectRef) {
        if let Some(distance) = distance {
            if distance < self.best.distance {
                self.best = HitResult { distance, object };
            }
        }
    }
}

/// Find the nearest primitive hit by `ray`.
///
/// Total: a ray that hits nothing yields [`HitResult::MISS`].
///
/// Traversal order is mesh groups, then spheres, then loose triangles, each
/// in list order. The scene bounding box is tested first and a miss returns
/// immediately; each mesh group is skipped as a whole when its own bounding
/// box is missed. Spheres are not pruned since their test costs about as
/// much as a box test.
pub fn intersect(scene: &Scene, ray: &Ray) -> HitResult {
    if !scene.bounds().hit(ray) {
        return HitResult::MISS;
    }

    let mut closest = Closest::new();

    for (mesh_index, mesh) in scene.meshes().iter().enumerate() {
        if !mesh.bounds().hit(ray) {
            continue;
        }

        for (tri_index, triangle) in mesh.triangles().iter().enumerate() {
            closest.offer(
                triangle.hit(ray),
                ObjectRef::MeshTriangle(mesh_index, tri_index),
            );
        }
    }

    for (index, sphere) in scene.spheres().iter().enumerate() {
        closest.offer(sphere.hit(ray), ObjectRef::Sphere(index));
    }

    for (index, triangle) in scene.triangles().iter().enumerate() {
        closest.offer(triangle.hit(ray), ObjectRef::Triangle(index));
    }

    closest.best
}

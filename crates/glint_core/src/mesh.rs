//! Mesh triangle groups.
//!
//! A [`MeshGroup`] is a batch of triangles sharing one material, with
//! precomputed per-triangle normals and a bounding box that lets the scene
//! intersector skip the whole group with a single ray-box test.

use glint_math::{Aabb, Mat4, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::{MaterialData, Triangle};

/// An immutable group of triangles with one material.
///
/// `normals[i]` is the shading normal of `triangles[i]`; it is computed once
/// at construction and never recomputed while shading.
#[derive(Clone, Debug)]
pub struct MeshGroup {
    triangles: Vec<Triangle>,
    normals: Vec<Vec3>,
    material: MaterialData,
    bounds: Aabb,
}

impl MeshGroup {
    /// Create a group using each triangle's geometric normal.
    pub fn new(triangles: Vec<Triangle>, material: MaterialData) -> Self {
        let normals = triangles.iter().map(Triangle::normal).collect();
        let bounds = Self::compute_bounds(&triangles);
        Self {
            triangles,
            normals,
            material,
            bounds,
        }
    }

    /// Create a group with caller-supplied normals (one per triangle).
    pub fn with_normals(
        triangles: Vec<Triangle>,
        normals: Vec<Vec3>,
        material: MaterialData,
    ) -> SceneResult<Self> {
        if triangles.len() != normals.len() {
            return Err(SceneError::NormalCountMismatch {
                triangles: triangles.len(),
                normals: normals.len(),
            });
        }

        let normals = normals.into_iter().map(Vec3::normalize).collect();
        let bounds = Self::compute_bounds(&triangles);
        Ok(Self {
            triangles,
            normals,
            material,
            bounds,
        })
    }

    /// Create a group from an indexed vertex buffer (every 3 indices form a
    /// triangle).
    pub fn from_indexed(
        positions: &[Vec3],
        indices: &[u32],
        material: MaterialData,
    ) -> SceneResult<Self> {
        Self::from_indexed_transformed(positions, indices, Mat4::IDENTITY, material)
    }

    /// Same as [`MeshGroup::from_indexed`], moving every vertex through a
    /// local-to-world transform first.
    pub fn from_indexed_transformed(
        positions: &[Vec3],
        indices: &[u32],
        local_to_world: Mat4,
        material: MaterialData,
    ) -> SceneResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(SceneError::MeshIndexCount(indices.len()));
        }

        if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(SceneError::MeshIndexOutOfRange {
                index,
                vertex_count: positions.len(),
            });
        }

        let world: Vec<Vec3> = positions
            .iter()
            .map(|&p| local_to_world.transform_point3(p))
            .collect();

        let triangles: Vec<Triangle> = indices
            .chunks_exact(3)
            .map(|tri| {
                Triangle::new(
                    world[tri[0] as usize],
                    world[tri[1] as usize],
                    world[tri[2] as usize],
                )
            })
            .collect();

        let degenerate = triangles.iter().filter(|t| t.is_degenerate()).count();
        if degenerate > 0 {
            log::warn!(
                "Mesh group has {} degenerate triangles out of {}",
                degenerate,
                triangles.len()
            );
        }

        Ok(Self::new(triangles, material))
    }

    /// Padded bounding box enclosing every vertex.
    fn compute_bounds(triangles: &[Triangle]) -> Aabb {
        triangles
            .iter()
            .fold(Aabb::EMPTY, |acc, tri| {
                Aabb::surrounding(&acc, &tri.bounding_box())
            })
            .padded()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn material(&self) -> &MaterialData {
        &self.material
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Get the number of triangles in the group.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit quad in the z = 0 plane, normals facing +z.
    fn quad() -> (Vec<Vec3>, Vec<u32>) {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let indices = vec![0, 2, 1, 0, 3, 2];
        (positions, indices)
    }

    /// Bounds are padded: they contain the exact extents and stay within 1e-3.
    fn assert_bounds_near(bounds: &Aabb, min: Vec3, max: Vec3) {
        assert!(bounds.contains(min) && bounds.contains(max), "{bounds:?}");
        assert!((bounds.min - min).abs().max_element() < 1e-3, "{bounds:?}");
        assert!((bounds.max - max).abs().max_element() < 1e-3, "{bounds:?}");
    }

    #[test]
    fn test_from_indexed() {
        let (positions, indices) = quad();
        let mesh = MeshGroup::from_indexed(&positions, &indices, MaterialData::default()).unwrap();

        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.normals().len(), 2);
        for n in mesh.normals() {
            assert!((*n - Vec3::Z).length() < 1e-6);
        }
        assert_bounds_near(mesh.bounds(), Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_from_indexed_transformed() {
        let (positions, indices) = quad();
        let transform = Mat4::from_translation(Vec3::new(5.0, 0.0, -2.0));
        let mesh = MeshGroup::from_indexed_transformed(
            &positions,
            &indices,
            transform,
            MaterialData::default(),
        )
        .unwrap();

        assert_bounds_near(mesh.bounds(), Vec3::new(5.0, 0.0, -2.0), Vec3::new(6.0, 1.0, -2.0));
    }

    #[test]
    fn test_bad_index_count() {
        let (positions, _) = quad();
        let err = MeshGroup::from_indexed(&positions, &[0, 1], MaterialData::default()).unwrap_err();
        assert_eq!(err, SceneError::MeshIndexCount(2));
    }

    #[test]
    fn test_index_out_of_range() {
        let (positions, _) = quad();
        let err =
            MeshGroup::from_indexed(&positions, &[0, 1, 7], MaterialData::default()).unwrap_err();
        assert_eq!(
            err,
            SceneError::MeshIndexOutOfRange {
                index: 7,
                vertex_count: 4
            }
        );
    }

    #[test]
    fn test_with_normals_mismatch() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        let err = MeshGroup::with_normals(vec![tri], vec![], MaterialData::default()).unwrap_err();
        assert_eq!(
            err,
            SceneError::NormalCountMismatch {
                triangles: 1,
                normals: 0
            }
        );
    }

    #[test]
    fn test_with_normals_normalizes() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        let mesh =
            MeshGroup::with_normals(vec![tri], vec![Vec3::new(0.0, 0.0, -3.0)], MaterialData::default())
                .unwrap();
        assert_eq!(mesh.normals()[0], -Vec3::Z);
    }
}

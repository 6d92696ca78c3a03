//! Scene store.
//!
//! A [`Scene`] owns every primitive, material and light of one render pass.
//! It is assembled with a [`SceneBuilder`] and is immutable afterwards, so it
//! can be shared across render threads without locking. Rebuilding the scene
//! (e.g. once per frame) means building a new `Scene` and swapping it in.

use glint_math::{Aabb, Mat4, Vec3};

use crate::error::{SceneError, SceneResult};
use crate::{AmbientLight, MaterialData, MeshGroup, PointLight, Sphere, Triangle};

/// Identifies a primitive inside a [`Scene`].
///
/// This is the only cross-collection addressing mechanism: the intersector
/// reports one of these, and the shader resolves it to a normal and a
/// material with [`Scene::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectRef {
    /// No primitive (a miss)
    #[default]
    None,
    /// Index into the scene's spheres
    Sphere(usize),
    /// Index into the scene's loose triangles
    Triangle(usize),
    /// Mesh group index and triangle index within that group
    MeshTriangle(usize, usize),
}

impl ObjectRef {
    pub fn is_none(&self) -> bool {
        matches!(self, ObjectRef::None)
    }
}

/// Shading inputs for a point on a primitive.
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    /// Unit surface normal
    pub normal: Vec3,
    pub material: &'a MaterialData,
}

/// An immutable collection of primitives and lights.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    // Spheres; hot geometry and cold materials kept in parallel lists
    spheres: Vec<Sphere>,
    sphere_materials: Vec<MaterialData>,

    // Loose (ungrouped) triangles
    triangles: Vec<Triangle>,
    triangle_normals: Vec<Vec3>,
    triangle_materials: Vec<MaterialData>,

    meshes: Vec<MeshGroup>,

    point_lights: Vec<PointLight>,
    ambient_light: AmbientLight,

    /// Union of all primitive bounds, padded
    bounds: Aabb,
}

impl Scene {
    /// Create an empty scene. Every ray misses it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn meshes(&self) -> &[MeshGroup] {
        &self.meshes
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient_light
    }

    /// Bounding box enclosing every primitive in the scene.
    ///
    /// Slightly larger than the exact extents (see [`Aabb::padded`]).
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Total number of primitives (spheres, loose triangles, mesh triangles).
    pub fn primitive_count(&self) -> usize {
        self.spheres.len()
            + self.triangles.len()
            + self.meshes.iter().map(MeshGroup::len).sum::<usize>()
    }

    /// Look up the normal and material of a hit primitive.
    ///
    /// `surface_point` is only used for spheres, whose normal depends on where
    /// they were hit. Fails for [`ObjectRef::None`] and for references that
    /// do not belong to this scene.
    pub fn resolve(&self, object: ObjectRef, surface_point: Vec3) -> SceneResult<Surface<'_>> {
        let unresolved = || SceneError::UnresolvedObject(object);

        match object {
            ObjectRef::Sphere(i) => {
                let sphere = self.spheres.get(i).ok_or_else(unresolved)?;
                Ok(Surface {
                    normal: sphere.normal_at(surface_point),
                    material: &self.sphere_materials[i],
                })
            }
            ObjectRef::Triangle(i) => {
                let normal = *self.triangle_normals.get(i).ok_or_else(unresolved)?;
                Ok(Surface {
                    normal,
                    material: &self.triangle_materials[i],
                })
            }
            ObjectRef::MeshTriangle(mesh, tri) => {
                let group = self.meshes.get(mesh).ok_or_else(unresolved)?;
                let normal = *group.normals().get(tri).ok_or_else(unresolved)?;
                Ok(Surface {
                    normal,
                    material: group.material(),
                })
            }
            ObjectRef::None => Err(unresolved()),
        }
    }
}

/// Appends typed scene records and publishes an immutable [`Scene`].
///
/// Fallible adders validate their input and leave the builder unchanged on
/// error. The returned index is the record's position in its list, which is
/// the index an [`ObjectRef`] will carry.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    scene: Scene,
    has_ambient: bool,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere given its radius, which must be finite and positive.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        material: MaterialData,
    ) -> SceneResult<usize> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidSphereRadius(radius));
        }
        self.add_sphere_squared(center, radius * radius, material)
    }

    /// Add a sphere given its squared radius.
    pub fn add_sphere_squared(
        &mut self,
        center: Vec3,
        radius_squared: f32,
        material: MaterialData,
    ) -> SceneResult<usize> {
        if !(radius_squared.is_finite() && radius_squared > 0.0) {
            return Err(SceneError::InvalidSphereRadius(radius_squared));
        }

        self.scene.spheres.push(Sphere::new(center, radius_squared));
        self.scene.sphere_materials.push(material);
        Ok(self.scene.spheres.len() - 1)
    }

    /// Add a loose triangle shaded with its geometric normal.
    pub fn add_triangle(&mut self, triangle: Triangle, material: MaterialData) -> usize {
        if triangle.is_degenerate() {
            log::warn!("Adding degenerate triangle {:?}; it will never be hit", triangle);
        }
        self.add_triangle_with_normal(triangle, triangle.normal(), material)
    }

    /// Add a loose triangle with an explicit shading normal.
    pub fn add_triangle_with_normal(
        &mut self,
        triangle: Triangle,
        normal: Vec3,
        material: MaterialData,
    ) -> usize {
        self.scene.triangles.push(triangle);
        self.scene.triangle_normals.push(normal.normalize());
        self.scene.triangle_materials.push(material);
        self.scene.triangles.len() - 1
    }

    /// Add a prebuilt mesh group.
    pub fn add_mesh_group(&mut self, mesh: MeshGroup) -> usize {
        self.scene.meshes.push(mesh);
        self.scene.meshes.len() - 1
    }

    /// Add a mesh from an indexed vertex buffer in world space.
    pub fn add_mesh(
        &mut self,
        positions: &[Vec3],
        indices: &[u32],
        material: MaterialData,
    ) -> SceneResult<usize> {
        let mesh = MeshGroup::from_indexed(positions, indices, material)?;
        Ok(self.add_mesh_group(mesh))
    }

    /// Add a mesh from an indexed vertex buffer in local space.
    pub fn add_mesh_transformed(
        &mut self,
        positions: &[Vec3],
        indices: &[u32],
        local_to_world: Mat4,
        material: MaterialData,
    ) -> SceneResult<usize> {
        let mesh =
            MeshGroup::from_indexed_transformed(positions, indices, local_to_world, material)?;
        Ok(self.add_mesh_group(mesh))
    }

    pub fn add_point_light(&mut self, light: PointLight) -> usize {
        self.scene.point_lights.push(light);
        self.scene.point_lights.len() - 1
    }

    /// Set the scene's single ambient light.
    pub fn set_ambient_light(&mut self, light: AmbientLight) -> SceneResult<()> {
        if self.has_ambient {
            return Err(SceneError::DuplicateAmbientLight);
        }
        self.scene.ambient_light = light;
        self.has_ambient = true;
        Ok(())
    }

    /// Compute the scene bounds and publish the scene.
    pub fn build(self) -> Scene {
        let mut scene = self.scene;

        let mut bounds = Aabb::EMPTY;
        for mesh in &scene.meshes {
            bounds.encapsulate_aabb(mesh.bounds());
        }
        for tri in &scene.triangles {
            bounds.encapsulate_aabb(&tri.bounding_box());
        }
        for sphere in &scene.spheres {
            bounds.encapsulate_aabb(&sphere.bounding_box());
        }
        scene.bounds = bounds.padded();

        log::info!(
            "Built scene: {} spheres, {} triangles, {} mesh groups ({} primitives), {} point lights",
            scene.spheres.len(),
            scene.triangles.len(),
            scene.meshes.len(),
            scene.primitive_count(),
            scene.point_lights.len()
        );

        scene
    }
}

//! Glint Core - scene representation for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry primitives**: [`Sphere`], [`Triangle`], [`MeshGroup`]
//! - **Shading data**: [`MaterialData`], [`PointLight`], [`AmbientLight`]
//! - **Scene store**: an immutable [`Scene`] published by a [`SceneBuilder`],
//!   addressed through [`ObjectRef`]
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{MaterialData, PointLight, SceneBuilder};
//! use glint_math::Vec3;
//!
//! let mut builder = SceneBuilder::new();
//! builder.add_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, MaterialData::diffuse(Vec3::ONE))?;
//! builder.add_point_light(PointLight::new(Vec3::new(0.0, 5.0, 0.0), Vec3::splat(100.0)));
//! let scene = builder.build();
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod mesh;
pub mod primitives;
pub mod scene;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::{AmbientLight, PointLight};
pub use material::{Color, MaterialData};
pub use mesh::MeshGroup;
pub use primitives::{Sphere, Triangle};
pub use scene::{ObjectRef, Scene, SceneBuilder, Surface};

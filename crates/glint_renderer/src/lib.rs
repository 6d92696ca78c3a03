//! Glint Renderer - CPU Whitted ray tracing
//!
//! A recursive ray tracer with hard shadows and perfect mirror reflections.
//!
//! The kernel is two pure functions over an immutable [`Scene`]:
//!
//! - [`intersect`] finds the nearest primitive along a ray, pruning with the
//!   scene and mesh-group bounding boxes
//! - [`shade`] evaluates ambient, Lambertian diffuse and Blinn-Phong
//!   specular lighting with shadow rays, and recurses along the mirror
//!   direction up to a bounce limit
//!
//! [`render`] drives the kernel over an image in parallel buckets.

mod bucket;
mod camera;
mod hittable;
mod renderer;
mod shading;
mod sphere;
mod stats;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, ImagePlane};
pub use hittable::{intersect, HitResult, Hittable};
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer, RenderConfig};
pub use shading::{shade, trace, ShadeConfig, DEFAULT_SHADOW_EPSILON};
pub use stats::TraceStats;
pub use triangle::TRIANGLE_EPSILON;

/// Re-export scene and math types used in the kernel API
pub use glint_core::{Color, MaterialData, ObjectRef, Scene, SceneBuilder};
pub use glint_math::{Ray, Vec3};

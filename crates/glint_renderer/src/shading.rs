//! Whitted shading.
//!
//! Direct lighting from point lights with hard shadows, a constant ambient
//! term, and perfect mirror reflection bounded by a bounce limit.

use glint_core::{Color, MaterialData, Scene};
use glint_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::hittable::{intersect, HitResult};
use crate::stats::TraceStats;

/// Default offset applied along the normal to secondary ray origins.
pub const DEFAULT_SHADOW_EPSILON: f32 = 1e-4;

/// Shading configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadeConfig {
    /// Color returned for rays that hit nothing
    pub background: Color,
    /// Maximum mirror recursion depth (0 disables reflections)
    pub max_bounces: u32,
    /// Offset along the surface normal for shadow and reflection rays
    pub shadow_epsilon: f32,
}

impl Default for ShadeConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            max_bounces: 0,
            shadow_epsilon: DEFAULT_SHADOW_EPSILON,
        }
    }
}

/// Compute the color seen along `ray`.
///
/// `bounce_depth` is the current recursion depth; primary rays start at 0.
pub fn shade(scene: &Scene, ray: &Ray, bounce_depth: u32, config: &ShadeConfig) -> Color {
    let mut stats = TraceStats::default();
    trace(scene, ray, bounce_depth, config, &mut stats)
}

/// [`shade`], counting every ray cast into `stats`.
pub fn trace(
    scene: &Scene,
    ray: &Ray,
    bounce_depth: u32,
    config: &ShadeConfig,
    stats: &mut TraceStats,
) -> Color {
    stats.traced_rays += 1;
    stats.record_depth(bounce_depth);

    let hit = intersect(scene, ray);
    if !hit.is_hit() {
        return config.background;
    }

    let point = ray.point_at(hit.distance);
    let surface = scene.resolve(hit.object, point);
    debug_assert!(
        surface.is_ok(),
        "intersector returned an unresolvable object: {:?}",
        hit.object
    );
    let Ok(surface) = surface else {
        log::error!("Cannot shade {:?}, returning background", hit.object);
        return config.background;
    };

    let normal = surface.normal;
    let material = surface.material;
    let view_dir = (ray.origin() - point)
        .try_normalize()
        .unwrap_or(-ray.direction());
    // Secondary rays start slightly off the surface to avoid re-hitting it
    let offset_point = point + normal * config.shadow_epsilon;

    let mut color = material.ambient_reflectance * scene.ambient_light().radiance;

    for light in scene.point_lights() {
        let to_light = light.position - point;
        let light_dist_sq = to_light.length_squared();
        if light_dist_sq <= 0.0 {
            continue;
        }
        let light_dir = to_light / light_dist_sq.sqrt();

        let shadow = intersect(scene, &Ray::new(offset_point, light_dir));
        stats.shadow_rays += 1;
        if is_occluded(&shadow, light_dist_sq) {
            stats.occluded_shadow_rays += 1;
            continue;
        }
        debug_assert!(
            normal.dot(light_dir) <= 0.0 || shadow.object != hit.object,
            "shadow ray re-hit its caster {:?} with the light visible",
            hit.object
        );

        let irradiance = light.intensity / light_dist_sq;
        color += diffuse(material, normal, light_dir) * irradiance;
        color += specular(material, normal, light_dir, view_dir) * irradiance;
    }

    if material.is_mirror && bounce_depth < config.max_bounces {
        let reflected = Ray::new(offset_point, reflect(view_dir, normal));
        stats.reflection_rays += 1;
        color += material.mirror_reflectance
            * trace(scene, &reflected, bounce_depth + 1, config, stats);
    }

    color
}

/// A light is hidden when something lies strictly closer than the light.
#[inline]
fn is_occluded(shadow: &HitResult, light_dist_sq: f32) -> bool {
    shadow.is_hit() && shadow.distance * shadow.distance < light_dist_sq
}

#[inline]
fn diffuse(material: &MaterialData, normal: Vec3, light_dir: Vec3) -> Color {
    material.diffuse_reflectance * normal.dot(light_dir).max(0.0)
}

/// Blinn-Phong highlight; zero for lights behind the surface.
#[inline]
fn specular(material: &MaterialData, normal: Vec3, light_dir: Vec3, view_dir: Vec3) -> Color {
    if normal.dot(light_dir) <= 0.0 {
        return Color::ZERO;
    }
    let Some(halfway) = (light_dir + view_dir).try_normalize() else {
        return Color::ZERO;
    };
    material.specular_reflectance * normal.dot(halfway).max(0.0).powf(material.phong_exponent)
}

/// Mirror `view_dir` (pointing away from the surface) about `normal`.
#[inline]
fn reflect(view_dir: Vec3, normal: Vec3) -> Vec3 {
    2.0 * normal * view_dir.dot(normal) - view_dir
}

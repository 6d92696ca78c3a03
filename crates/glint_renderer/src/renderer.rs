//! Image driver.
//!
//! Renders a whole image by tracing one primary ray per pixel, with buckets
//! distributed across threads by rayon.

use std::time::Instant;

use glint_core::{Color, Scene};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Camera;
use crate::shading::{shade, ShadeConfig};
use crate::stats::TraceStats;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub shade: ShadeConfig,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Scale from radiance to display range [0, 1]
    pub exposure: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shade: ShadeConfig::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            // Scene intensities are authored on a 0-255 scale
            exposure: 1.0 / 255.0,
        }
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color, exposure: f32) -> [u8; 4] {
    let scaled = color * exposure;
    let to_byte = |c: f32| (255.0 * clamp_01(c)).round() as u8;
    [to_byte(scaled.x), to_byte(scaled.y), to_byte(scaled.z), 255]
}

/// Color of pixel (x, y) from a single primary ray.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32, config: &ShadeConfig) -> Color {
    shade(scene, &camera.get_ray(x, y), 0, config)
}

/// Linear radiance image.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let rows = result.pixels.chunks_exact(bucket.width.max(1) as usize);
        for (local_y, row) in rows.enumerate() {
            let start = self.offset(bucket.x, bucket.y + local_y as u32);
            self.pixels[start..start + row.len()].copy_from_slice(row);
        }
    }

    /// Convert to RGBA bytes for saving.
    pub fn to_rgba8(&self, exposure: f32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color, exposure));
        }
        bytes
    }
}

/// Render `scene` as seen by `camera`.
///
/// Every call allocates a fresh image; each pixel is written exactly once.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> (ImageBuffer, TraceStats) {
    let (width, height) = (camera.image_width, camera.image_height);
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets ({} bounces)",
        width,
        height,
        buckets.len(),
        config.shade.max_bounces
    );

    let start = Instant::now();
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, scene, camera, &config.shade);
            log::debug!(
                "Bucket {} at ({}, {}) done: {} rays",
                bucket.index,
                bucket.x,
                bucket.y,
                result.stats.total_rays()
            );
            result
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    let mut stats = TraceStats::default();
    for result in &results {
        image.write_bucket(result);
        stats += result.stats;
    }

    log::info!("Rendered in {:.2?}: {}", start.elapsed(), stats);
    (image, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{MaterialData, PointLight, SceneBuilder};
    use glint_math::Vec3;

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::ZERO, 1.0), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::ONE, 1.0), [255, 255, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(-1.0, 2.0, 0.5), 1.0), [0, 255, 128, 255]);
        assert_eq!(
            color_to_rgba(Color::new(255.0, 51.0, 0.0), 1.0 / 255.0),
            [255, 51, 0, 255]
        );
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);

        image.set(3, 2, Color::ONE);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.pixels[11], Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);

        let bytes = image.to_rgba8(1.0);
        assert_eq!(bytes.len(), 48);
        assert_eq!(&bytes[44..], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_render_empty_scene() {
        let scene = Scene::new();
        let camera = Camera::new().with_resolution(20, 10);
        let config = RenderConfig {
            shade: ShadeConfig {
                background: Color::new(1.0, 2.0, 3.0),
                ..Default::default()
            },
            bucket_size: 8,
            ..Default::default()
        };

        let (image, stats) = render(&scene, &camera, &config);
        assert_eq!((image.width, image.height), (20, 10));
        assert!(image.pixels.iter().all(|&c| c == config.shade.background));
        assert_eq!(stats.traced_rays, 200);
    }

    #[test]
    fn test_render_matches_render_pixel() {
        let mut builder = SceneBuilder::new();
        builder
            .add_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialData::default())
            .unwrap();
        builder.add_point_light(PointLight::new(Vec3::new(2.0, 2.0, 0.0), Color::splat(50.0)));
        let scene = builder.build();
        let camera = Camera::new().with_resolution(17, 13);
        let config = RenderConfig {
            bucket_size: 5,
            ..Default::default()
        };

        let (image, _) = render(&scene, &camera, &config);
        for y in 0..13 {
            for x in 0..17 {
                assert_eq!(
                    image.get(x, y),
                    render_pixel(&scene, &camera, x, y, &config.shade)
                );
            }
        }
        // Center pixel sees the lit sphere
        assert!(image.get(8, 6).max_element() > 0.0);
    }

    #[test]
    fn test_config_json() {
        let config = RenderConfig {
            shade: ShadeConfig {
                background: Color::new(0.1, 0.2, 0.3),
                max_bounces: 4,
                shadow_epsilon: 1e-3,
            },
            bucket_size: 32,
            exposure: 1.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_json_defaults() {
        let parsed: RenderConfig =
            serde_json::from_str(r#"{ "shade": { "max_bounces": 2 } }"#).unwrap();
        assert_eq!(parsed.shade.max_bounces, 2);
        assert_eq!(parsed.shade.shadow_epsilon, crate::DEFAULT_SHADOW_EPSILON);
        assert_eq!(parsed.bucket_size, DEFAULT_BUCKET_SIZE);
    }
}

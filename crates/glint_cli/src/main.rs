//! Renders a built-in demo scene to a PNG.
//!
//! Usage: `glint [settings.json] [output.png]`
//!
//! The settings file is optional; any field it leaves out keeps its default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_core::{AmbientLight, MaterialData, PointLight, SceneBuilder, Triangle};
use glint_math::{Mat4, Quat, Vec3};
use glint_renderer::{render, Camera, Color, RenderConfig, Scene};
use serde::Deserialize;

/// Output settings read from the optional JSON file.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Settings {
    width: u32,
    height: u32,
    #[serde(flatten)]
    render: RenderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            render: RenderConfig::default(),
        }
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings in {}", path.display()))
}

/// Floor, a mirror ball, a few diffuse shapes and two lights.
///
/// Radiometric values are on a 0-255 scale to match the default exposure.
fn demo_scene() -> Result<Scene> {
    let mut builder = SceneBuilder::new();

    let floor = MaterialData::diffuse(Color::splat(0.7)).with_ambient(Color::splat(0.7));
    builder.add_mesh(
        &[
            Vec3::new(-6.0, 0.0, -6.0),
            Vec3::new(6.0, 0.0, -6.0),
            Vec3::new(6.0, 0.0, 6.0),
            Vec3::new(-6.0, 0.0, 6.0),
        ],
        &[3, 0, 2, 0, 1, 2],
        floor,
    )?;

    let mirror = MaterialData::diffuse(Color::ZERO)
        .with_specular(Color::ONE, 64.0)
        .with_mirror(Color::splat(0.85));
    builder.add_sphere(Vec3::new(0.0, 1.2, -1.0), 1.2, mirror)?;

    let red = MaterialData::diffuse(Color::new(0.8, 0.15, 0.1))
        .with_ambient(Color::new(0.8, 0.15, 0.1))
        .with_specular(Color::splat(0.5), 32.0);
    builder.add_sphere(Vec3::new(2.4, 0.6, 0.8), 0.6, red)?;

    // Octahedron standing on one vertex, turned about Y
    let octahedron = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let indices = [
        0, 4, 2, 4, 1, 2, 1, 5, 2, 5, 0, 2, //
        4, 0, 3, 1, 4, 3, 5, 1, 3, 0, 5, 3,
    ];
    let transform = Mat4::from_scale_rotation_translation(
        Vec3::splat(0.8),
        Quat::from_rotation_y(0.6),
        Vec3::new(-2.4, 0.8, 0.6),
    );
    let green = MaterialData::diffuse(Color::new(0.2, 0.7, 0.25))
        .with_ambient(Color::new(0.2, 0.7, 0.25));
    builder.add_mesh_transformed(&octahedron, &indices, transform, green)?;

    let blue = MaterialData::diffuse(Color::new(0.2, 0.3, 0.9))
        .with_ambient(Color::new(0.2, 0.3, 0.9));
    builder.add_triangle(
        Triangle::new(
            Vec3::new(-4.0, 0.0, -4.0),
            Vec3::new(-3.0, 2.5, -4.5),
            Vec3::new(-1.5, 0.0, -5.0),
        ),
        blue,
    );

    builder.add_point_light(PointLight::new(Vec3::new(4.0, 6.0, 4.0), Color::splat(9000.0)));
    builder.add_point_light(PointLight::new(
        Vec3::new(-5.0, 4.0, 2.0),
        Color::new(2500.0, 2200.0, 1800.0),
    ));
    builder.set_ambient_light(AmbientLight::new(Color::splat(25.0)))?;

    Ok(builder.build())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => load_settings(Path::new(&path))?,
        None => Settings::default(),
    };
    let output = args.next().map_or_else(|| PathBuf::from("glint.png"), PathBuf::from);

    log::info!("Starting glint");

    let scene = demo_scene().context("Failed to build demo scene")?;
    let camera = Camera::new()
        .with_resolution(settings.width, settings.height)
        .with_position(Vec3::new(0.0, 2.5, 8.0), Vec3::new(0.0, 0.8, 0.0), Vec3::Y)
        .with_fov(40.0);

    let (image, stats) = render(&scene, &camera, &settings.render);
    log::info!("Traced {} rays in total", stats.total_rays());

    image::save_buffer(
        &output,
        &image.to_rgba8(settings.render.exposure),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Wrote {}", output.display());
    Ok(())
}

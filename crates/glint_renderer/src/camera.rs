//! Pinhole camera with an explicit image plane.

use glint_math::{Ray, Vec3};

/// Rectangle in front of the camera through which primary rays are shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlane {
    /// World-space width
    pub width: f32,
    /// World-space height
    pub height: f32,
    /// Distance from the camera position along the forward axis
    pub distance: f32,
}

impl ImagePlane {
    /// Image plane covering a vertical field of view (degrees) at `distance`,
    /// with the given width / height aspect ratio.
    pub fn from_fov(vfov: f32, aspect: f32, distance: f32) -> Self {
        let height = 2.0 * distance * (vfov.to_radians() / 2.0).tan();
        Self {
            width: height * aspect,
            height,
            distance,
        }
    }
}

/// Camera for generating primary rays.
///
/// One ray per pixel through the pixel center. Builder methods keep the
/// cached pixel layout up to date, so a camera is ready to use as soon as it
/// is built.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Orthonormal basis
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,

    plane: ImagePlane,

    // Cached pixel layout
    top_left: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Camera at the origin looking down -Z with a 90 degree vertical FOV.
    pub fn new() -> Self {
        let (width, height) = (800, 450);
        let mut camera = Self {
            image_width: width,
            image_height: height,
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            plane: ImagePlane::from_fov(90.0, width as f32 / height as f32, 1.0),
            top_left: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        };
        camera.update_layout();
        camera
    }

    /// Set image resolution. The image plane keeps its world-space size.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width.max(1);
        self.image_height = height.max(1);
        self.update_layout();
        self
    }

    /// Place the camera at `look_from` facing `look_at`, with `vup` as the
    /// approximate up direction.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        let forward = (look_at - look_from).try_normalize().unwrap_or(Vec3::NEG_Z);
        let right = forward
            .cross(vup)
            .try_normalize()
            .unwrap_or_else(|| forward.any_orthonormal_vector());

        self.position = look_from;
        self.forward = forward;
        self.right = right;
        self.up = right.cross(forward);
        self.update_layout();
        self
    }

    /// Set the image plane directly.
    ///
    /// A plane at a non-positive or non-finite distance would make primary
    /// ray directions degenerate; it is moved to distance 1. A non-finite or
    /// negative size falls back to a 90 degree field of view.
    pub fn with_image_plane(mut self, mut plane: ImagePlane) -> Self {
        if !(plane.distance.is_finite() && plane.distance > 0.0) {
            log::warn!("Image plane distance {} is invalid, using 1.0", plane.distance);
            plane.distance = 1.0;
        }
        let valid_extent = |e: f32| e.is_finite() && e >= 0.0;
        if !(valid_extent(plane.width) && valid_extent(plane.height)) {
            log::warn!(
                "Image plane size {}x{} is invalid, using a 90 degree field of view",
                plane.width,
                plane.height
            );
            let aspect = self.image_width as f32 / self.image_height as f32;
            plane = ImagePlane::from_fov(90.0, aspect, plane.distance);
        }

        self.plane = plane;
        self.update_layout();
        self
    }

    /// Size the image plane from a vertical FOV (degrees), matching the
    /// aspect ratio of the current resolution.
    pub fn with_fov(self, vfov: f32) -> Self {
        let aspect = self.image_width as f32 / self.image_height as f32;
        let distance = self.plane.distance;
        self.with_image_plane(ImagePlane::from_fov(vfov, aspect, distance))
    }

    fn update_layout(&mut self) {
        let plane = &self.plane;
        self.pixel_delta_u = self.right * (plane.width / self.image_width as f32);
        self.pixel_delta_v = -self.up * (plane.height / self.image_height as f32);
        self.top_left = self.position + self.forward * plane.distance
            - self.right * (plane.width / 2.0)
            + self.up * (plane.height / 2.0);
    }

    /// Primary ray through the center of pixel (x, y); y grows downward.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let pixel = self.top_left
            + (x as f32 + 0.5) * self.pixel_delta_u
            + (y as f32 + 0.5) * self.pixel_delta_v;
        Ray::new(self.position, pixel - self.position)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn image_plane(&self) -> &ImagePlane {
        &self.plane
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

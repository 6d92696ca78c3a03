//! Light sources.

use glint_math::Vec3;

use crate::Color;

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Radiant intensity at unit distance, per channel
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Scene-global ambient term. A scene without one behaves as if it had a
/// black ambient light.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmbientLight {
    pub radiance: Color,
}

impl AmbientLight {
    pub fn new(radiance: Color) -> Self {
        Self { radiance }
    }
}

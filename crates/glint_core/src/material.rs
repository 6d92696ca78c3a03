//! Surface material for Whitted shading.

use glint_math::Vec3;

/// Color type alias (linear RGB, one radiometric value per channel)
pub type Color = Vec3;

/// Reflectance parameters for ambient, Lambertian diffuse, Blinn-Phong
/// specular, and perfect mirror reflection.
///
/// All reflectances are RGB scale factors applied componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialData {
    /// Lambertian reflectance
    pub diffuse_reflectance: Color,
    /// Scale applied to the scene's ambient radiance
    pub ambient_reflectance: Color,
    /// Blinn-Phong highlight reflectance
    pub specular_reflectance: Color,
    /// Scale applied to the color traced along the mirror direction
    pub mirror_reflectance: Color,
    /// Blinn-Phong exponent (>= 0)
    pub phong_exponent: f32,
    /// Whether reflected rays are traced from this surface
    pub is_mirror: bool,
}

impl Default for MaterialData {
    fn default() -> Self {
        Self {
            diffuse_reflectance: Color::splat(0.5), // Grey default
            ambient_reflectance: Color::ZERO,
            specular_reflectance: Color::ZERO,
            mirror_reflectance: Color::ZERO,
            phong_exponent: 1.0,
            is_mirror: false,
        }
    }
}

impl MaterialData {
    /// A purely diffuse material.
    pub fn diffuse(diffuse_reflectance: Color) -> Self {
        Self {
            diffuse_reflectance,
            ..Default::default()
        }
    }

    /// Set the ambient reflectance.
    pub fn with_ambient(mut self, ambient_reflectance: Color) -> Self {
        self.ambient_reflectance = ambient_reflectance;
        self
    }

    /// Set the specular reflectance and Phong exponent.
    pub fn with_specular(mut self, specular_reflectance: Color, phong_exponent: f32) -> Self {
        self.specular_reflectance = specular_reflectance;
        self.phong_exponent = phong_exponent.max(0.0);
        self
    }

    /// Turn the material into a mirror with the given reflectance.
    pub fn with_mirror(mut self, mirror_reflectance: Color) -> Self {
        self.mirror_reflectance = mirror_reflectance;
        self.is_mirror = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_builders() {
        let m = MaterialData::diffuse(Color::new(0.2, 0.4, 0.6))
            .with_ambient(Color::splat(0.1))
            .with_specular(Color::ONE, 32.0)
            .with_mirror(Color::splat(0.8));

        assert_eq!(m.diffuse_reflectance, Color::new(0.2, 0.4, 0.6));
        assert_eq!(m.ambient_reflectance, Color::splat(0.1));
        assert_eq!(m.specular_reflectance, Color::ONE);
        assert_eq!(m.phong_exponent, 32.0);
        assert!(m.is_mirror);
        assert_eq!(m.mirror_reflectance, Color::splat(0.8));
    }

    #[test]
    fn test_negative_phong_exponent_clamped() {
        let m = MaterialData::default().with_specular(Color::ONE, -4.0);
        assert_eq!(m.phong_exponent, 0.0);
    }

    #[test]
    fn test_default_is_not_mirror() {
        assert!(!MaterialData::default().is_mirror);
    }
}

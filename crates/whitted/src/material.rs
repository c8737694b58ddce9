use crate::{
    color::Color,
    math::vec::{Vec2, Vec3, Vec4},
};

/// Phong-like material.
///
/// `albedo` weights each contribution of the final color, in order: diffuse, specular,
/// reflection and refraction. The weights don't have to sum to one, over-bright results are
/// handled when the image is tone mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse_color: Color,
    pub albedo: Vec4,
    pub specular_exponent: f32,
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Vec3::ZERO,
            albedo: Vec4::X,
            specular_exponent: 0.,
            refractive_index: 1.,
        }
    }
}

impl Material {
    pub fn new(
        diffuse_color: Color,
        albedo: Vec4,
        specular_exponent: f32,
        refractive_index: f32,
    ) -> Self {
        Self {
            diffuse_color,
            albedo,
            specular_exponent,
            refractive_index,
        }
    }

    /// Diffuse and specular only
    pub fn phong(diffuse_color: Color, albedo: Vec2, specular_exponent: f32) -> Self {
        Self {
            diffuse_color,
            albedo: albedo.extend(0.).extend(0.),
            specular_exponent,
            ..Default::default()
        }
    }

    /// Diffuse, specular and reflection
    pub fn reflective(diffuse_color: Color, albedo: Vec3, specular_exponent: f32) -> Self {
        Self {
            diffuse_color,
            albedo: albedo.extend(0.),
            specular_exponent,
            ..Default::default()
        }
    }

    pub fn diffuse_weight(&self) -> f32 {
        self.albedo.x
    }

    pub fn specular_weight(&self) -> f32 {
        self.albedo.y
    }

    pub fn reflection_weight(&self) -> f32 {
        self.albedo.z
    }

    pub fn refraction_weight(&self) -> f32 {
        self.albedo.w
    }

    pub fn reflects(&self) -> bool {
        self.reflection_weight() != 0.
    }

    pub fn refracts(&self) -> bool {
        self.refraction_weight() != 0.
    }

    pub fn with_diffuse_color(self, diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..self
        }
    }
}

/// The materials used by the example scenes.
pub mod presets {
    use super::Material;
    use crate::math::vec::{Vec2, Vec3, Vec4};

    pub fn ivory() -> Material {
        Material::new(
            Vec3::new(0.4, 0.4, 0.3),
            Vec4::new(0.6, 0.3, 0.1, 0.0),
            50.,
            1.0,
        )
    }

    pub fn glass() -> Material {
        Material::new(
            Vec3::new(0.6, 0.7, 0.8),
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            125.,
            1.5,
        )
    }

    pub fn red_rubber() -> Material {
        Material::new(
            Vec3::new(0.3, 0.1, 0.1),
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            10.,
            1.0,
        )
    }

    pub fn mirror() -> Material {
        Material::new(
            Vec3::new(1.0, 1.0, 1.0),
            Vec4::new(0.0, 10.0, 0.8, 0.0),
            1425.,
            1.0,
        )
    }

    /// Shiny gray
    pub fn pewter() -> Material {
        Material::phong(Vec3::new(0.4, 0.4, 0.3), Vec2::new(0.6, 0.3), 100.)
    }

    /// Dull red
    pub fn brick() -> Material {
        Material::phong(Vec3::new(0.3, 0.1, 0.1), Vec2::new(0.9, 0.1), 10.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phong_has_no_secondary_rays() {
        let m = presets::pewter();
        assert_eq!(m.albedo, Vec4::new(0.6, 0.3, 0.0, 0.0));
        assert!(!m.reflects());
        assert!(!m.refracts());
        assert_eq!(m.refractive_index, 1.0);
    }

    #[test]
    fn reflective_does_not_refract() {
        let m = Material::reflective(Vec3::ONE, Vec3::new(0.0, 0.0, 1.0), 0.);
        assert!(m.reflects());
        assert!(!m.refracts());
    }

    #[test]
    fn glass_refracts() {
        let m = presets::glass();
        assert!(m.refracts());
        assert_eq!(m.refraction_weight(), 0.8);
    }

    #[test]
    fn default_is_pure_diffuse() {
        let m = Material::default().with_diffuse_color(Vec3::ONE);
        assert_eq!(m.diffuse_weight(), 1.0);
        assert_eq!(m.specular_weight(), 0.0);
        assert_eq!(m.diffuse_color, Vec3::ONE);
    }
}

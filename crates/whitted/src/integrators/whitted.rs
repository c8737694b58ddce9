use crate::{
    color::{self, Color},
    counter,
    math::vec::{RefrReflVecExt, Vec3, Vec3AsNonZero},
    ray::Ray,
    renderer::World,
    shape::HitRecord,
    timed_scope_accumulate,
};

use super::Integrator;

/// Recursive Whitted ray tracing: Phong direct lighting with hard shadows, plus perfect
/// reflection and refraction up to `max_depth` bounces.
pub struct WhittedIntegrator {
    pub max_depth: u32,
}

impl Default for WhittedIntegrator {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

impl WhittedIntegrator {
    /// Diffuse and specular intensities received at `hit`, summed over the visible lights.
    fn direct_lighting(&self, world: &World, ray: Ray, hit: &HitRecord) -> (f32, f32) {
        let mut diffuse = 0.;
        let mut specular = 0.;

        for light in world.scene.lights.iter() {
            let to_light = light.position - hit.pos;
            let light_distance = to_light.length();
            let light_dir = to_light / light_distance;

            // cast shadow ray to check light visibility
            counter!("Shadow rays");
            let shadow_ray = Ray::spawn(hit.pos, hit.normal, light_dir);
            let occluded = world
                .scene
                .intersect(shadow_ray)
                .map_or(false, |occluder| {
                    occluder.pos.distance(shadow_ray.origin) < light_distance
                });
            if occluded {
                continue;
            }

            diffuse += light.intensity * light_dir.dot(hit.normal).max(0.);
            let highlight = -(-light_dir).reflect(hit.normal).dot(ray.direction);
            specular += light.intensity * highlight.max(0.).powf(hit.material.specular_exponent);
        }

        (diffuse, specular)
    }
}

impl Integrator for WhittedIntegrator {
    fn cast_ray(&self, world: &World, ray: Ray, depth: u32) -> Color {
        counter!("Rays cast");
        if depth > self.max_depth {
            return self.sky_ray(world, ray);
        }

        // Total internal reflection leaves a degenerate direction behind, it can't hit anything
        let Some(direction) = ray.direction.into_non_zero(f32::EPSILON) else {
            return self.sky_ray(world, ray);
        };

        let hit = timed_scope_accumulate!("Scene intersection", || world.scene.intersect(ray));
        let Some(hit) = hit else {
            return self.sky_ray(world, ray);
        };
        let material = hit.material;

        let reflection = if material.reflects() {
            let reflected = direction.reflect(hit.normal).normalize();
            self.cast_ray(world, Ray::spawn(hit.pos, hit.normal, reflected), depth + 1)
        } else {
            color::BLACK
        };

        let refraction = if material.refracts() {
            let refracted = direction
                .refract(hit.normal, material.refractive_index)
                .map_or(Vec3::ZERO, Vec3::normalize);
            self.cast_ray(world, Ray::spawn(hit.pos, hit.normal, refracted), depth + 1)
        } else {
            color::BLACK
        };

        let (diffuse, specular) = self.direct_lighting(world, ray, &hit);

        material.diffuse_color * diffuse * material.diffuse_weight()
            + color::WHITE * specular * material.specular_weight()
            + reflection * material.reflection_weight()
            + refraction * material.refraction_weight()
    }
}

use crate::{color::Color, ray::Ray, renderer::World};

mod whitted;

pub trait Integrator: Send + Sync {
    /// Color seen along `ray`, `depth` being the number of bounces that led to it
    fn cast_ray(&self, world: &World, ray: Ray, depth: u32) -> Color;

    /// Color of a ray that leaves the scene
    fn sky_ray(&self, world: &World, ray: Ray) -> Color {
        world.background.radiance(ray.direction)
    }
}

pub use whitted::WhittedIntegrator;

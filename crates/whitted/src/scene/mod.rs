pub mod examples;

use crate::{
    math::vec::Vec3,
    ray::Ray,
    shape::{Checkerboard, HitRecord, Shape, Sphere},
    MAX_RENDER_DISTANCE,
};

/// A point light
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Everything that can be seen or lights something.
///
/// The order of spheres and lights doesn't matter: the closest sphere wins and the lights add up.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub floor: Option<Checkerboard>,
}

impl Scene {
    /// Insert a sphere in the scene
    pub fn insert_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Insert a light in the scene
    pub fn insert_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Set the checkerboard floor, replacing the previous one
    pub fn set_floor(&mut self, floor: Checkerboard) {
        self.floor = Some(floor);
    }

    /// Closest hit along `ray`, spheres first and then the floor if it is in front of them.
    ///
    /// Anything further than [MAX_RENDER_DISTANCE] is ignored.
    pub fn intersect(&self, ray: Ray) -> Option<HitRecord> {
        let mut closest: Option<(f32, &dyn Shape)> = None;

        let shapes = self
            .spheres
            .iter()
            .map(|s| s as &dyn Shape)
            .chain(self.floor.iter().map(|f| f as &dyn Shape));
        for shape in shapes {
            let Some(t) = shape.intersect_bare(ray) else {
                continue;
            };
            if closest.map_or(true, |(best, _)| t < best) {
                closest = Some((t, shape));
            }
        }

        let (t, shape) = closest?;
        (t < MAX_RENDER_DISTANCE).then(|| shape.record_at(ray, t))
    }
}

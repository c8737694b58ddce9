//! Contains the objects that are meant to be renderered:
//! - [Sphere]s, with any [Material]
//! - an infinite horizontal [Checkerboard] acting as a floor
//!
//! Both are found by solving the intersection analytically.

pub mod plane;
pub mod sphere;

use crate::{material::Material, math::vec::Vec3, ray::Ray};

pub use plane::Checkerboard;
pub use sphere::Sphere;

/// An abstracted shape to be rendered by raytracing.
///
/// To render a shape we only need to know whether a ray intersect it and if so,
///  some information about the shape at the intersection point
pub trait Shape {
    /// Distance along `ray` to the closest intersection in front of its origin, if any
    fn intersect_bare(&self, ray: Ray) -> Option<f32>;

    /// Same as [Shape::intersect_bare] but with everything needed to shade the hit point
    fn intersection_full(&self, ray: Ray) -> Option<HitRecord> {
        let t = self.intersect_bare(ray)?;
        Some(self.record_at(ray, t))
    }

    /// Local information of the shape at `ray.at(t)`, `t` being a hit returned by [Shape::intersect_bare]
    fn record_at(&self, ray: Ray, t: f32) -> HitRecord;
}

/// Everything known about the closest intersection between a ray and the scene.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub t: f32,
    pub pos: Vec3,
    /// Outward unit normal
    pub normal: Vec3,
    /// The material in effect at `pos`
    pub material: Material,
}

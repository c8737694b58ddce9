use std::ops::Range;

use crate::{
    color::{self, Color},
    material::Material,
    math::{float::FloatAsExt, vec::Vec3},
    ray::Ray,
};

use super::{HitRecord, Shape};

/// Rays closer than this to being parallel to the floor never hit it.
const PARALLEL_EPSILON: f32 = 1e-3;

/// An horizontal plane at `y = height`, only visible on a rectangle of the xz plane and
/// textured with a procedural checkerboard.
#[derive(Debug, Clone)]
pub struct Checkerboard {
    pub height: f32,
    /// The plane is visible where `|x| < half_width`
    pub half_width: f32,
    /// The plane is visible where `z` is strictly in this range
    pub depth: Range<f32>,
    pub odd: Color,
    pub even: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.,
            half_width: 10.,
            depth: -30.0..-10.0,
            odd: color::gray(0.3),
            even: Vec3::new(0.3, 0.2, 0.1),
        }
    }
}

impl Checkerboard {
    /// Color of the checkerboard at `pos`, squares are 2 units wide
    pub fn color_at(&self, pos: Vec3) -> Color {
        let parity = (0.5 * pos.x).floor() as i64 + (0.5 * pos.z).floor() as i64;
        if parity.rem_euclid(2) == 1 {
            self.odd
        } else {
            self.even
        }
    }

    fn contains(&self, pos: Vec3) -> bool {
        pos.x.abs() < self.half_width && self.depth.start < pos.z && pos.z < self.depth.end
    }
}

impl Shape for Checkerboard {
    fn intersect_bare(&self, ray: Ray) -> Option<f32> {
        let dy = ray.direction.y.into_non_zero(PARALLEL_EPSILON)?;
        let t = -(ray.origin.y - self.height) / dy;
        (t > 0. && self.contains(ray.at(t))).then_some(t)
    }

    fn record_at(&self, ray: Ray, t: f32) -> HitRecord {
        let pos = ray.at(t);
        HitRecord {
            t,
            pos,
            normal: Vec3::Y,
            material: Material::default().with_diffuse_color(self.color_at(pos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn hit_from_above() {
        let floor = Checkerboard::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0., -1., -5.).normalize());
        let record = floor.intersection_full(ray).unwrap();
        assert_relative_eq!(record.pos.y, -4., epsilon = 1e-5);
        assert_relative_eq!(record.pos.z, -20., epsilon = 1e-4);
        assert_eq!(record.normal, Vec3::Y);
        assert_eq!(record.material.albedo, Material::default().albedo);
    }

    #[test]
    fn parallel_ray_misses() {
        let floor = Checkerboard::default();
        let ray = Ray::new(Vec3::new(0., 0., -15.), Vec3::new(1., 0.0005, 0.).normalize());
        assert_eq!(floor.intersect_bare(ray), None);
    }

    #[test]
    fn upward_ray_misses() {
        let floor = Checkerboard::default();
        assert_eq!(floor.intersect_bare(Ray::new(Vec3::new(0., 0., -20.), Vec3::Y)), None);
    }

    #[test]
    fn outside_of_the_bounds_misses() {
        let floor = Checkerboard::default();
        // In front of the near edge
        assert_eq!(floor.intersect_bare(Ray::new(Vec3::new(0., 0., -5.), Vec3::NEG_Y)), None);
        // Too far on the side
        assert_eq!(floor.intersect_bare(Ray::new(Vec3::new(12., 0., -20.), Vec3::NEG_Y)), None);
        assert!(floor.intersect_bare(Ray::new(Vec3::new(9., 0., -20.), Vec3::NEG_Y)).is_some());
    }

    #[test]
    fn checker_alternates() {
        let floor = Checkerboard::default();
        let a = floor.color_at(Vec3::new(0.5, -4., -20.5));
        let b = floor.color_at(Vec3::new(2.5, -4., -20.5));
        let c = floor.color_at(Vec3::new(2.5, -4., -22.5));
        assert_ne!(a, b);
        assert_eq!(a, c);
        // floor(-0.25) = -1 and floor(-10.25) = -11, even parity
        assert_eq!(floor.color_at(Vec3::new(-0.5, -4., -20.5)), floor.even);
    }
}

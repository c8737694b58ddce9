use crate::{material::Material, math::vec::Vec3, ray::Ray};

use super::{HitRecord, Shape};

/// A simple sphere shape, normals are pointing outwards.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Shape for Sphere {
    fn intersect_bare(&self, ray: Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        // Projection of the center on the ray and squared distance between the two
        let tca = l.dot(ray.direction);
        let d2 = l.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        // Either find first hit if it is in front of the origin else, take the second one
        let thc = f32::sqrt(r2 - d2);
        let t0 = tca - thc;
        let t1 = tca + thc;
        let t = if t0 < 0. { t1 } else { t0 };
        (t >= 0.).then_some(t)
    }

    fn record_at(&self, ray: Ray, t: f32) -> HitRecord {
        let pos = ray.at(t);
        HitRecord {
            t,
            pos,
            normal: (pos - self.center).normalize(),
            material: self.material,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1., Material::default())
    }

    #[test]
    fn hit_distance_toward_center() {
        let sphere = Sphere::new(Vec3::new(1., 2., -10.), 2., Material::default());
        let origin = Vec3::new(0., 0., 0.);
        let ray = Ray::new(origin, (sphere.center - origin).normalize());

        let t = sphere.intersect_bare(ray).unwrap();
        assert_relative_eq!(t, origin.distance(sphere.center) - 2., epsilon = 1e-4);
    }

    #[test]
    fn pointing_away_is_a_miss() {
        let sphere = unit_sphere_at(Vec3::new(0., 0., -5.));
        assert_eq!(sphere.intersect_bare(Ray::new(Vec3::ZERO, Vec3::Z)), None);
    }

    #[test]
    fn sphere_behind_is_a_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.5, 0., 5.));
        assert!(sphere.center.dot(Vec3::NEG_Z) < 0.);
        assert_eq!(sphere.intersect_bare(Ray::new(Vec3::ZERO, Vec3::NEG_Z)), None);
    }

    #[test]
    fn passing_beside_is_a_miss() {
        let sphere = unit_sphere_at(Vec3::new(2., 0., -5.));
        assert_eq!(sphere.intersect_bare(Ray::new(Vec3::ZERO, Vec3::NEG_Z)), None);
    }

    #[test]
    fn from_inside_hits_the_far_side() {
        let sphere = Sphere::new(Vec3::ZERO, 2., Material::default());
        let t = sphere.intersect_bare(Ray::new(Vec3::ZERO, Vec3::X)).unwrap();
        assert_relative_eq!(t, 2.);
    }

    #[test]
    fn record_has_outward_normal() {
        let sphere = unit_sphere_at(Vec3::new(0., 0., -5.));
        let record = sphere
            .intersection_full(Ray::new(Vec3::ZERO, Vec3::NEG_Z))
            .unwrap();
        assert_relative_eq!(record.t, 4.);
        assert!(record.pos.abs_diff_eq(Vec3::new(0., 0., -4.), 1e-5));
        assert!(record.normal.abs_diff_eq(Vec3::Z, 1e-5));
        assert_eq!(record.material, sphere.material);
    }
}

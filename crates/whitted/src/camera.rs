use crate::{math::vec::Vec3, ray::Ray};

/// Pinhole camera looking down -Z, +Y being up.
#[derive(Debug, Clone)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub origin: Vec3,
    /// Half height of the image plane at distance 1
    half_height: f32,
    aspect_ratio: f32,
}

impl Camera {
    /// `vfov` is the vertical field of view, in radians
    pub fn new(width: u32, height: u32, vfov: f32, origin: Vec3) -> Self {
        Self {
            width,
            height,
            origin,
            half_height: f32::tan(vfov / 2.),
            aspect_ratio: width as f32 / height as f32,
        }
    }

    /// Ray through the center of pixel (x, y), pixels being ordered from left to right, top to bottom
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let vx = 2. * (x as f32 + 0.5) / self.width as f32 - 1.;
        let vy = 1. - 2. * (y as f32 + 0.5) / self.height as f32;

        let direction = Vec3::new(
            vx * self.half_height * self.aspect_ratio,
            vy * self.half_height,
            -1.,
        );
        Ray::new(self.origin, direction.normalize())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::new(3, 3, f32::to_radians(90.), Vec3::ZERO);
        let ray = camera.ray(1, 1);
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn corners_follow_the_field_of_view() {
        let camera = Camera::new(2, 2, f32::to_radians(90.), Vec3::new(1., 2., 3.));
        let top_left = camera.ray(0, 0);
        assert_eq!(top_left.origin, Vec3::new(1., 2., 3.));
        // tan(45°) = 1, pixel centers are half way to the edges
        assert!(top_left
            .direction
            .abs_diff_eq(Vec3::new(-0.5, 0.5, -1.).normalize(), 1e-6));

        let bottom_right = camera.ray(1, 1);
        assert!(bottom_right
            .direction
            .abs_diff_eq(Vec3::new(0.5, -0.5, -1.).normalize(), 1e-6));
    }

    #[test]
    fn wide_images_see_more_horizontally() {
        let camera = Camera::new(4, 2, f32::to_radians(90.), Vec3::ZERO);
        let right = camera.ray(3, 0).direction;
        assert_relative_eq!(right.x / -right.z, 1.5, epsilon = 1e-5);
        assert_relative_eq!(right.y / -right.z, 0.5, epsilon = 1e-5);
    }
}

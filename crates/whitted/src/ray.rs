use crate::{
    math::vec::{Vec3, Vec3SameDirExt},
    EPSILON,
};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Expected to be of unit length, or zero for a degenerate ray
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Spawn a secondary ray from a surface point.
    ///
    /// The origin is pushed by [`EPSILON`] along the normal, on the side the ray leaves from,
    /// so the ray can't hit the surface it starts on.
    pub fn spawn(point: Vec3, normal: Vec3, direction: Vec3) -> Self {
        Self {
            origin: point + EPSILON * normal.same_direction(direction),
            direction,
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

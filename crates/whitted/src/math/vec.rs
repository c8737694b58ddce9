pub use glam::{Vec2, Vec3, Vec4};
use image::Rgb;

use crate::{Error, Result};

/// Operations shared by 2, 3 and 4 components vectors that glam doesn't provide as is.
pub trait VecExt: Sized {
    const LEN: usize;

    /// Component at `index`, in `0..LEN`
    fn component(&self, index: usize) -> Result<f32>;

    /// Normalize in place and return self for chaining.
    ///
    /// A zero length vector ends up with non finite components.
    fn normalize_mut(&mut self) -> &mut Self;
}

macro_rules! impl_vec_ext {
    ($vec:ty, $len:literal) => {
        impl VecExt for $vec {
            const LEN: usize = $len;

            fn component(&self, index: usize) -> Result<f32> {
                self.to_array()
                    .get(index)
                    .copied()
                    .ok_or(Error::IndexOutOfRange { index, len: $len })
            }

            fn normalize_mut(&mut self) -> &mut Self {
                *self /= self.length();
                self
            }
        }
    };
}

impl_vec_ext!(Vec2, 2);
impl_vec_ext!(Vec3, 3);
impl_vec_ext!(Vec4, 4);

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.to_array())
    }
}

pub trait RefrReflVecExt {
    fn refract(self, normal: Vec3, ior: f32) -> Option<Vec3>;
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl RefrReflVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }

    /// Snell's law between the outside medium (index 1) and a medium of index `ior`.
    ///
    /// `normal` is the outward normal, the side the ray comes from is deduced from it.
    /// Returns None on total internal reflection.
    fn refract(self, mut normal: Vec3, ior: f32) -> Option<Vec3> {
        let mut cosi = -self.dot(normal).clamp(-1., 1.);
        let mut etai = 1.;
        let mut etat = ior;
        if cosi < 0.0 {
            // Leaving the medium
            cosi = -cosi;
            (etat, etai) = (etai, etat);
            normal = -normal;
        }
        let eta = etai / etat;
        let k = 1. - eta * eta * (1. - cosi * cosi);

        if k < 0. {
            None
        } else {
            Some(eta * self + (eta * cosi - f32::sqrt(k)) * normal)
        }
    }
}

pub trait Vec3SameDirExt {
    fn same_direction(self, other: Self) -> Self;
}

impl Vec3SameDirExt for Vec3 {
    /// Return self if self and other are pointing in the same general direction (self.dot(other) > 0.0) else, returns -self
    fn same_direction(self, other: Self) -> Self {
        if self.dot(other) > 0.0 {
            self
        } else {
            -self
        }
    }
}

pub trait Vec3AsNonZero: Sized {
    fn into_non_zero(self, eps: f32) -> Option<Self>;
}

impl Vec3AsNonZero for Vec3 {
    fn into_non_zero(self, eps: f32) -> Option<Self> {
        use super::float::FloatAsExt;
        self.length_squared().into_non_zero(eps * eps).and(Some(self))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn component_in_range() {
        let v = Vec4::new(1., 2., 3., 4.);
        assert_eq!(v.component(0).unwrap(), 1.);
        assert_eq!(v.component(3).unwrap(), 4.);
        assert_eq!(Vec2::new(5., 6.).component(1).unwrap(), 6.);
    }

    #[test]
    fn component_out_of_range() {
        let err = Vec3::new(1., 2., 3.).component(3).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
        assert!(Vec2::ZERO.component(2).is_err());
        assert!(Vec4::ZERO.component(usize::MAX).is_err());
    }

    #[test]
    fn normalize_mut_chains() {
        let mut v = Vec3::new(3., 0., 4.);
        let len = v.normalize_mut().length();
        assert_relative_eq!(len, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn normalize_mut_zero_is_not_finite() {
        let mut v = Vec2::ZERO;
        v.normalize_mut();
        assert!(!v.is_finite());
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    }

    #[test]
    fn reflect_is_an_involution() {
        let normals = [Vec3::Y, Vec3::new(1., 1., 0.).normalize(), Vec3::NEG_Z];
        let dirs = [
            Vec3::new(1., -1., 0.).normalize(),
            Vec3::new(0.3, 0.2, -0.9).normalize(),
            Vec3::new(-0.5, 0.5, 0.7).normalize(),
        ];
        for n in normals {
            for v in dirs {
                let back = v.reflect(n).reflect(n);
                assert!(back.abs_diff_eq(v, 1e-5), "{v} -> {back}");
            }
        }
    }

    #[test]
    fn refract_straight_through() {
        let dir = Vec3::NEG_Y;
        let refracted = dir.refract(Vec3::Y, 1.5).unwrap();
        assert!(refracted.abs_diff_eq(dir, 1e-6));
    }

    #[test]
    fn refract_bends_toward_normal_when_entering() {
        let dir = Vec3::new(1., -1., 0.).normalize();
        let refracted = dir.refract(Vec3::Y, 1.5).unwrap();
        assert_relative_eq!(refracted.length(), 1.0, epsilon = 1e-5);
        // sin(theta_t) = sin(theta_i) / 1.5
        assert_relative_eq!(refracted.x, dir.x / 1.5, epsilon = 1e-5);
        assert!(refracted.y < 0.);
    }

    #[test]
    fn refract_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let dir = Vec3::new(1., 0.2, 0.).normalize();
        assert_eq!(dir.refract(Vec3::Y, 1.5), None);
    }

    #[test]
    fn non_zero() {
        assert_eq!(Vec3::ZERO.into_non_zero(1e-6), None);
        assert_eq!(Vec3::X.into_non_zero(1e-6), Some(Vec3::X));
    }
}

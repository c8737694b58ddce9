/// Turn degenerate floats into `None` so that they can be handled with `?` or a fallback.
pub trait FloatAsExt: Sized {
    /// `None` when `|self| <= eps` or when self is NaN. Infinities are kept.
    fn into_non_zero(self, eps: Self) -> Option<Self>;

    /// `None` for NaN and infinities
    fn into_finite(self) -> Option<Self>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<Self> {
        (self.abs() > eps).then_some(self)
    }

    fn into_finite(self) -> Option<Self> {
        self.is_finite().then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FloatAsExt;

    #[test]
    fn non_zero() {
        assert_eq!(0f32.into_non_zero(1e-3), None);
        assert_eq!(1e-3f32.into_non_zero(1e-3), None);
        assert_eq!((-2f32).into_non_zero(1e-3), Some(-2.));
        assert_eq!(f32::NAN.into_non_zero(1e-3), None);
        assert_eq!(f32::NEG_INFINITY.into_non_zero(1e-3), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn finite() {
        assert_eq!(0.5f32.into_finite(), Some(0.5));
        assert_eq!(f32::NAN.into_finite(), None);
        assert_eq!(f32::INFINITY.into_finite(), None);
        // What the environment lookup gets for a vertical direction
        assert_eq!(f32::atan2(0., 0.).into_finite(), Some(0.));
    }
}

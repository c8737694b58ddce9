use crate::math::vec::Vec3;

/// Linear, unbounded RGB radiance.
pub type Color = Vec3;

pub const WHITE: Color = Vec3::ONE;
pub const BLACK: Color = Vec3::ZERO;
pub const SKY: Color = Vec3::new(0.2, 0.7, 0.8);

pub fn gray(c: f32) -> Color {
    Vec3::splat(c)
}

/// Bring a color in [0, 1].
///
/// Over-bright colors are scaled down by their largest channel so that the hue is kept,
/// whatever is left outside of the range is clamped.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let color = if max > 1. { color * (1. / max) } else { color };
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Tone map and quantize a color to 8 bits per channel, truncating.
pub fn to_bytes(color: Color) -> [u8; 3] {
    tone_map(color).to_array().map(|c| (255. * c) as u8)
}

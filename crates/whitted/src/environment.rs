//! What rays see when they escape the scene.

use std::{f32::consts::PI, path::Path};

use image::RgbImage;

use crate::{
    color::{self, Color},
    math::{
        float::FloatAsExt,
        vec::{Vec2, Vec3},
    },
    utils::log_once::warn_once,
    Error, Result,
};

/// A decoded panoramic image, sampled with an equirectangular-like projection.
///
/// The center of the image is seen looking down -Z, the top row looking up.
#[derive(Debug, Clone)]
pub struct EnvironmentMap {
    width: u32,
    height: u32,
    channels: usize,
    bytes: Vec<u8>,
}

impl EnvironmentMap {
    /// Wrap an already decoded buffer of 8 bits RGB or RGBA pixels, row major from the top.
    pub fn new(width: u32, height: u32, channels: usize, bytes: Vec<u8>) -> Result<Self> {
        if !(3..=4).contains(&channels) {
            return Err(Error::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * channels;
        if expected == 0 || bytes.len() != expected {
            return Err(Error::EnvironmentSize {
                width,
                height,
                channels,
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            bytes,
        })
    }

    /// Decode an image file, whatever its format, as long as `image` knows about it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path)?.into_rgb8();
        Self::from_image(image)
    }

    pub fn from_image(image: RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, 3, image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn sample(&self, direction: Vec3) -> Color {
        let (x, y) = self.coordinates(direction);
        self.pixel(x, y)
    }

    /// Pixel seen in `direction`, clamped in the image.
    pub fn coordinates(&self, direction: Vec3) -> (u32, u32) {
        // Signed angle between -Z and the direction projected on the horizontal plane
        let forward = Vec2::new(0., -1.);
        let horizontal = Vec2::new(direction.x, direction.z).normalize();
        let phi = f32::atan2(forward.perp_dot(horizontal), forward.dot(horizontal));

        // Angle between up and the direction
        let theta = f32::atan2(Vec3::Y.cross(direction).length(), Vec3::Y.dot(direction));

        let x = match phi.into_finite() {
            Some(phi) => (phi + PI) / (2. * PI) * self.width as f32,
            None => {
                warn_once!("environment sampled with no horizontal component, using column 0");
                0.
            }
        };
        let y = theta.into_finite().unwrap_or(0.) / PI * self.height as f32;

        (
            (x as u32).min(self.width - 1),
            (y as u32).min(self.height - 1),
        )
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let index = (y as usize * self.width as usize + x as usize) * self.channels;
        let [r, g, b] = [
            self.bytes[index],
            self.bytes[index + 1],
            self.bytes[index + 2],
        ];
        Vec3::new(r as f32, g as f32, b as f32) / 255.
    }
}

/// Color returned for rays leaving the scene
#[derive(Debug, Clone)]
pub enum Background {
    Sky(Color),
    Environment(EnvironmentMap),
}

impl Default for Background {
    fn default() -> Self {
        Background::Sky(color::SKY)
    }
}

impl Background {
    pub fn radiance(&self, direction: Vec3) -> Color {
        match self {
            Background::Sky(color) => *color,
            Background::Environment(map) => map.sample(direction),
        }
    }
}

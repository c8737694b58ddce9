//! Turning a rendered framebuffer into bytes.

use std::io::Write;

use image::{Rgb, Rgb32FImage, RgbImage};

use crate::{color, math::vec::RgbAsVec3Ext, Result};

/// Tone map and quantize every pixel of an HDR framebuffer
pub fn to_ldr(framebuffer: &Rgb32FImage) -> RgbImage {
    let (width, height) = framebuffer.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        Rgb(color::to_bytes(framebuffer.get_pixel(x, y).vec()))
    })
}

pub fn ppm_header(width: u32, height: u32) -> String {
    format!("P6\n{width} {height}\n255\n")
}

/// Write `image` as a binary PPM: the header then the raw RGB triplets, rows top to bottom.
pub fn write_ppm<W: Write>(mut writer: W, image: &RgbImage) -> Result<()> {
    writer.write_all(ppm_header(image.width(), image.height()).as_bytes())?;
    writer.write_all(image.as_raw())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec::{Vec3, Vec3AsRgbExt};

    #[test]
    fn header() {
        assert_eq!(ppm_header(1024, 768), "P6\n1024 768\n255\n");
    }

    #[test]
    fn ldr_conversion() {
        let mut framebuffer = Rgb32FImage::new(2, 1);
        framebuffer.put_pixel(0, 0, Vec3::new(0.5, 0., 1.).rgb());
        framebuffer.put_pixel(1, 0, Vec3::new(4., 2., -1.).rgb());

        let image = to_ldr(&framebuffer);
        assert_eq!(image.get_pixel(0, 0), &Rgb([127, 0, 255]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([255, 127, 0]));
    }

    #[test]
    fn ppm_layout() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let mut buffer = Vec::new();
        write_ppm(&mut buffer, &image).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(buffer.len(), header.len() + 3 * 2 * 3);
        assert_eq!(&buffer[..header.len()], header);
        // Row major, top row first
        assert_eq!(
            &buffer[header.len()..],
            &[0, 0, 7, 1, 0, 7, 2, 0, 7, 0, 1, 7, 1, 1, 7, 2, 1, 7]
        );
    }
}

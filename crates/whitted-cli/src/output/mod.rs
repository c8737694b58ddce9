mod file_output;

use anyhow::Result;
use image::Rgb32FImage;

pub use file_output::FileOutput;

/// Somewhere the rendered framebuffer goes once every pixel is done
pub trait FinalOutput: Send {
    fn commit(&self, framebuffer: &Rgb32FImage) -> Result<()>;
}

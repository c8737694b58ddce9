use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use image::{ImageFormat, Rgb32FImage};
use whitted::output::{to_ldr, write_ppm};

use super::FinalOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Ppm,
    Png,
    Jpeg,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("ppm") => Ok(FileFormat::Ppm),
            Some("png") => Ok(FileFormat::Png),
            Some("jpg" | "jpeg") => Ok(FileFormat::Jpeg),
            Some(other) => bail!("Unsupported output format `{other}`, use ppm, png or jpg"),
            None => bail!("Can't guess the output format of {path:?}, use a ppm, png or jpg extension"),
        }
    }
}

/// Tone mapped 8 bits image saved to a single file
pub struct FileOutput {
    pub path: PathBuf,
    pub format: FileFormat,
}

impl FileOutput {
    pub fn new(path: PathBuf) -> Result<Self> {
        let format = FileFormat::from_path(&path)?;
        Ok(Self { path, format })
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, framebuffer: &Rgb32FImage) -> Result<()> {
        log::info!("Saving image to {:?}...", self.path);
        let image = to_ldr(framebuffer);

        match self.format {
            FileFormat::Ppm => {
                let file = File::create(&self.path)
                    .with_context(|| format!("Could not create {:?}", self.path))?;
                write_ppm(BufWriter::new(file), &image)?;
            }
            FileFormat::Png => image.save_with_format(&self.path, ImageFormat::Png)?,
            FileFormat::Jpeg => image.save_with_format(&self.path, ImageFormat::Jpeg)?,
        }
        Ok(())
    }
}

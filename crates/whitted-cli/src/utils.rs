use core::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use clap::ValueEnum;
use whitted::{
    color::Color,
    scene::{
        examples::{ShowcaseScene, TwoSpheresScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    TwoSpheres,
    #[default]
    Showcase,
}

impl From<AvailableScene> for Scene {
    fn from(val: AvailableScene) -> Self {
        match val {
            AvailableScene::TwoSpheres => TwoSpheresScene.into(),
            AvailableScene::Showcase => ShowcaseScene.into(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        if width == 0 || height == 0 {
            bail!("Dimensions can't be zero");
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

/// A color given as `r,g,b`, each channel being a float
#[derive(Copy, Clone, Debug)]
pub struct SkyColor(pub Color);

impl FromStr for SkyColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels[..] else {
            bail!("Expected 3 channels, got {}", channels.len());
        };
        if [r, g, b].iter().any(|c| !c.is_finite() || *c < 0.) {
            bail!("Channels must be finite and positive");
        }

        Ok(SkyColor(Color::new(r, g, b)))
    }
}

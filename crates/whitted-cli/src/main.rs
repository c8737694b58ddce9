mod cli;
mod output;
mod progress;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use cli::Cli;
use utils::{AvailableScene, Dimensions, SkyColor};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, default_value = "out.ppm")]
    /// Where to save the image. The format is picked from the extension: ppm, png or jpg
    output: PathBuf,

    #[arg(short, long, default_value = "1024x768")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 60.)]
    /// Vertical field of view, in degrees
    fov: f32,

    #[arg(long, default_value_t = 4)]
    /// Reflection and refraction bounces before falling back to the background
    max_depth: u32,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(long)]
    /// Panorama sampled by rays leaving the scene, instead of a flat sky
    envmap: Option<PathBuf>,

    #[arg(long, conflicts_with = "envmap")]
    /// Flat sky color in format `r,g,b`
    sky: Option<SkyColor>,

    #[arg(long, conflicts_with = "no_threads")]
    /// Number of worker threads, defaults to one per core
    threads: Option<usize>,

    #[arg(long)]
    no_threads: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("Initializing...");
    let cli = Cli::new(args)?;
    cli.run()
}

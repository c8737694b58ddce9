use anyhow::{Context, Result};
use whitted::{
    environment::{Background, EnvironmentMap},
    renderer::{DefaultRenderer, RenderOptions, Renderer},
    scene::Scene,
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    output::{FileOutput, FinalOutput},
    progress::Progress,
    Args,
};

pub struct Cli {
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub renderer: Renderer,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        if args.no_threads {
            log::warn!("Working on only one thread");
            // Only one thread == Not Threaded
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build_global()
                .context("Could not configure the thread pool")?;
        } else if let Some(threads) = args.threads {
            log::info!("Working on {threads} threads");
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Could not configure the thread pool")?;
        }

        // Check the output before spending time on the render
        let file_output = FileOutput::new(args.output)?;

        let background = match (args.envmap, args.sky) {
            (Some(path), _) => {
                log::info!("Loading environment map {path:?}");
                let map = EnvironmentMap::open(&path)
                    .with_context(|| format!("Could not load environment map {path:?}"))?;
                log::info!("Environment map is {}x{}", map.width(), map.height());
                Background::Environment(map)
            }
            (None, Some(sky)) => Background::Sky(sky.0),
            (None, None) => Background::default(),
        };

        log::info!("Loading scene {:?}", args.scene);
        let scene: Scene = args.scene.into();

        let renderer = DefaultRenderer {
            options: RenderOptions {
                width: args.dimensions.width,
                height: args.dimensions.height,
                fov_degrees: args.fov,
                max_depth: args.max_depth,
            },
            scene,
            background,
        }
        .into();

        Ok(Self {
            final_outputs: vec![Box::new(file_output)],
            renderer,
        })
    }

    pub fn run(self) -> Result<()> {
        log::info!("Generating image...");
        let progress = Progress::new(self.renderer.camera.height as usize);
        let framebuffer = timed_scope_log("Render", || {
            self.renderer.render_with_progress(|_| {
                progress.inc();
                progress.print();
            })
        })
        .res;
        println!();

        for final_output in self.final_outputs {
            final_output.commit(&framebuffer)?;
        }

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}

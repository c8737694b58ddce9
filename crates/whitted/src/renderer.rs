use image::Rgb32FImage;
use rayon::prelude::{ParallelBridge, ParallelIterator};

use crate::{
    camera::Camera,
    color::Color,
    counter, error_once,
    environment::Background,
    integrators::{Integrator, WhittedIntegrator},
    math::vec::{Vec3, Vec3AsRgbExt},
    scene::Scene,
};

/// What rays can hit, and what they see when they hit nothing.
pub struct World {
    pub scene: Scene,
    pub background: Background,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view
    pub fov_degrees: f32,
    /// Number of reflection/refraction bounces before giving up on the background
    pub max_depth: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov_degrees: 60.,
            max_depth: 4,
        }
    }
}

pub struct Renderer {
    pub camera: Camera,
    pub world: World,
    pub integrator: Box<dyn Integrator>,
}

/// Everything needed to build a [Renderer] with a camera at the origin and the Whitted integrator
pub struct DefaultRenderer {
    pub options: RenderOptions,
    pub scene: Scene,
    pub background: Background,
}

impl From<DefaultRenderer> for Renderer {
    fn from(value: DefaultRenderer) -> Self {
        let DefaultRenderer {
            options,
            scene,
            background,
        } = value;

        let camera = Camera::new(
            options.width,
            options.height,
            options.fov_degrees.to_radians(),
            Vec3::ZERO,
        );

        Renderer {
            camera,
            world: World { scene, background },
            integrator: Box::new(WhittedIntegrator {
                max_depth: options.max_depth,
            }),
        }
    }
}

impl Renderer {
    pub fn process_pixel(&self, x: u32, y: u32) -> Color {
        counter!("Primary rays");
        let ray = self.camera.ray(x, y);
        let color = self.integrator.cast_ray(&self.world, ray, 0);
        if !color.is_finite() {
            error_once!("Pixel ({x}, {y}) is not finite: {color}");
        }
        color
    }

    pub fn render(&self) -> Rgb32FImage {
        self.render_with_progress(|_| ())
    }

    /// Render every pixel, rows being processed in parallel.
    ///
    /// `on_row_done` is called from the worker threads with the index of each finished row,
    /// in no particular order.
    pub fn render_with_progress<F: Fn(u32) + Sync>(&self, on_row_done: F) -> Rgb32FImage {
        let mut framebuffer = Rgb32FImage::new(self.camera.width, self.camera.height);
        log::info!(
            "Rendering {}x{} pixels, {} spheres and {} lights",
            self.camera.width,
            self.camera.height,
            self.world.scene.spheres.len(),
            self.world.scene.lights.len()
        );

        framebuffer
            .rows_mut()
            .enumerate()
            .par_bridge()
            .for_each(|(y, row)| {
                let y = y as u32;
                // pixels in the image crate are from left to right, top to bottom
                for (x, pixel) in row.enumerate() {
                    *pixel = self.process_pixel(x as u32, y).rgb();
                }
                log::debug!("Row {y} done");
                on_row_done(y);
            });

        framebuffer
    }
}

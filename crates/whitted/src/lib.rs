pub mod camera;
pub mod color;
pub mod environment;
pub mod error;
pub mod integrators;
pub mod material;
pub mod math;
pub mod output;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;

pub use error::{Error, Result};

/// Offset applied to secondary ray origins along the surface normal.
pub const EPSILON: f32 = 1e-3;

/// Hits further away than this are treated as misses.
pub const MAX_RENDER_DISTANCE: f32 = 1000.;

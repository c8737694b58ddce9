//! Error types for the tracer.

use thiserror::Error;

/// Errors that can occur while building or rendering a scene.
#[derive(Error, Debug)]
pub enum Error {
    /// A vector component was requested outside of `0..len`.
    #[error("component index {index} is out of range for a {len}-component vector")]
    IndexOutOfRange { index: usize, len: usize },

    /// The environment buffer does not match its declared dimensions.
    #[error(
        "environment buffer holds {actual} bytes, expected {expected} ({width}x{height}x{channels})"
    )]
    EnvironmentSize {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    /// Only RGB and RGBA environment buffers can be sampled.
    #[error("unsupported channel count {0}, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels(usize),

    #[error("could not decode image")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for tracer operations.
pub type Result<T> = std::result::Result<T, Error>;

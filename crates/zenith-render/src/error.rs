//! Rendering and output errors.

use zenith_atmosphere::AtmosphereError;
use zenith_config::ConfigError;

/// Errors raised while preparing, rendering, or writing a sky image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing the output failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The `image` crate failed to encode or save.
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    /// The output path names a format we cannot write.
    #[error("unsupported output format `{0}` (expected ppm, png or jpg)")]
    UnsupportedFormat(String),

    /// The image has no pixels.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Planet parameters or the sample grid are unusable.
    #[error("invalid atmosphere: {0}")]
    Atmosphere(#[from] AtmosphereError),

    /// The configuration was rejected before rendering.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

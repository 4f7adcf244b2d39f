//! Configuration error types.

use std::path::PathBuf;

use zenith_atmosphere::AtmosphereError;

/// Errors raised while locating, loading, saving, or checking configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform has no per-user configuration directory.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    /// Failed to read the config file from disk.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the config file to disk.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The image has no pixels.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Atmosphere parameters or sample counts are out of range.
    #[error("invalid atmosphere: {0}")]
    Atmosphere(#[from] AtmosphereError),
}

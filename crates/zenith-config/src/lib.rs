//! Configuration for the Zenith sky renderer.
//!
//! Settings persist to disk as `config.ron`. Every section falls back to its
//! defaults when missing, so old files keep loading as fields are added. CLI
//! flags parsed with clap override whatever the file says.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, ImageConfig, RenderConfig, ViewConfig};
pub use error::ConfigError;

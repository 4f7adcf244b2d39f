//! Command-line argument parsing for the `zenith` renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render a physically-based sky image.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "zenith", about = "Render a Rayleigh/Mie single-scattering sky")]
pub struct CliArgs {
    /// Image width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Output file (`.ppm`, `.png` or `.jpg`; `-` streams PPM to stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sun height above the horizon (Y of the sun direction `(0, h, -1)`).
    #[arg(long, allow_negative_numbers = true)]
    pub sun_height: Option<f32>,

    /// Observer altitude above the surface in meters.
    #[arg(long)]
    pub altitude: Option<f32>,

    /// Horizontal half-extent of the view plane.
    #[arg(long)]
    pub x_limit: Option<f32>,

    /// Vertical half-extent of the view plane.
    #[arg(long)]
    pub y_limit: Option<f32>,

    /// Integration steps along each view ray.
    #[arg(long)]
    pub primary_steps: Option<u32>,

    /// Integration steps along each sun ray.
    #[arg(long)]
    pub secondary_steps: Option<u32>,

    /// Worker threads (0 = one per core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.image.width = w;
        }
        if let Some(h) = args.height {
            self.image.height = h;
        }
        if let Some(ref output) = args.output {
            self.image.output = output.clone();
        }
        if let Some(sun_height) = args.sun_height {
            self.view.sun_height = sun_height;
        }
        if let Some(altitude) = args.altitude {
            self.view.altitude_m = altitude;
        }
        if let Some(x_limit) = args.x_limit {
            self.view.x_limit = x_limit;
        }
        if let Some(y_limit) = args.y_limit {
            self.view.y_limit = y_limit;
        }
        if let Some(primary) = args.primary_steps {
            self.render.samples.primary = primary;
        }
        if let Some(secondary) = args.secondary_steps {
            self.render.samples.secondary = secondary;
        }
        if let Some(threads) = args.threads {
            self.render.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

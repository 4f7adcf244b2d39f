//! `zenith`: render a Rayleigh/Mie single-scattering sky to an image file.
//!
//! Loads `config.ron` from the config directory (creating it on first run),
//! applies command-line overrides, renders in parallel and writes the result.
//!
//! Run with: `cargo run -p zenith-cli -- --sun-height 0.05 -o sunset.png`

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use zenith_config::{CliArgs, Config};
use zenith_render::{RenderError, SkyRenderer, save_image};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Logging is not up yet, so config problems are reported after init.
    let config_dir = args.config.clone().or_else(|| Config::default_dir().ok());
    let (mut config, load_warning) = load_config(config_dir.as_deref());
    config.apply_cli_overrides(&args);

    if let Err(e) = zenith_log::init_logging(
        config_dir.as_deref(),
        cfg!(debug_assertions),
        Some(&config),
    ) {
        eprintln!("zenith: failed to initialize logging: {e}");
    }
    if let Some(warning) = load_warning {
        warn!("{warning}; using defaults");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the persisted config, falling back to defaults on any failure.
fn load_config(config_dir: Option<&Path>) -> (Config, Option<String>) {
    let Some(dir) = config_dir else {
        return (
            Config::default(),
            Some("no configuration directory available".to_string()),
        );
    };
    match Config::load_or_create(dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    }
}

fn run(config: &Config) -> Result<(), RenderError> {
    config.validate()?;

    info!("Zenith sky renderer");
    info!(
        "Image: {}x{} -> {}",
        config.image.width,
        config.image.height,
        config.image.output.display()
    );
    info!(
        "View: altitude={:.0}m, sun=(0, {}, -1), limits=({}, {})",
        config.view.altitude_m, config.view.sun_height, config.view.x_limit, config.view.y_limit
    );
    info!(
        "Planet: radius={:.0}km, atmosphere={:.0}km, samples={}x{}",
        config.atmosphere.planet_radius / 1000.0,
        config.atmosphere.atmosphere_radius / 1000.0,
        config.render.samples.primary,
        config.render.samples.secondary,
    );

    let renderer = SkyRenderer::from_config(config)?;
    info!(
        "Observer at {}, sun toward {}, {} pixels",
        renderer.observer(),
        renderer.sun_direction(),
        renderer.viewport().pixel_count()
    );
    let image = renderer.render_with_threads(config.render.threads)?;
    save_image(&image, &config.image.output)?;
    Ok(())
}

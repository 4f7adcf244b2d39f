//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zenith_atmosphere::{AtmosphereParams, SampleCounts};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output image settings.
    pub image: ImageConfig,
    /// Observer, sun, and field of view.
    pub view: ViewConfig,
    /// Integration grid and parallelism.
    pub render: RenderConfig,
    /// Planet and atmosphere physics.
    pub atmosphere: AtmosphereParams,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output image configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Output path. `.png` and `.jpg` select those encodings, `.ppm` or no
    /// extension plain PPM; `-` is stdout.
    pub output: PathBuf,
}

/// Where the observer stands and what it looks at.
///
/// The view looks down −Z with +Y up. Pixel columns span `[-x_limit, x_limit]`
/// and rows `[y_limit, -y_limit]` on the plane `z = -1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Observer height above the planet surface in meters.
    pub altitude_m: f32,
    /// Sun height above the horizon, as the Y of the sun direction `(0, h, -1)`.
    pub sun_height: f32,
    /// Horizontal half-extent of the view plane.
    pub x_limit: f32,
    /// Vertical half-extent of the view plane.
    pub y_limit: f32,
}

/// Integration and scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Steps along each view ray and each sun ray.
    pub samples: SampleCounts,
    /// Worker threads (0 = rayon's default, one per core).
    pub threads: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            output: PathBuf::from("sky.ppm"),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            altitude_m: 1_000.0,
            sun_height: 1.0,
            x_limit: 3.0,
            y_limit: 2.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples: SampleCounts::default(),
            threads: 0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Validate ---

impl Config {
    /// Per-user config directory, e.g. `~/.config/zenith` on Linux.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("zenith"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::ReadError {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path,
            source,
        })?;
        Ok(())
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image.width == 0 || self.image.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.image.width,
                height: self.image.height,
            });
        }
        self.atmosphere.validate()?;
        self.render.samples.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 640"));
        assert!(ron_str.contains("primary"));
        assert!(ron_str.contains("mie_direction: 0.758"));
    }

    #[test]
    fn test_defaults_match_earth_reference_view() {
        let config = Config::default();
        assert_eq!(config.atmosphere, AtmosphereParams::EARTH);
        assert_eq!(config.render.samples, SampleCounts::REFERENCE);
        assert_eq!(config.view.altitude_m, 1_000.0);
        assert_eq!(config.view.sun_height, 1.0);
        assert_eq!((config.view.x_limit, config.view.y_limit), (3.0, 2.0));
        assert_eq!((config.image.width, config.image.height), (640, 480));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `atmosphere` section entirely
        let ron_str = "(image: (width: 320), view: (), render: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.atmosphere, AtmosphereParams::EARTH);
        assert_eq!(config.image.width, 320);
        assert_eq!(config.image.height, 480);
    }

    #[test]
    fn test_partial_atmosphere_section() {
        let ron_str = "(atmosphere: (planet_radius: 3389500.0, atmosphere_radius: 3489500.0))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.atmosphere.planet_radius, 3_389_500.0);
        assert_eq!(config.atmosphere.sun_intensity, 22.0);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.image.width = 1920;
        config.image.height = 1080;
        config.view.sun_height = 0.05;
        config.render.samples.primary = 32;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_unparsable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_ron_comments_preserved() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_empty_image() {
        let mut config = Config::default();
        config.image.height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyImage { height: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_atmosphere() {
        let mut config = Config::default();
        config.atmosphere.atmosphere_radius = config.atmosphere.planet_radius;
        assert!(matches!(config.validate(), Err(ConfigError::Atmosphere(_))));

        let mut config = Config::default();
        config.render.samples.secondary = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Atmosphere(_))));
    }
}

//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TesseraConfig {
    /// Reference surface settings.
    pub planet: PlanetSection,
    /// Tessellation pass settings.
    pub tessellation: TessellationSection,
    /// Debug/development settings.
    pub debug: DebugSection,
}

/// Reference ellipsoid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetSection {
    /// Semi-axis radii in meters (x, y, z). Defaults to WGS84.
    pub radii_m: [f64; 3],
}

/// Tessellation pass settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TessellationSection {
    /// Maximum angular edge extent in degrees.
    pub granularity_deg: f64,
    /// Height offset above the reference surface in meters.
    pub height_m: f64,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSection {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for PlanetSection {
    fn default() -> Self {
        Self {
            radii_m: [6_378_137.0, 6_378_137.0, 6_356_752.314_245],
        }
    }
}

impl Default for TessellationSection {
    fn default() -> Self {
        Self {
            granularity_deg: 1.0,
            height_m: 0.0,
        }
    }
}

impl Default for DebugSection {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl TesseraConfig {
    /// Load config from the given directory, or create a default config
    /// file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: TesseraConfig =
                ron::from_str(&contents).map_err(ConfigError::Parse)?;
            tracing::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = TesseraConfig::default();
            config.save(config_dir)?;
            tracing::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}

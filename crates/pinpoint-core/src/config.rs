//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `pinpoint-config.yaml` at the
//! workspace root. Every field has a default matching the marketing site,
//! so an empty or missing file yields a working preview.

use std::path::Path;

use pinpoint_types::{Coordinates, IconSpec, TileLayer};
use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PinpointConfig {
    /// Preview server binding.
    #[serde(default)]
    pub server: ServerSettings,

    /// Map view, tiles, and pin icon.
    #[serde(default)]
    pub map: MapSettings,
}

impl PinpointConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `PINPOINT_HOST` and `PINPOINT_PORT` override the server section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the file exists but is malformed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        warn!(path = %path.display(), "Config file not found, using defaults");
        let mut config = Self::default();
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// Where the preview server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    /// Apply `PINPOINT_HOST` / `PINPOINT_PORT` from the environment.
    ///
    /// A port that does not parse is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PINPOINT_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("PINPOINT_PORT") {
            match val.parse() {
                Ok(port) => self.port = port,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid PINPOINT_PORT"),
            }
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Map view parameters handed to the map engine on mount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapSettings {
    /// DOM id of the element the view is attached to.
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Initial centre.
    #[serde(default = "default_center")]
    pub center: Coordinates,

    /// Initial zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Show the engine's zoom buttons.
    #[serde(default = "default_zoom_control")]
    pub zoom_control: bool,

    /// Base imagery.
    #[serde(default)]
    pub tiles: TileLayer,

    /// Pin icon used for every marker.
    #[serde(default)]
    pub icon: IconSpec,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            center: default_center(),
            zoom: default_zoom(),
            zoom_control: default_zoom_control(),
            tiles: TileLayer::default(),
            icon: IconSpec::default(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_container_id() -> String {
    String::from("pinpoint-map")
}

const fn default_center() -> Coordinates {
    Coordinates::new(35.2828, -120.6596)
}

const fn default_zoom() -> u8 {
    12
}

const fn default_zoom_control() -> bool {
    true
}

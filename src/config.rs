//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the surf-config.toml file.
//! It describes the spot being scored (preferred tide, which way the beach faces) and
//! how the report is displayed.

use crate::direction::CompassPoint;
use crate::scoring::OptimalTide;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "surf-config.toml";

/// Application configuration loaded from surf-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Surf spot configuration
    pub spot: SpotConfig,
    /// Output configuration
    pub display: DisplayConfig,
}

/// Surf spot configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpotConfig {
    /// Human-readable spot name for the report header
    pub name: String,
    /// Tide stage the spot works best on
    pub optimal_tide: OptimalTide,
    /// Direction the shore faces (towards the sea)
    pub shore_direction: CompassPoint,
    /// Judge offshore/onshore wind against `shore_direction`.
    /// When false, N/NE/NW always count as offshore and S/SE/SW as onshore
    pub shore_relative_wind: bool,
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Width in characters of the score bars in the ASCII scorecard
    pub bar_width: usize,
    /// Print the report as JSON instead of the ASCII scorecard
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spot: SpotConfig {
                name: "Home Break".to_string(),
                optimal_tide: OptimalTide::Mid,
                shore_direction: CompassPoint::S,
                shore_relative_wind: false, // Fixed offshore directions
            },
            display: DisplayConfig {
                bar_width: 20,
                json: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from surf-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(spot = %config.spot.name, "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "invalid config file format, using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!(
                    path = %path.as_ref().display(),
                    "no config file found, using default configuration"
                );
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    /// Save current configuration to surf-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to_path(CONFIG_FILE)
    }
}

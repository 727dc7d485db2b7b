//! Configuration for Epicycles
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Sampling (resolution, path closing, scale)
//! - Series (coefficient count, parallel build)
//! - Playback (time step, canvas size, trail spacing)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path sampling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Points per line and per chained curve segment
    pub samples_per_segment: usize,
    /// Sample a closing line on `Z`/`z`
    pub close_path: bool,
    /// Scale applied to samples before recentering
    pub scale: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            samples_per_segment: 100,
            close_path: false,
            scale: 8.0,
        }
    }
}

/// Series construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    /// Number of Fourier components
    pub num_coefficients: usize,
    /// Compute components on the rayon thread pool
    pub parallel: bool,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            num_coefficients: 400,
            parallel: true,
        }
    }
}

/// Playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Time advanced per frame, one period is `1 / time_step` frames
    pub time_step: f64,
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Squared distance a traced tip must move before it is kept
    pub min_trail_distance_sq: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            time_step: 0.0005,
            width: 800,
            height: 800,
            min_trail_distance_sq: 1.0,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Sampling settings
    pub sampling: SamplingSettings,
    /// Series settings
    pub series: SeriesSettings,
    /// Playback settings
    pub playback: PlaybackSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, `<config dir>/epicycles/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("epicycles").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.sampling.samples_per_segment == 0 {
            return Err(ConfigError::not_positive(
                "sampling.samples_per_segment",
                self.sampling.samples_per_segment,
            ));
        }

        if !(self.sampling.scale > 0.0) {
            return Err(ConfigError::not_positive(
                "sampling.scale",
                self.sampling.scale,
            ));
        }

        if self.series.num_coefficients == 0 {
            return Err(ConfigError::not_positive(
                "series.num_coefficients",
                self.series.num_coefficients,
            ));
        }

        if !(self.playback.time_step > 0.0) {
            return Err(ConfigError::not_positive(
                "playback.time_step",
                self.playback.time_step,
            ));
        }

        if self.playback.time_step > 1.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "playback.time_step".to_string(),
                value: self.playback.time_step.to_string(),
            });
        }

        if self.playback.width == 0 || self.playback.height == 0 {
            return Err(ConfigError::not_positive(
                "playback.width/height",
                format!("{}x{}", self.playback.width, self.playback.height),
            ));
        }

        if self.playback.min_trail_distance_sq < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "playback.min_trail_distance_sq".to_string(),
                value: self.playback.min_trail_distance_sq.to_string(),
            });
        }

        Ok(())
    }

    /// Merge another config into this one, taking only sections that differ
    /// from the defaults
    pub fn merge(&mut self, other: &Config) {
        let defaults = Config::default();
        if other.sampling != defaults.sampling {
            self.sampling = other.sampling.clone();
        }
        if other.series != defaults.series {
            self.series = other.series.clone();
        }
        if other.playback != defaults.playback {
            self.playback = other.playback.clone();
        }
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

//! Epicycles Settings Crate
//!
//! Handles configuration of the sampling, series and playback stages, with
//! JSON and TOML persistence.

pub mod config;
pub mod error;

pub use config::{Config, PlaybackSettings, SamplingSettings, SeriesSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

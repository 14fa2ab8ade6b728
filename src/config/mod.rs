//! Configuration for the `solar` binary.
//!
//! Settings come from an optional `solar.toml` file and from command-line
//! flags, with flags taking precedence. The file is looked up in:
//!
//! 1. The directory passed with `--config`, where it must exist
//! 2. **XDG_CONFIG_HOME**/solar/solar.toml, where it may be absent
//!
//! ## Configuration Structure
//!
//! ```toml
//! latitude = 34.1          # Geographic latitude (-90 to +90)
//! longitude = -118.2       # Geographic longitude (-180 to +180)
//! low_temp = 4000          # Night color temperature in Kelvin
//! high_temp = 6500         # Day color temperature in Kelvin
//! timezone = "America/Los_Angeles"  # IANA time zone name
//! time_format = "%H:%M:%S" # strftime format for event times
//! ```
//!
//! Every field is optional. Missing values are resolved at run time: the
//! latitude falls back to the equator, the longitude is estimated from the
//! time zone, and the time zone comes from the system.

pub mod loading;
pub mod validation;

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::common::constants::*;
use crate::temperature::Temperature;

pub use loading::{config_path, display_path, load, load_from_path};
pub use validation::{validate_config, validate_time_format};

/// Settings loaded from `solar.toml` or given on the command line.
///
/// The same structure carries both: [`Config::with_overrides`] merges a
/// flag-built `Config` over a file-built one.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// Night color temperature in Kelvin
    pub low_temp: Option<f64>,
    /// Day color temperature in Kelvin
    pub high_temp: Option<f64>,
    /// IANA time zone name, e.g. "Europe/Berlin"
    pub timezone: Option<String>,
    /// strftime format used for event times in the text report
    pub time_format: Option<String>,
}

impl Config {
    /// Load the configuration and the path it came from, see [`loading::load`].
    pub fn load(custom_dir: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        load(custom_dir)
    }

    /// Layer `overrides` on top of this configuration.
    ///
    /// Fields set in `overrides` win; unset ones keep this configuration's
    /// value.
    pub fn with_overrides(self, overrides: &Config) -> Config {
        Config {
            latitude: overrides.latitude.or(self.latitude),
            longitude: overrides.longitude.or(self.longitude),
            low_temp: overrides.low_temp.or(self.low_temp),
            high_temp: overrides.high_temp.or(self.high_temp),
            timezone: overrides.timezone.clone().or(self.timezone),
            time_format: overrides.time_format.clone().or(self.time_format),
        }
    }

    pub fn low_temperature(&self) -> Temperature {
        Temperature(self.low_temp.unwrap_or(DEFAULT_LOW_TEMP))
    }

    pub fn high_temperature(&self) -> Temperature {
        Temperature(self.high_temp.unwrap_or(DEFAULT_HIGH_TEMP))
    }

    pub fn time_format(&self) -> &str {
        self.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    /// Log the effective configuration. Only called in debug mode.
    pub fn log_config(&self, source: Option<&Path>) {
        match source {
            Some(path) => log_block_start!("Loaded configuration from {}", display_path(path)),
            None => log_block_start!("No configuration file, using defaults"),
        }

        let describe = |value: Option<String>| value.unwrap_or_else(|| "auto".to_string());
        log_indented!("Latitude: {}", describe(self.latitude.map(|v| format!("{v}°"))));
        log_indented!("Longitude: {}", describe(self.longitude.map(|v| format!("{v}°"))));
        log_indented!("Low temperature: {}", self.low_temperature());
        log_indented!("High temperature: {}", self.high_temperature());
        log_indented!("Timezone: {}", describe(self.timezone.clone()));
        log_indented!("Time format: {}", self.time_format());
    }
}

#[cfg(test)]
mod tests;

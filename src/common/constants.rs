//! Application-wide constants: defaults, validation limits and exit codes.

// # Configuration

/// Name of the configuration file looked up in the config directory.
pub const CONFIG_FILE_NAME: &str = "solar.toml";

/// Directory under `$XDG_CONFIG_HOME` holding the configuration file.
pub const CONFIG_DIR_NAME: &str = "solar";

// # Defaults

pub const DEFAULT_LOW_TEMP: f64 = 4000.0; // Kelvin, night
pub const DEFAULT_HIGH_TEMP: f64 = 6500.0; // Kelvin, day (neutral)
pub const DEFAULT_LATITUDE: f64 = 0.0;
pub const DEFAULT_TIME_FORMAT: &str = crate::solar::CLOCK_FORMAT;

// # Validation Limits

pub const MINIMUM_TEMP: f64 = 0.0; // Kelvin, no upper bound
pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// # Exit Codes

pub const EXIT_FAILURE: i32 = 1;

//! # Solar
//!
//! Sunrise, sunset and twilight times with display color temperature and
//! whitepoint calculation.
//!
//! ## Architecture
//!
//! The library is organized in two layers:
//!
//! - **Calculations**: `solar` for the daily sun events and `temperature` for
//!   the time-of-day color temperature and its RGB whitepoint. These are pure
//!   and never log, read the clock or touch the environment.
//! - **Application**: `args`, `config`, `geo` and `commands` resolve the
//!   inputs of the `solar` binary and print its output, with `logger`
//!   providing the structured diagnostics.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use solar::solar::{SunCondition, calculate_sun};
//! use solar::temperature::{Temperature, calculate_temperature, whitepoint};
//!
//! let now = Utc.with_ymd_and_hms(2021, 3, 20, 12, 0, 0).unwrap();
//! let sun = calculate_sun(&now, 51.5, -0.1);
//! assert_eq!(sun.condition, SunCondition::Normal);
//!
//! let (temp, _) = calculate_temperature(
//!     &now,
//!     51.5,
//!     -0.1,
//!     Temperature::DEFAULT_LOW,
//!     Temperature::DEFAULT_HIGH,
//! );
//! assert_eq!(whitepoint(temp).as_array(), [1.0, 1.0, 1.0]);
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod common;
pub mod config;
pub mod geo;
pub mod solar;
pub mod temperature;

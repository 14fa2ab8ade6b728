//! Sunrise, sunset and twilight calculations.
//!
//! This module implements the sun position side of the crate: given a zoned
//! instant and a position it finds the day's civil dawn, sunrise, sunset and
//! civil dusk, along with a [`SunCondition`] for days near the poles where
//! some of those crossings never happen.
//!
//! ## Module Structure
//!
//! - [`position`]: NOAA closed-form terms (orbit angle, declination, equation
//!   of time, hour angle)
//! - [`times`]: [`SunTimes`] and [`calculate_sun`]
//! - [`display`]: Formatting of event times
//!
//! Everything here is pure. Identical inputs give identical results, and no
//! function reads the clock, the environment or the system time zone.

pub mod display;
pub mod position;
pub mod times;

pub use display::{CLOCK_FORMAT, format_event};
pub use position::days_in_year;
pub use times::{SunCondition, SunTimes, UnknownSunCondition, calculate_sun};

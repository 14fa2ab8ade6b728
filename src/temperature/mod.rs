//! Display color temperature.
//!
//! Two independent pieces live here:
//!
//! - [`interpolate`]: maps an instant and the day's [`SunTimes`] onto a color
//!   temperature between a low (night) and high (day) bound, and
//!   [`calculate_temperature`] which ties that to the sun calculation
//! - [`whitepoint`]: converts any color temperature into normalized RGB
//!   channel multipliers
//!
//! [`SunTimes`]: crate::solar::SunTimes

pub mod interpolate;
pub mod whitepoint;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use interpolate::{calculate_temperature, interpolate_day_temperature};
pub use whitepoint::{Whitepoint, whitepoint};

/// Color temperature in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(pub f64);

impl Temperature {
    /// Default night temperature.
    pub const DEFAULT_LOW: Temperature = Temperature(4000.0);
    /// Default day temperature. This is the neutral point: no adjustment.
    pub const DEFAULT_HIGH: Temperature = Temperature(6500.0);

    pub fn kelvin(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}K", self.0)
    }
}

#[cfg(test)]
mod tests;

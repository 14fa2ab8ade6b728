//! Configuration validation.
//!
//! Rejects values the calculations cannot use meaningfully. Validation runs on
//! the file contents when loading and again on the merged configuration once
//! command-line overrides are applied.

use anyhow::Result;
use chrono::format::{Item, StrftimeItems};

use super::Config;
use crate::common::constants::*;

/// Validate every set field of `config`.
///
/// A `low_temp` above `high_temp` is accepted; the ramps then run the other
/// way.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat)
    {
        anyhow::bail!(
            "latitude must be between {} and {} degrees (got {})",
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE,
            lat
        );
    }

    if let Some(lon) = config.longitude
        && !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between {} and {} degrees (got {})",
            MINIMUM_LONGITUDE,
            MAXIMUM_LONGITUDE,
            lon
        );
    }

    for (name, value) in [("low_temp", config.low_temp), ("high_temp", config.high_temp)] {
        if let Some(temp) = value
            && !(temp.is_finite() && temp >= MINIMUM_TEMP)
        {
            anyhow::bail!("{} ({}) must be a non-negative number of Kelvin", name, temp);
        }
    }

    if let Some(tz) = config.timezone.as_deref() {
        validate_timezone(tz)?;
    }

    if let Some(format) = config.time_format.as_deref() {
        validate_time_format(format)?;
    }

    Ok(())
}

/// Check that `name` is a known IANA time zone.
pub fn validate_timezone(name: &str) -> Result<()> {
    if name.parse::<chrono_tz::Tz>().is_err() {
        anyhow::bail!("Unknown timezone '{}', expected an IANA name such as 'Europe/Berlin'", name);
    }
    Ok(())
}

/// Check that `format` is a usable strftime format.
pub fn validate_time_format(format: &str) -> Result<()> {
    if format.is_empty() {
        anyhow::bail!("time_format must not be empty");
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("Invalid time_format '{}'", format);
    }
    Ok(())
}

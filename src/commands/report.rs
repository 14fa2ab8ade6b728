//! Report command: sun times and color temperature for one instant.
//!
//! Resolves configuration, time zone, position and time, runs the
//! calculation once and prints the result to stdout as text or JSON. All
//! diagnostics go through the logger (stderr).

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::path::Path;

use crate::common::constants::DEFAULT_LATITUDE;
use crate::config::{Config, validate_config};
use crate::geo::{LOCAL_TIMEZONE_NAME, estimate_longitude, resolve_timezone};
use crate::solar::position::{
    CIVIL_TWILIGHT_ZENITH, DAYLIGHT_ZENITH, equation_of_time, orbit_angle, radians,
    sun_declination, sun_hour_angle,
};
use crate::solar::times::truncate_day_longitude;
use crate::solar::{SunTimes, format_event};
use crate::temperature::{Temperature, Whitepoint, calculate_temperature, whitepoint};

/// Everything the report prints, in the time zone `Z` it was calculated in.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "DateTime<Z>: Serialize"))]
pub struct Report<Z: TimeZone> {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub temperature: Temperature,
    pub whitepoint: Whitepoint,
    pub sun: SunTimes<Z>,
}

impl<Z: TimeZone> Report<Z>
where
    Z::Offset: fmt::Display,
{
    /// Calculate the report for `now` at the given position. `timezone` is
    /// the label printed for the zone of `now`.
    pub fn calculate(
        now: &DateTime<Z>,
        timezone: &str,
        latitude: f64,
        longitude: f64,
        low: Temperature,
        high: Temperature,
    ) -> Self {
        let (temperature, sun) = calculate_temperature(now, latitude, longitude, low, high);
        Report {
            latitude,
            longitude,
            timezone: timezone.to_string(),
            temperature,
            whitepoint: whitepoint(temperature),
            sun,
        }
    }

    /// Render the human-readable report. Events that do not happen are left
    /// out.
    pub fn render_text(&self, time_format: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "latitude: {}", self.latitude);
        let _ = writeln!(out, "longitude: {}", self.longitude);
        let _ = writeln!(out, "timezone: {}", self.timezone);
        let _ = writeln!(out, "sun condition: {}", self.sun.condition);

        for (name, event) in [
            ("dawn", &self.sun.dawn),
            ("sunrise", &self.sun.sunrise),
            ("sunset", &self.sun.sunset),
            ("dusk", &self.sun.dusk),
        ] {
            if event.is_some() {
                let _ = writeln!(out, "{name} time: {}", format_event(event.as_ref(), time_format));
            }
        }

        let _ = writeln!(out, "color temperature: {}", self.temperature);
        let _ = writeln!(out, "whitepoint: {}", format_whitepoint(&self.whitepoint));
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report as JSON")
    }
}

/// Format whitepoint channels as `r g b` with four decimals.
pub fn format_whitepoint(wp: &Whitepoint) -> String {
    format!("{:.4} {:.4} {:.4}", wp.red, wp.green, wp.blue)
}

/// Handle the default command: print the report for the configured position.
///
/// Times are reported in the configured time zone, or in the system zone
/// ([`chrono::Local`]) when none is set.
///
/// # Arguments
/// * `debug_enabled` - Log configuration and calculation details
/// * `config_dir` - Directory holding `solar.toml`, if not the default one
/// * `overrides` - Settings given on the command line
/// * `now` - Unix time to report on, the system clock if `None`
/// * `json` - Print JSON instead of text
pub fn handle_report_command(
    debug_enabled: bool,
    config_dir: Option<&Path>,
    overrides: &Config,
    now: Option<i64>,
    json: bool,
) -> Result<()> {
    if debug_enabled {
        log_version!();
    }

    let (file_config, source) = Config::load(config_dir)?;
    let config = file_config.with_overrides(overrides);
    validate_config(&config)?;

    if debug_enabled {
        config.log_config(source.as_deref());
    }

    let (low, high) = (config.low_temperature(), config.high_temperature());
    if low > high {
        log_pipe!();
        log_warning!(
            "Low temperature ({low}) is above high temperature ({high}), \
             nights will be cooler than days"
        );
    }

    let zone = resolve_timezone(config.timezone.as_deref())?;

    let latitude = config.latitude.unwrap_or_else(|| {
        log_pipe!();
        log_warning!("No latitude given, assuming the equator ({DEFAULT_LATITUDE}°)");
        log_indented!("Set it with --lat or latitude in solar.toml");
        DEFAULT_LATITUDE
    });

    let output = match zone {
        Some(tz) => {
            let now = resolve_now(now, &tz)?;
            build_output(&now, tz.name(), latitude, &config, debug_enabled, json)?
        }
        None => {
            let now = resolve_now(now, &Local)?;
            build_output(&now, LOCAL_TIMEZONE_NAME, latitude, &config, debug_enabled, json)?
        }
    };
    print!("{output}");

    if debug_enabled {
        log_end!();
    }

    Ok(())
}

/// Estimate the longitude if needed, calculate and render the report.
fn build_output<Z: TimeZone>(
    now: &DateTime<Z>,
    timezone: &str,
    latitude: f64,
    config: &Config,
    debug_enabled: bool,
    json: bool,
) -> Result<String>
where
    Z::Offset: fmt::Display,
{
    let (longitude, longitude_estimated) = match config.longitude {
        Some(longitude) => (longitude, false),
        None => (estimate_longitude(now), true),
    };

    if debug_enabled {
        log_block_start!("Resolved inputs");
        log_indented!("Time: {}", now.to_rfc3339());
        log_indented!("Timezone: {timezone} (UTC{})", now.format("%:z"));
        log_indented!(
            "Longitude: {longitude}°{}",
            if longitude_estimated { " (estimated from timezone)" } else { "" }
        );
        log_solar_debug_info(now, latitude, longitude);
    }

    let report = Report::calculate(
        now,
        timezone,
        latitude,
        longitude,
        config.low_temperature(),
        config.high_temperature(),
    );

    if json {
        let mut rendered = report.render_json()?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(report.render_text(config.time_format()))
    }
}

fn resolve_now<Z: TimeZone>(unix: Option<i64>, tz: &Z) -> Result<DateTime<Z>> {
    let utc = match unix {
        Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
            .with_context(|| format!("Time {secs} is outside the supported range"))?,
        None => Utc::now(),
    };
    Ok(utc.with_timezone(tz))
}

/// Log the intermediate values of the sun calculation.
fn log_solar_debug_info<Z: TimeZone>(now: &DateTime<Z>, latitude: f64, longitude: f64)
where
    Z::Offset: fmt::Display,
{
    let reference = truncate_day_longitude(now, longitude);
    let orbit = orbit_angle(&reference);
    let declination = sun_declination(orbit);
    let latitude_rad = radians(latitude);

    let describe = |hour_angle: Option<f64>| {
        hour_angle.map_or_else(|| "never crossed".to_string(), |ha| format!("{ha:.6} rad"))
    };

    log_pipe!();
    log_debug!("Solar calculation details:");
    log_indented!("Day reference: {}", reference.to_rfc3339());
    log_indented!("Orbit angle: {orbit:.6} rad");
    log_indented!("Declination: {:.4}°", declination.to_degrees());
    log_indented!("Equation of time: {:.4} min", equation_of_time(orbit));
    log_indented!(
        "Twilight hour angle: {}",
        describe(sun_hour_angle(latitude_rad, declination, CIVIL_TWILIGHT_ZENITH))
    );
    log_indented!(
        "Daylight hour angle: {}",
        describe(sun_hour_angle(latitude_rad, declination, DAYLIGHT_ZENITH))
    );
}

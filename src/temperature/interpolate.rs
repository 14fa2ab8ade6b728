//! Time-of-day color temperature interpolation.
//!
//! A normal day is split into five windows:
//!
//! ```text
//!   low   |  low → high  |   high   |  high → low  |   low
//! ------dawn---------sunrise------sunset--------dusk------
//! ```
//!
//! The ramps are linear in time. Days without a full set of crossings are
//! handled by [`calculate_temperature`], which needs the previous day to tell
//! a first midnight-sun morning from a steady one.

use chrono::{DateTime, TimeDelta, TimeZone};

use super::Temperature;
use crate::solar::{SunCondition, SunTimes, calculate_sun};

/// Calculate the color temperature at `now` for the given position.
///
/// Returns the temperature together with the day's sun times, which callers
/// usually want to show alongside it.
///
/// - Normal days follow [`interpolate_day_temperature`].
/// - A midnight-sun day that follows a normal day still ramps up from its
///   morning, until today's sunrise. Any other midnight-sun day is `high`.
/// - Polar night is always `low`, with no evening ramp into it.
pub fn calculate_temperature<Tz: TimeZone>(
    now: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    low: Temperature,
    high: Temperature,
) -> (Temperature, SunTimes<Tz>) {
    let sun = calculate_sun(now, latitude, longitude);

    let temperature = match sun.condition {
        SunCondition::Normal => interpolate_day_temperature(now, &sun, low, high),
        SunCondition::MidnightSun => {
            let yesterday = calculate_sun(&yesterday(now), latitude, longitude);
            if yesterday.is_normal() && is_before(now, sun.sunrise.as_ref()) {
                interpolate_day_temperature(now, &sun, low, high)
            } else {
                high
            }
        }
        SunCondition::PolarNight => low,
    };

    (temperature, sun)
}

/// Interpolate the temperature for `now` within a day described by `sun`.
///
/// Events that are unset never count as reached, so a day missing its dawn
/// goes straight to the morning ramp and a ramp without a start returns its
/// end temperature.
pub fn interpolate_day_temperature<Tz: TimeZone>(
    now: &DateTime<Tz>,
    sun: &SunTimes<Tz>,
    low: Temperature,
    high: Temperature,
) -> Temperature {
    if is_before(now, sun.dawn.as_ref()) {
        low
    } else if is_before(now, sun.sunrise.as_ref()) {
        ramp(now, sun.dawn.as_ref(), sun.sunrise.as_ref(), low, high)
    } else if is_before(now, sun.sunset.as_ref()) {
        high
    } else if is_before(now, sun.dusk.as_ref()) {
        ramp(now, sun.sunset.as_ref(), sun.dusk.as_ref(), high, low)
    } else {
        low
    }
}

fn is_before<Tz: TimeZone>(now: &DateTime<Tz>, event: Option<&DateTime<Tz>>) -> bool {
    event.is_some_and(|event| now < event)
}

/// Linear interpolation between two temperatures over a time window.
fn ramp<Tz: TimeZone>(
    now: &DateTime<Tz>,
    start: Option<&DateTime<Tz>>,
    stop: Option<&DateTime<Tz>>,
    start_temp: Temperature,
    stop_temp: Temperature,
) -> Temperature {
    if start_temp == stop_temp {
        return stop_temp;
    }

    let (Some(start), Some(stop)) = (start, stop) else {
        return stop_temp;
    };

    let span = seconds_between(start, stop);
    if span <= 0.0 {
        return stop_temp;
    }

    let position = (seconds_between(start, now) / span).clamp(0.0, 1.0);
    Temperature(start_temp.0 + (stop_temp.0 - start_temp.0) * position)
}

fn seconds_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> f64 {
    let delta = to.clone() - from.clone();
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9
}

fn yesterday<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    now.clone()
        .checked_sub_signed(TimeDelta::hours(24))
        .unwrap_or_else(|| now.clone())
}

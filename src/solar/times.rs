//! Daily sun event times.
//!
//! `calculate_sun` turns a zoned instant and a latitude/longitude pair into the
//! four daily crossing times (dawn, sunrise, sunset, dusk) and a
//! [`SunCondition`] describing whether those crossings happen at all.

use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use serde::Serialize;
use std::fmt;

use super::position::{
    CIVIL_TWILIGHT_ZENITH, DAYLIGHT_ZENITH, equation_of_time, hour_angle_to_seconds,
    longitude_time_offset, orbit_angle, radians, sun_declination, sun_hour_angle,
};

/// Describes whether the sun rises and sets on a given day.
///
/// Serializes to the same text as its `Display` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SunCondition {
    /// Regular day with dawn, sunrise, sunset and dusk.
    #[serde(rename = "normal sun")]
    Normal,
    /// The sun stays up (or never gets far enough below the horizon).
    #[serde(rename = "midnight sun")]
    MidnightSun,
    /// The sun stays down.
    #[serde(rename = "polar night sun")]
    PolarNight,
}

impl SunCondition {
    /// Classify a day without a full set of crossings.
    ///
    /// Latitude and declination on the same side of the equator mean the sun
    /// stays up, opposite sides mean it stays down. Only the sign bits are
    /// read, so signed NaN inputs still classify.
    pub fn classify(latitude: f64, declination: f64) -> Self {
        if latitude.is_sign_negative() == declination.is_sign_negative() {
            SunCondition::MidnightSun
        } else {
            SunCondition::PolarNight
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SunCondition::Normal => "normal sun",
            SunCondition::MidnightSun => "midnight sun",
            SunCondition::PolarNight => "polar night sun",
        }
    }
}

impl fmt::Display for SunCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a raw value does not name a [`SunCondition`].
///
/// Indicates a programming error upstream rather than bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSunCondition(pub u8);

impl fmt::Display for UnknownSunCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SunCondition({})", self.0)
    }
}

impl std::error::Error for UnknownSunCondition {}

impl TryFrom<u8> for SunCondition {
    type Error = UnknownSunCondition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SunCondition::Normal),
            1 => Ok(SunCondition::MidnightSun),
            2 => Ok(SunCondition::PolarNight),
            other => Err(UnknownSunCondition(other)),
        }
    }
}

/// Sun event times for one calendar day, in the time zone of the instant they
/// were calculated from.
///
/// The times are only all meaningful when `condition` is
/// [`SunCondition::Normal`]. Otherwise some of them are `None` and the rest
/// should not be treated as real crossing times.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "DateTime<Tz>: Serialize"))]
pub struct SunTimes<Tz: TimeZone> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dawn: Option<DateTime<Tz>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<DateTime<Tz>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<DateTime<Tz>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dusk: Option<DateTime<Tz>>,
    pub condition: SunCondition,
}

impl<Tz: TimeZone> PartialEq for SunTimes<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.dawn == other.dawn
            && self.sunrise == other.sunrise
            && self.sunset == other.sunset
            && self.dusk == other.dusk
            && self.condition == other.condition
    }
}

impl<Tz: TimeZone> SunTimes<Tz> {
    /// Whether this is a regular day with all four crossings.
    pub fn is_normal(&self) -> bool {
        self.condition == SunCondition::Normal
    }
}

/// Calculate the sun event times for the day of `now` at the given position.
///
/// Latitude and longitude are in degrees. The longitude only refines the
/// result: it moves the day reference by less than an hour, so passing `0.0`
/// still gives usable times. Keeping the latitude within [-90, 90] is up to
/// the caller; other values give meaningless but non-panicking output.
pub fn calculate_sun<Tz: TimeZone>(
    now: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunTimes<Tz> {
    let reference = truncate_day_longitude(now, longitude);
    let latitude_rad = radians(latitude);

    let orbit = orbit_angle(&reference);
    let declination = sun_declination(orbit);
    let eqtime = equation_of_time(orbit);

    let twilight = sun_hour_angle(latitude_rad, declination, CIVIL_TWILIGHT_ZENITH);
    let daylight = sun_hour_angle(latitude_rad, declination, DAYLIGHT_ZENITH);

    let morning = |hour_angle: Option<f64>| {
        hour_angle.and_then(|ha| add_seconds(&reference, hour_angle_to_seconds(ha.abs(), eqtime)))
    };
    let evening = |hour_angle: Option<f64>| {
        hour_angle.and_then(|ha| add_seconds(&reference, hour_angle_to_seconds(-ha.abs(), eqtime)))
    };

    let condition = if twilight.is_some() && daylight.is_some() {
        SunCondition::Normal
    } else {
        SunCondition::classify(latitude_rad, declination)
    };

    SunTimes {
        dawn: morning(twilight),
        sunrise: morning(daylight),
        sunset: evening(daylight),
        dusk: evening(twilight),
        condition,
    }
}

/// Move `t` back to the start of its calendar day in its own time zone.
///
/// The wall-clock time of day is subtracted as a duration, so on a DST change
/// the result carries the clock shift (01:00 instead of 00:00 on the day the
/// clocks fall back).
pub fn truncate_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let elapsed = TimeDelta::seconds(i64::from(t.num_seconds_from_midnight()))
        + TimeDelta::nanoseconds(i64::from(t.nanosecond()));
    t.clone().checked_sub_signed(elapsed).unwrap_or_else(|| t.clone())
}

/// Truncate to the start of the day, then shift by the longitude offset.
pub fn truncate_day_longitude<Tz: TimeZone>(t: &DateTime<Tz>, longitude: f64) -> DateTime<Tz> {
    let day = truncate_day(t);
    add_seconds(&day, longitude_time_offset(longitude)).unwrap_or(day)
}

/// Add a fractional number of seconds to `t`.
///
/// Returns `None` when `secs` is not finite or the result leaves chrono's
/// representable range.
pub fn add_seconds<Tz: TimeZone>(t: &DateTime<Tz>, secs: f64) -> Option<DateTime<Tz>> {
    if !secs.is_finite() {
        return None;
    }

    let whole = secs.trunc();
    let delta = TimeDelta::try_seconds(whole as i64)?
        .checked_add(&TimeDelta::nanoseconds(((secs - whole) * 1e9) as i64))?;

    t.clone().checked_add_signed(delta)
}

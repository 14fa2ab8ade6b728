//! Time zone selection and timezone-based longitude estimation.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Offset, TimeZone};
use chrono_tz::Tz;

/// Label shown for the system time zone, which has no IANA name of its own.
pub const LOCAL_TIMEZONE_NAME: &str = "Local";

/// Resolve a configured time zone name.
///
/// `None` means no zone was configured and the system zone
/// ([`chrono::Local`]) applies. A configured name must parse.
pub fn resolve_timezone(configured: Option<&str>) -> Result<Option<Tz>> {
    configured
        .map(|name| {
            name.parse::<Tz>()
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("Unknown timezone '{name}'"))
        })
        .transpose()
}

/// Estimate the longitude from the time zone of `t`.
///
/// Each hour of standard UTC offset is worth 15 degrees. Daylight saving time
/// is removed first so the estimate does not move twice a year.
pub fn estimate_longitude<Z: TimeZone>(t: &DateTime<Z>) -> f64 {
    f64::from(standard_offset_seconds(t)) / 3600.0 * 15.0
}

/// Standard (non-DST) UTC offset of the zone of `t`, in seconds.
///
/// Daylight saving moves clocks forward, so the standard offset is the
/// smallest of the offsets in effect now, in January and in July. Taking both
/// months covers either hemisphere.
pub fn standard_offset_seconds<Z: TimeZone>(t: &DateTime<Z>) -> i32 {
    let zone = t.timezone();
    let current = t.offset().fix().local_minus_utc();

    [1, 7]
        .into_iter()
        .filter_map(|month| zone.with_ymd_and_hms(t.year(), month, 1, 12, 0, 0).earliest())
        .map(|sample| sample.offset().fix().local_minus_utc())
        .fold(current, i32::min)
}

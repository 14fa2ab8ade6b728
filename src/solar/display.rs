//! Human-readable formatting for sun event times.

use chrono::{DateTime, TimeZone};
use std::fmt;

use super::times::SunTimes;

/// Clock format used when no other format is requested.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Placeholder shown for an event that does not happen that day.
const UNSET_CLOCK: &str = "--:--:--";

/// Format an optional event time with the given strftime format.
///
/// The format must already be known to be valid; see
/// `config::validation::validate_time_format`.
pub fn format_event<Tz: TimeZone>(event: Option<&DateTime<Tz>>, format: &str) -> String
where
    Tz::Offset: fmt::Display,
{
    event.map_or_else(|| UNSET_CLOCK.to_string(), |t| t.format(format).to_string())
}

impl<Tz: TimeZone> fmt::Display for SunTimes<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dawn at {}, sunrise at {}, sunset at {}, dusk at {}, condition: {}",
            format_event(self.dawn.as_ref(), CLOCK_FORMAT),
            format_event(self.sunrise.as_ref(), CLOCK_FORMAT),
            format_event(self.sunset.as_ref(), CLOCK_FORMAT),
            format_event(self.dusk.as_ref(), CLOCK_FORMAT),
            self.condition,
        )
    }
}

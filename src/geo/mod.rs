//! Location helpers for the `solar` binary.
//!
//! The calculations take an explicit longitude. When none is configured the
//! binary estimates one from the time zone it reports in.
//!
//! - [`timezone`]: Time zone selection and longitude estimation

pub mod timezone;

pub use timezone::{
    LOCAL_TIMEZONE_NAME, estimate_longitude, resolve_timezone, standard_offset_seconds,
};

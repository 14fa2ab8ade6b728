//! Whitepoint command: RGB channel multipliers for a color temperature.

use anyhow::{Context, Result};
use serde_json::json;

use super::report::format_whitepoint;
use crate::temperature::{Temperature, whitepoint};

/// Handle the whitepoint command.
///
/// Prints `whitepoint: r g b` or, with `json`, an object holding the
/// temperature and the three channels.
pub fn handle_whitepoint_command(temperature: f64, json: bool) -> Result<()> {
    println!("{}", render_whitepoint(Temperature(temperature), json)?);
    Ok(())
}

fn render_whitepoint(temperature: Temperature, json: bool) -> Result<String> {
    if !temperature.kelvin().is_finite() || temperature.kelvin() < 0.0 {
        anyhow::bail!(
            "Temperature must be a non-negative number of Kelvin (got {})",
            temperature.kelvin()
        );
    }

    let wp = whitepoint(temperature);
    if json {
        serde_json::to_string_pretty(&json!({
            "temperature": temperature,
            "whitepoint": wp,
        }))
        .context("Failed to serialize whitepoint as JSON")
    } else {
        Ok(format!("whitepoint: {}", format_whitepoint(&wp)))
    }
}

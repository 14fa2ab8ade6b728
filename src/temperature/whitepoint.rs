//! Color temperature to RGB whitepoint conversion.
//!
//! The temperature is first placed on the CIE 1931 chromaticity diagram using
//! the daylight locus (illuminant D series) above 4000K, the Planckian locus
//! below 2500K, and a raised-cosine blend of the two in between. The
//! chromaticity is then converted to gamma-encoded sRGB and normalized so the
//! brightest channel is exactly 1.0.
//!
//! Formulas:
//! - Illuminant D: <https://en.wikipedia.org/wiki/Standard_illuminant#Illuminant_series_D>
//! - Planckian locus: <https://en.wikipedia.org/wiki/Planckian_locus#Approximation>
//! - XYZ to sRGB: <http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html>

use serde::Serialize;
use std::f64::consts::PI;

use super::Temperature;

/// Lowest temperature the Planckian approximation is defined for.
const PLANCKIAN_MIN: f64 = 1667.0;
/// Highest temperature either locus approximation is used for.
const LOCUS_MAX: f64 = 25000.0;
/// Below this the daylight locus is blended with the Planckian locus.
const DAYLIGHT_MIN: f64 = 4000.0;
/// Below this only the Planckian locus is used.
const BLEND_MIN: f64 = 2500.0;

/// sRGB gamma exponent. Kept at 2.2 rather than 2.4 so results match
/// existing whitepoint tables produced by this algorithm.
const SRGB_GAMMA: f64 = 2.2;

/// Relative red, green and blue channel multipliers, each within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Whitepoint {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Whitepoint {
    /// Whitepoint of the neutral 6500K temperature.
    pub const NEUTRAL: Whitepoint = Whitepoint {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    pub fn as_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

/// CIE 1931 (x, y) chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Chromaticity {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

/// Calculate the whitepoint for the given color temperature.
///
/// Temperatures below 1667K are treated as 1667K and temperatures above
/// 25000K as 25000K. 6500K returns exactly [`Whitepoint::NEUTRAL`]. Never
/// panics, whatever the input.
pub fn whitepoint(temperature: Temperature) -> Whitepoint {
    let temp = temperature.kelvin();
    if temp == Temperature::DEFAULT_HIGH.kelvin() {
        return Whitepoint::NEUTRAL;
    }

    let chromaticity = if temp >= LOCUS_MAX {
        illuminant_d(LOCUS_MAX)
    } else if temp >= DAYLIGHT_MIN {
        illuminant_d(temp)
    } else if temp >= BLEND_MIN {
        let daylight = illuminant_d(temp);
        let planckian = planckian_locus(temp);
        let factor = (DAYLIGHT_MIN - temp) / (DAYLIGHT_MIN - BLEND_MIN);
        let weight = ((PI * factor).cos() + 1.0) / 2.0;
        Chromaticity {
            x: daylight.x * weight + planckian.x * (1.0 - weight),
            y: daylight.y * weight + planckian.y * (1.0 - weight),
        }
    } else if temp >= PLANCKIAN_MIN {
        planckian_locus(temp)
    } else {
        // Also catches NaN
        planckian_locus(PLANCKIAN_MIN)
    };

    normalize(xyz_to_srgb(chromaticity))
}

/// Daylight locus chromaticity, defined here for [2500, 25000] K.
///
/// The series is only well-defined from 4000K up; it is stretched down to
/// 2500K for the blend with the Planckian locus.
pub(crate) fn illuminant_d(temp: f64) -> Chromaticity {
    debug_assert!(
        (BLEND_MIN..=LOCUS_MAX).contains(&temp),
        "illuminant D temperature {temp} out of range [{BLEND_MIN}, {LOCUS_MAX}]"
    );

    let x = if temp <= 7000.0 {
        0.244063 + 0.09911e3 / temp + 2.9678e6 / temp.powi(2) - 4.6070e9 / temp.powi(3)
    } else {
        0.237040 + 0.24748e3 / temp + 1.9018e6 / temp.powi(2) - 2.0064e9 / temp.powi(3)
    };

    Chromaticity {
        x,
        y: -3.0 * x.powi(2) + 2.870 * x - 0.275,
    }
}

/// Black body chromaticity, defined for [1667, 25000] K.
pub(crate) fn planckian_locus(temp: f64) -> Chromaticity {
    debug_assert!(
        (PLANCKIAN_MIN..=LOCUS_MAX).contains(&temp),
        "Planckian locus temperature {temp} out of range [{PLANCKIAN_MIN}, {LOCUS_MAX}]"
    );

    if temp <= DAYLIGHT_MIN {
        let x = -0.2661239e9 / temp.powi(3) - 0.2343589e6 / temp.powi(2)
            + 0.8776956e3 / temp
            + 0.179910;
        // The locus bends sharply below 2222K and needs its own fit there.
        let y = if temp <= 2222.0 {
            -1.1064814 * x.powi(3) - 1.34811020 * x.powi(2) + 2.18555832 * x - 0.20219683
        } else {
            -0.9549476 * x.powi(3) - 1.37418593 * x.powi(2) + 2.09137015 * x - 0.16748867
        };
        Chromaticity { x, y }
    } else {
        let x = -3.0258469e9 / temp.powi(3)
            + 2.1070379e6 / temp.powi(2)
            + 0.2226347e3 / temp
            + 0.240390;
        let y = 3.0817580 * x.powi(3) - 5.87338670 * x.powi(2) + 3.75112997 * x - 0.37001483;
        Chromaticity { x, y }
    }
}

fn srgb_gamma(value: f64) -> f64 {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        (1.055 * value).powf(1.0 / SRGB_GAMMA) - 0.055
    }
}

fn xyz_to_srgb(Chromaticity { x, y }: Chromaticity) -> [f64; 3] {
    let z = 1.0 - x - y;
    [
        3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
        -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
        0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
    ]
    .map(|channel| srgb_gamma(channel.clamp(0.0, 1.0)))
}

fn normalize([red, green, blue]: [f64; 3]) -> Whitepoint {
    let max = red.max(green).max(blue);
    Whitepoint {
        red: red / max,
        green: green / max,
        blue: blue / max,
    }
}

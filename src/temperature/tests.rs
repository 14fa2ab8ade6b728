#[cfg(test)]
mod whitepoint_tests {
    use crate::temperature::whitepoint::*;
    use crate::temperature::*;

    fn assert_whitepoint(kelvin: f64, expected: [f64; 3]) {
        let got = whitepoint(Temperature(kelvin)).as_array();
        let close = got
            .iter()
            .zip(expected.iter())
            .all(|(g, e)| (g - e).abs() <= 1e-5);
        assert!(close, "{kelvin}K: expected {expected:?}, got {got:?}");
    }

    #[test]
    fn test_whitepoint_golden_values() {
        assert_whitepoint(50000.0, [0.59187, 0.727766, 1.0]);
        assert_whitepoint(25000.0, [0.59187, 0.727766, 1.0]);
        assert_whitepoint(4000.0, [1.0, 0.823415, 0.597612]);
        assert_whitepoint(2500.0, [1.0, 0.617219, 0.251946]);
        assert_whitepoint(1667.0, [1.0, 0.462962, 0.0]);
        assert_whitepoint(0.0, [1.0, 0.462962, 0.0]);
    }

    #[test]
    fn test_neutral_is_exact() {
        assert_eq!(whitepoint(Temperature(6500.0)), Whitepoint::NEUTRAL);
        assert_eq!(whitepoint(Temperature::DEFAULT_HIGH).as_array(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_whitepoint_is_total() {
        for kelvin in 0..50000 {
            let wp = whitepoint(Temperature(f64::from(kelvin)));
            for channel in wp.as_array() {
                assert!(
                    channel.is_finite() && (0.0..=1.0).contains(&channel),
                    "{kelvin}K produced {wp:?}"
                );
            }
        }
    }

    #[test]
    fn test_brightest_channel_is_one() {
        for kelvin in [1000.0, 2000.0, 3000.0, 5000.0, 8000.0, 12000.0] {
            let max = whitepoint(Temperature(kelvin))
                .as_array()
                .into_iter()
                .fold(f64::MIN, f64::max);
            assert_eq!(max, 1.0, "{kelvin}K");
        }
    }

    #[test]
    fn test_warmer_means_less_blue() {
        let warm = whitepoint(Temperature(3000.0));
        let neutral = whitepoint(Temperature(5000.0));
        assert_eq!(warm.red, 1.0);
        assert!(warm.blue < neutral.blue);
        assert!(warm.green < neutral.green);
    }

    #[test]
    fn test_non_finite_input_does_not_panic() {
        for kelvin in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let _ = whitepoint(Temperature(kelvin));
        }
        assert_eq!(
            whitepoint(Temperature(f64::INFINITY)),
            whitepoint(Temperature(25000.0))
        );
    }

    #[test]
    fn test_blend_is_continuous_at_band_edges() {
        let eps = 1e-6;
        for edge in [2500.0, 4000.0] {
            let below = whitepoint(Temperature(edge - eps)).as_array();
            let at = whitepoint(Temperature(edge)).as_array();
            for (b, a) in below.iter().zip(at.iter()) {
                assert!((b - a).abs() < 1e-3, "discontinuity at {edge}K");
            }
        }
    }

    #[test]
    fn test_planckian_high_band() {
        // Not reached through whitepoint(), which uses the daylight locus there
        let c = planckian_locus(6500.0);
        let d = illuminant_d(6500.0);
        assert!((c.x - d.x).abs() < 0.01, "{c:?} vs {d:?}");
        // The daylight locus sits slightly above the black body curve
        assert!(c.y < d.y);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_illuminant_d_rejects_low_temperatures() {
        let _ = illuminant_d(2000.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_planckian_locus_rejects_low_temperatures() {
        let _ = planckian_locus(1000.0);
    }

    #[test]
    fn test_temperature_display() {
        assert_eq!(Temperature(4000.4).to_string(), "4000K");
        assert_eq!(Temperature::DEFAULT_LOW.to_string(), "4000K");
    }
}

#[cfg(test)]
mod interpolate_tests {
    use crate::solar::{SunCondition, SunTimes, calculate_sun};
    use crate::temperature::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    const LOW: Temperature = Temperature::DEFAULT_LOW;
    const HIGH: Temperature = Temperature::DEFAULT_HIGH;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 20, h, m, 0).unwrap()
    }

    fn normal_day() -> SunTimes<Utc> {
        SunTimes {
            dawn: Some(at(5, 0)),
            sunrise: Some(at(6, 0)),
            sunset: Some(at(18, 0)),
            dusk: Some(at(19, 0)),
            condition: SunCondition::Normal,
        }
    }

    #[test]
    fn test_windows() {
        let sun = normal_day();
        let temp = |h, m| interpolate_day_temperature(&at(h, m), &sun, LOW, HIGH);

        assert_eq!(temp(3, 0), LOW);
        assert_eq!(temp(5, 0), LOW);
        assert_eq!(temp(5, 30), Temperature(5250.0));
        assert_eq!(temp(6, 0), HIGH);
        assert_eq!(temp(12, 0), HIGH);
        assert_eq!(temp(18, 0), HIGH);
        assert_eq!(temp(18, 30), Temperature(5250.0));
        assert_eq!(temp(19, 0), LOW);
        assert_eq!(temp(23, 0), LOW);
    }

    #[test]
    fn test_equal_bounds_short_circuit() {
        let sun = normal_day();
        for h in 0..24 {
            assert_eq!(
                interpolate_day_temperature(&at(h, 15), &sun, HIGH, HIGH),
                HIGH
            );
        }
    }

    #[test]
    fn test_inverted_bounds_ramp_the_other_way() {
        let sun = normal_day();
        let morning = interpolate_day_temperature(&at(5, 15), &sun, HIGH, LOW);
        assert!(morning < HIGH && morning > LOW);
        assert_eq!(interpolate_day_temperature(&at(12, 0), &sun, HIGH, LOW), LOW);
    }

    #[test]
    fn test_missing_dawn_skips_to_ramp_end() {
        let sun = SunTimes {
            dawn: None,
            dusk: None,
            ..normal_day()
        };
        assert_eq!(interpolate_day_temperature(&at(2, 0), &sun, LOW, HIGH), HIGH);
        assert_eq!(interpolate_day_temperature(&at(12, 0), &sun, LOW, HIGH), HIGH);
        assert_eq!(interpolate_day_temperature(&at(18, 30), &sun, LOW, HIGH), LOW);
    }

    #[test]
    fn test_degenerate_window() {
        let sun = SunTimes {
            dawn: Some(at(6, 0)),
            ..normal_day()
        };
        assert_eq!(interpolate_day_temperature(&at(5, 59), &sun, LOW, HIGH), LOW);
        assert_eq!(interpolate_day_temperature(&at(6, 0), &sun, LOW, HIGH), HIGH);
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_polar_night_is_low() {
        let (temp, sun) = calculate_temperature(&noon(2021, 12, 21), 69.65, 0.0, LOW, HIGH);
        assert_eq!(sun.condition, SunCondition::PolarNight);
        assert_eq!(temp, LOW);
    }

    #[test]
    fn test_steady_midnight_sun_is_high() {
        let (temp, sun) = calculate_temperature(&noon(2021, 6, 21), 69.65, 0.0, LOW, HIGH);
        assert_eq!(sun.condition, SunCondition::MidnightSun);
        assert_eq!(temp, HIGH);

        let midnight = Utc.with_ymd_and_hms(2021, 6, 21, 0, 30, 0).unwrap();
        let (temp, _) = calculate_temperature(&midnight, 69.65, 0.0, LOW, HIGH);
        assert_eq!(temp, HIGH);
    }

    #[test]
    fn test_first_midnight_sun_morning_is_high_without_dawn() {
        // Find the first day at 65°N in spring where dawn disappears while
        // the previous day still had a full cycle.
        let latitude = 65.0;
        let mut day = noon(2021, 5, 1);
        let first = loop {
            let today = calculate_sun(&day, latitude, 0.0);
            let yesterday = calculate_sun(&(day - TimeDelta::hours(24)), latitude, 0.0);
            if today.condition == SunCondition::MidnightSun && yesterday.is_normal() {
                break today;
            }
            day += TimeDelta::days(1);
            assert!(day < noon(2021, 7, 1), "no transition day found");
        };

        // Twilight never ends on a white night, so there is no dawn and the
        // morning ramp has no start. The day table then gives the ramp's end
        // temperature, the same value as the steady-state rule.
        assert!(first.dawn.is_none());
        let sunrise = first.sunrise.clone().expect("white night keeps its sunrise");
        let before_sunrise = sunrise - TimeDelta::minutes(1);
        let (temp, sun) = calculate_temperature(&before_sunrise, latitude, 0.0, LOW, HIGH);
        assert_eq!(temp, HIGH);
        assert_eq!(interpolate_day_temperature(&before_sunrise, &sun, LOW, HIGH), HIGH);

        // Past sunrise the steady-state rule applies
        let after_sunrise = sunrise + TimeDelta::hours(1);
        let (temp, _) = calculate_temperature(&after_sunrise, latitude, 0.0, LOW, HIGH);
        assert_eq!(temp, HIGH);
    }

    #[test]
    fn test_normal_day_composition() {
        let (temp, sun) = calculate_temperature(&noon(2021, 3, 20), 51.5, 0.0, LOW, HIGH);
        assert!(sun.is_normal());
        assert_eq!(temp, HIGH);

        let night = Utc.with_ymd_and_hms(2021, 3, 20, 23, 0, 0).unwrap();
        let (temp, _) = calculate_temperature(&night, 51.5, 0.0, LOW, HIGH);
        assert_eq!(temp, LOW);
    }
}

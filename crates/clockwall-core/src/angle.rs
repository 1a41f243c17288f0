//! Conversions from clock values to hand angles.
//!
//! Angles are in radians, measured clockwise from the 12 o'clock position.
//! Inputs are not wrapped: 90 minutes is one and a half turns.

use std::f64::consts::TAU;

/// Minutes in one full turn of the minute hand.
pub const MINUTE_PERIOD: f64 = 60.0;

/// Hours in one full turn of the hour hand.
pub const HOUR_PERIOD: f64 = 12.0;

/// Angle of the minute hand for the given minute value.
pub fn minute_angle(minute: f64) -> f64 {
    (minute / MINUTE_PERIOD) * TAU
}

/// Angle of the hour hand for the given hour value.
pub fn hour_angle(hour: f64) -> f64 {
    (hour / HOUR_PERIOD) * TAU
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_minute_angle_quarters() {
        assert!((minute_angle(0.0)).abs() < EPS);
        assert!((minute_angle(15.0) - PI / 2.0).abs() < EPS);
        assert!((minute_angle(30.0) - PI).abs() < EPS);
        assert!((minute_angle(45.0) - 1.5 * PI).abs() < EPS);
        assert!((minute_angle(60.0) - TAU).abs() < EPS);
    }

    #[test]
    fn test_hour_angle_quarters() {
        assert!((hour_angle(3.0) - PI / 2.0).abs() < EPS);
        assert!((hour_angle(6.0) - PI).abs() < EPS);
        assert!((hour_angle(9.0) - 1.5 * PI).abs() < EPS);
    }

    #[test]
    fn test_angles_match_formula_for_arbitrary_values() {
        for value in [-37.5, -1.0, 0.25, 7.0, 59.9, 240.0, 1e6] {
            assert!((minute_angle(value) - (value / 60.0) * 2.0 * PI).abs() < 1e-9);
            assert!((hour_angle(value) - (value / 12.0) * 2.0 * PI).abs() < 1e-9);
        }
    }

    #[test]
    fn test_values_are_not_wrapped() {
        // 240 minutes is four full turns, not zero.
        assert!((minute_angle(240.0) - 4.0 * TAU).abs() < EPS);
        assert!(hour_angle(-3.0) < 0.0);
    }
}

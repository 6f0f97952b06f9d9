//! Small geometry helpers built on the approximations.
//!
//! `get_angle` returns degrees and `rollover_angle` works in degrees; every
//! other angle in this crate is in radians.

use super::atan::arctan;
use super::consts::{
    DEFAULT_TOLERANCE, DEGREES_PER_RADIAN, FULL_TURN_DEGREES, PI, RANGE_SENTINEL, TAU,
};
use super::error::{MathError, Result};
use super::sqrt::sqrt;
use super::{fabs, wrap_positive};

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees / DEGREES_PER_RADIAN
}

/// Distance between (x1, y1) and (x2, y2).
#[inline]
pub fn distance2(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;

    sqrt(dx * dx + dy * dy, DEFAULT_TOLERANCE)
}

/// Distance between (x1, y1, z1) and (x2, y2, z2).
#[inline]
pub fn distance3(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    let dz = z1 - z2;

    sqrt(dx * dx + dy * dy + dz * dz, DEFAULT_TOLERANCE)
}

/// Position of `num` along `[from, to]`: 0 at `from`, 1 at `to`.
///
/// Unclamped, so values outside the range map outside [0, 1].
#[inline]
pub fn normalize(num: f64, from: f64, to: f64) -> f64 {
    (num - from) / (to - from)
}

#[inline]
fn checked_ratio(function: &'static str, num: f64, from: f64, to: f64) -> Result<f64> {
    if from == to {
        return Err(MathError::DegenerateRange { function, from, to });
    }
    Ok(normalize(num, from, to))
}

#[inline]
pub fn try_normalize(num: f64, from: f64, to: f64) -> Result<f64> {
    checked_ratio("normalize", num, from, to)
}

/// Like `normalize`, but returns -1 when `num` is outside `[from, to]`.
///
/// A -1 here cannot be told apart from a computed ratio of -1 when the
/// bounds are reversed; `try_in_range` reports the two separately.
#[inline]
pub fn in_range(num: f64, from: f64, to: f64) -> f64 {
    if num < from || num > to {
        return RANGE_SENTINEL;
    }
    normalize(num, from, to)
}

#[inline]
pub fn try_in_range(num: f64, from: f64, to: f64) -> Result<f64> {
    if num < from || num > to {
        return Err(MathError::OutOfRange {
            value: num,
            from,
            to,
        });
    }
    checked_ratio("in_range", num, from, to)
}

/// Bearing of (x1, y1) as seen from (x2, y2), in degrees clockwise from +y.
///
/// Points directly above give 0, to the right 90, below 180, left 270.
pub fn get_angle(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x1 == x2 {
        return if y1 >= y2 { 0.0 } else { 180.0 };
    }
    if y1 == y2 {
        return if x1 >= x2 { 90.0 } else { 270.0 };
    }

    let mut radians = arctan(fabs((x1 - x2) / (y1 - y2)));

    if y1 < y2 {
        radians = PI - radians;
    }
    if x1 < x2 {
        radians = TAU - radians;
    }

    to_degrees(radians)
}

/// Folds `angle` (degrees) into [0, 360).
///
/// Pure: callers that kept the angle in place assign the result back.
#[inline]
pub fn rollover_angle(angle: f64) -> f64 {
    wrap_positive(angle, FULL_TURN_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert!((distance2(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-3);
        assert!((distance3(1.0, 2.0, 3.0, 3.0, 5.0, 9.0) - 7.0).abs() < 1e-3);
        assert_eq!(distance2(1.5, -2.0, 1.5, -2.0), 0.0);
    }

    #[test]
    fn normalize_is_unclamped() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(20.0, 0.0, 10.0), 2.0);
        assert_eq!(normalize(-5.0, 0.0, 10.0), -0.5);
        assert_eq!(
            try_normalize(1.0, 2.0, 2.0),
            Err(MathError::DegenerateRange {
                function: "normalize",
                from: 2.0,
                to: 2.0,
            })
        );
    }

    #[test]
    fn in_range_sentinel() {
        assert_eq!(in_range(5.0, 0.0, 10.0), 0.5);
        assert_eq!(in_range(15.0, 0.0, 10.0), -1.0);
        assert_eq!(in_range(-0.1, 0.0, 10.0), -1.0);
        assert_eq!(in_range(10.0, 0.0, 10.0), 1.0);
        assert!(matches!(
            try_in_range(15.0, 0.0, 10.0),
            Err(MathError::OutOfRange { .. })
        ));
        assert_eq!(try_in_range(2.5, 0.0, 10.0), Ok(0.25));
    }

    #[test]
    fn empty_range_names_its_caller() {
        let err = try_in_range(3.0, 3.0, 3.0).unwrap_err();
        assert_eq!(err.function(), "in_range");
        assert_eq!(try_normalize(3.0, 3.0, 3.0).unwrap_err().function(), "normalize");
    }

    #[test]
    fn axis_aligned_bearings() {
        assert_eq!(get_angle(0.0, 1.0, 0.0, 0.0), 0.0);
        assert_eq!(get_angle(0.0, -1.0, 0.0, 0.0), 180.0);
        assert_eq!(get_angle(1.0, 0.0, 0.0, 0.0), 90.0);
        assert_eq!(get_angle(-1.0, 0.0, 0.0, 0.0), 270.0);
        assert_eq!(get_angle(2.0, 2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn diagonal_bearings() {
        let cases = [
            ((1.0, 1.0), 45.0),
            ((1.0, -1.0), 135.0),
            ((-1.0, -1.0), 225.0),
            ((-1.0, 1.0), 315.0),
        ];
        for ((x, y), expected) in cases {
            let got = get_angle(x, y, 0.0, 0.0);
            assert!((got - expected).abs() < 0.5, "get_angle({x}, {y}) = {got}");
        }
    }

    #[test]
    fn rollover() {
        assert_eq!(rollover_angle(370.0), 10.0);
        assert_eq!(rollover_angle(-10.0), 350.0);
        assert_eq!(rollover_angle(360.0), 0.0);
        assert_eq!(rollover_angle(-720.0), 0.0);
        assert_eq!(rollover_angle(1e17), 280.0);
        assert_eq!(rollover_angle(1e20), 280.0);
        for &a in &[0.0, 10.0, 179.5, 359.0] {
            assert_eq!(rollover_angle(a), a);
            assert_eq!(rollover_angle(rollover_angle(a)), rollover_angle(a));
        }
        assert!(rollover_angle(f64::NAN).is_nan());
    }

    #[test]
    fn degree_conversion() {
        assert!((to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((to_radians(90.0) - PI / 2.0).abs() < 1e-12);
    }
}

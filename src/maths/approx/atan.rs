//! arctan(x) via a piecewise series / linear-fit scheme.
//!
//! 1. For |x| > 1 the reciprocal is used and the result is folded back with
//!    atan(x) = +-pi/2 - atan(1/x).
//! 2. On (-0.76, 0.76) the first 5 terms of x - x^3/3 + x^5/5 - ... are used.
//! 3. Past 0.76 the series drifts, so two fitted lines take over:
//!    0.55x - 0.235 below -0.76 and 0.55x + 0.235 above 0.76.
//! 4. Below 0.05 the argument is returned unchanged.
//!
//! Worst case error is about 0.5% (0.0035 rad); most inputs are under 0.05%.

use super::consts::{FRAC_PI_2, PI};
use super::{copysign, fabs};

const PASSTHROUGH: f64 = 0.05;
const SERIES_LIMIT: f64 = 0.76;
const FIT_SLOPE: f64 = 0.55;
const FIT_OFFSET: f64 = 0.235;

#[inline(always)]
fn arctan_kernel(v: f64) -> f64 {
    if fabs(v) < PASSTHROUGH {
        return v;
    }
    if v < -SERIES_LIMIT {
        return FIT_SLOPE * v - FIT_OFFSET;
    }
    if v > SERIES_LIMIT {
        return FIT_SLOPE * v + FIT_OFFSET;
    }

    let v2 = v * v;
    let exp3 = v2 * v;
    let exp5 = exp3 * v2;
    let exp7 = exp5 * v2;
    let exp9 = exp7 * v2;

    v - exp3 / 3.0 + exp5 / 5.0 - exp7 / 7.0 + exp9 / 9.0
}

/// Arctangent of `x`, in radians.
#[inline]
pub fn arctan(x: f64) -> f64 {
    if fabs(x) > 1.0 {
        let r = arctan_kernel(1.0 / x);
        // Every kernel branch keeps the sign of its input, so the sign bit of
        // r is the sign of x, including 1/inf = +-0.
        return copysign(FRAC_PI_2, r) - r;
    }
    arctan_kernel(x)
}

/// Four-quadrant arctangent of `y / x`, in radians on (-pi, pi].
///
/// `arctan2(0, 0)` is 0. For negative `x` the half-plane follows the sign bit
/// of `y`, so `arctan2(-0.0, -1.0)` is `-pi`.
#[inline]
pub fn arctan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        };
    }

    let a = arctan(y / x);
    if x > 0.0 {
        a
    } else if y.is_sign_positive() {
        a + PI
    } else {
        a - PI
    }
}

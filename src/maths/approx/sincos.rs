//! sin(x) and cos(x) via truncated Maclaurin series.
//!
//! The argument is first folded into (-pi, pi] by an exact remainder against
//! the f64 value of 2pi, followed by at most one shift of a period. Inputs
//! already inside that interval pass through untouched, and every finite input
//! lands inside it. For very large |x| the folded angle drifts from the true
//! one, since the f64 period is not exactly 2pi.
//!
//! sin keeps 5 terms (through x^9): max error about 0.007 on (-pi, pi).
//! cos keeps 6 terms (through x^10): max error about 0.002, and results below
//! 1e-6 in magnitude are snapped to zero so the truncated series does not hand
//! back tiny negative values at the zero crossings.

use super::consts::{COS_SNAP, PI, TAU};
use super::{fabs, fmod};

// 3!, 5!, 7!, 9!
const FAC3: f64 = 6.0;
const FAC5: f64 = FAC3 * 4.0 * 5.0;
const FAC7: f64 = FAC5 * 6.0 * 7.0;
const FAC9: f64 = FAC7 * 8.0 * 9.0;

// 2!, 4!, 6!, 8!, 10!
const FAC2: f64 = 2.0;
const FAC4: f64 = FAC2 * 3.0 * 4.0;
const FAC6: f64 = FAC4 * 5.0 * 6.0;
const FAC8: f64 = FAC6 * 7.0 * 8.0;
const FAC10: f64 = FAC8 * 9.0 * 10.0;

/// Maps `x` to the equivalent angle in (-pi, pi]. Non-finite input gives NaN.
#[inline]
pub fn reduce_angle(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x > -PI && x <= PI {
        return x;
    }
    // |r| < TAU, and both shifts below are exact.
    let r = fmod(x, TAU);
    if r > PI {
        r - TAU
    } else if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// Sine series on an already reduced argument.
#[inline(always)]
pub(super) fn sin_kernel(v: f64) -> f64 {
    let v2 = v * v;
    let exp3 = v2 * v;
    let exp5 = exp3 * v2;
    let exp7 = exp5 * v2;
    let exp9 = exp7 * v2;

    v - exp3 / FAC3 + exp5 / FAC5 - exp7 / FAC7 + exp9 / FAC9
}

/// Cosine series on an already reduced argument, with zero snapping.
#[inline(always)]
pub(super) fn cos_kernel(v: f64) -> f64 {
    let exp2 = v * v;
    let exp4 = exp2 * exp2;
    let exp6 = exp4 * exp2;
    let exp8 = exp6 * exp2;
    let exp10 = exp8 * exp2;

    let r = 1.0 - exp2 / FAC2 + exp4 / FAC4 - exp6 / FAC6 + exp8 / FAC8 - exp10 / FAC10;
    if fabs(r) < COS_SNAP {
        0.0
    } else {
        r
    }
}

/// Sine of `x` radians.
#[inline]
pub fn sin(x: f64) -> f64 {
    sin_kernel(reduce_angle(x))
}

/// Cosine of `x` radians.
#[inline]
pub fn cos(x: f64) -> f64 {
    cos_kernel(reduce_angle(x))
}

/// `(sin(x), cos(x))` sharing one reduction.
#[inline]
pub fn sin_cos(x: f64) -> (f64, f64) {
    let v = reduce_angle(x);
    (sin_kernel(v), cos_kernel(v))
}

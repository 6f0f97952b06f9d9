//! tan(x) as sin(x) / cos(x).
//!
//! The tangent series converges too slowly to be useful with a handful of
//! terms, so this reduces the argument once and divides the sine and cosine
//! kernels. At a pole the cosine kernel snaps to zero and the result is a
//! signed infinity taken from the sine.

use super::consts::{INFINITY, NEG_INFINITY, POLE_EPSILON};
use super::fabs;
use super::sincos::{cos_kernel, reduce_angle, sin_kernel};

#[inline]
pub fn tan(x: f64) -> f64 {
    let value = reduce_angle(x);
    let sin_value = sin_kernel(value);
    let cos_value = cos_kernel(value);

    if fabs(cos_value) < POLE_EPSILON {
        return if sin_value > 0.0 { INFINITY } else { NEG_INFINITY };
    }

    sin_value / cos_value
}

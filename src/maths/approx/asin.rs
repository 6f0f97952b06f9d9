//! arcsin(x) through arctan.
//!
//! arcsin(x) = arctan(x / sqrt(1 - x^2)). Series for arcsin itself are poor
//! near |x| = 1, while the arctan fold handles large arguments well, so the
//! error here is only slightly above arctan's.

use super::atan::arctan;
use super::consts::{DEFAULT_TOLERANCE, FRAC_PI_2, SINGULARITY_EPSILON};
use super::diag;
use super::error::{MathError, Result};
use super::sqrt::sqrt;
use super::{copysign, fabs};

#[inline]
pub fn try_arcsin(x: f64) -> Result<f64> {
    if fabs(x) > 1.0 {
        return Err(MathError::OutOfDomain {
            function: "arcsin",
            value: x,
        });
    }

    let y = 1.0 - x * x;
    if y < SINGULARITY_EPSILON {
        return Ok(copysign(FRAC_PI_2, x));
    }

    let root = sqrt(y, DEFAULT_TOLERANCE);
    Ok(arctan(x / root))
}

/// Arcsine of `x` in radians.
///
/// Outside [-1, 1] this logs a diagnostic and returns 0, which is
/// indistinguishable from arcsin(0); use `try_arcsin` to tell them apart.
#[inline]
pub fn arcsin(x: f64) -> f64 {
    try_arcsin(x).unwrap_or_else(diag::recover)
}

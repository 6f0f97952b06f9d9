//! arccos(x) through arctan.
//!
//! arccos(x) = arctan(sqrt(1 - x^2) / x), corrected by +pi when x < 0 since
//! the identity alone lands in the wrong branch there. x = 0 divides by zero
//! and is answered directly with pi/2.

use super::atan::arctan;
use super::consts::{DEFAULT_TOLERANCE, FRAC_PI_2, PI, SINGULARITY_EPSILON};
use super::diag;
use super::error::{MathError, Result};
use super::sqrt::sqrt;
use super::fabs;

#[inline]
pub fn try_arccos(x: f64) -> Result<f64> {
    if fabs(x) > 1.0 {
        return Err(MathError::OutOfDomain {
            function: "arccos",
            value: x,
        });
    }

    if fabs(x) < SINGULARITY_EPSILON {
        return Ok(FRAC_PI_2);
    }

    let root = sqrt(1.0 - x * x, DEFAULT_TOLERANCE);
    let r = arctan(root / x);

    Ok(if r < 0.0 || x < 0.0 { r + PI } else { r })
}

/// Arccosine of `x` in radians, on [0, pi].
///
/// Outside [-1, 1] this logs a diagnostic and returns 0, which is
/// indistinguishable from arccos(1); use `try_arccos` to tell them apart.
#[inline]
pub fn arccos(x: f64) -> f64 {
    try_arccos(x).unwrap_or_else(diag::recover)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_exact() {
        assert_eq!(arccos(0.0), FRAC_PI_2);
        assert_eq!(arccos(-0.0), FRAC_PI_2);
    }

    #[test]
    fn endpoints() {
        assert_eq!(arccos(1.0), 0.0);
        assert_eq!(arccos(-1.0), PI);
    }

    #[test]
    fn negative_inputs_land_in_upper_half() {
        for &x in &[-0.9, -0.5, -0.1] {
            let r = arccos(x);
            assert!(r > FRAC_PI_2 && r <= PI, "arccos({x}) = {r}");
        }
    }

    #[test]
    fn outside_domain() {
        assert_eq!(arccos(-1.01), 0.0);
        assert!(matches!(
            try_arccos(3.0),
            Err(MathError::OutOfDomain {
                function: "arccos",
                ..
            })
        ));
    }
}

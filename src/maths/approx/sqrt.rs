//! sqrt(x) via Newton-Raphson.
//!
//! Solves f(y) = y^2 - x, whose Newton step simplifies to
//! y_{n+1} = 0.5 * (y_n + x / y_n). Iteration starts at y_0 = x and stops once
//! a step moves the estimate by less than the tolerance. After the iteration
//! budget runs out the last estimate is returned as-is: non-convergence is a
//! silent precision loss, not an error. `sqrt_with` reports it for callers that
//! care.

use super::consts::{DEFAULT_TOLERANCE, MAX_SQRT_ITERATIONS};
use super::diag;
use super::error::{MathError, Result};
use super::fabs;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtConfig {
    /// Stop once a step changes the estimate by less than this.
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl SqrtConfig {
    pub const DEFAULT: SqrtConfig = SqrtConfig {
        tolerance: DEFAULT_TOLERANCE,
        max_iterations: MAX_SQRT_ITERATIONS,
    };

    pub const fn with_tolerance(tolerance: f64) -> Self {
        SqrtConfig {
            tolerance,
            max_iterations: MAX_SQRT_ITERATIONS,
        }
    }
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtEstimate {
    pub root: f64,
    /// Newton steps actually taken.
    pub iterations: u32,
    /// False when the budget ran out before the tolerance was met.
    pub converged: bool,
}

#[inline]
fn newton(x: f64, config: &SqrtConfig) -> SqrtEstimate {
    if x == 0.0 || x.is_nan() || x == f64::INFINITY {
        return SqrtEstimate {
            root: x,
            iterations: 0,
            converged: true,
        };
    }

    let mut y = x;
    let mut iterations = 0;
    while iterations < config.max_iterations {
        iterations += 1;
        let y_next = 0.5 * (y + x / y);
        if fabs(y - y_next) < config.tolerance {
            return SqrtEstimate {
                root: y_next,
                iterations,
                converged: true,
            };
        }
        y = y_next;
    }

    SqrtEstimate {
        root: y,
        iterations,
        converged: false,
    }
}

/// Runs the iteration for `x`, reporting how it ended.
///
/// Negative input logs a diagnostic and reports a root of `-1.0` after zero
/// steps, with `converged` false.
#[inline]
pub fn sqrt_with(x: f64, config: &SqrtConfig) -> SqrtEstimate {
    if x < 0.0 {
        return SqrtEstimate {
            root: diag::recover(MathError::NegativeSqrt { value: x }),
            iterations: 0,
            converged: false,
        };
    }
    newton(x, config)
}

#[inline]
pub fn try_sqrt(x: f64, tolerance: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(MathError::NegativeSqrt { value: x });
    }
    Ok(newton(x, &SqrtConfig::with_tolerance(tolerance)).root)
}

/// Square root of `x`, stopping once steps shrink below `tolerance`.
///
/// Negative input logs a diagnostic and returns `-1.0`; treat any negative
/// result as failure.
#[inline]
pub fn sqrt(x: f64, tolerance: f64) -> f64 {
    try_sqrt(x, tolerance).unwrap_or_else(diag::recover)
}

//! Failure taxonomy for the checked (`try_*`) entry points.

use thiserror::Error;

use super::consts::{INVERSE_TRIG_SENTINEL, RANGE_SENTINEL, SQRT_SENTINEL};

pub type Result<T> = core::result::Result<T, MathError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("sqrt called on a negative value ({value})")]
    NegativeSqrt { value: f64 },

    #[error("{function} called on a value outside [-1, 1] ({value})")]
    OutOfDomain { function: &'static str, value: f64 },

    #[error("{value} lies outside [{from}, {to}]")]
    OutOfRange { value: f64, from: f64, to: f64 },

    #[error("{function} given an empty range [{from}, {to}]")]
    DegenerateRange {
        function: &'static str,
        from: f64,
        to: f64,
    },
}

impl MathError {
    /// Name of the public function that rejected its input.
    pub fn function(&self) -> &'static str {
        match self {
            MathError::NegativeSqrt { .. } => "sqrt",
            MathError::OutOfDomain { function, .. }
            | MathError::DegenerateRange { function, .. } => *function,
            MathError::OutOfRange { .. } => "in_range",
        }
    }

    /// The value the unchecked entry point returns in place of this error.
    pub fn sentinel(&self) -> f64 {
        match self {
            MathError::NegativeSqrt { .. } => SQRT_SENTINEL,
            MathError::OutOfDomain { .. } => INVERSE_TRIG_SENTINEL,
            MathError::OutOfRange { .. } => RANGE_SENTINEL,
            MathError::DegenerateRange { .. } => f64::NAN,
        }
    }
}

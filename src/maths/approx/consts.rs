//! Process-wide numeric constants.
//!
//! Everything here is a `const`, so there is no initialization order and no
//! mutation path.

pub const PI: f64 = core::f64::consts::PI;
pub const TAU: f64 = 2.0 * PI;
pub const FRAC_PI_2: f64 = PI / 2.0;

/// Default stopping tolerance for the square root iteration.
pub const DEFAULT_TOLERANCE: f64 = 0.001;
/// Newton-Raphson pass budget for the square root.
pub const MAX_SQRT_ITERATIONS: u32 = 25;

pub const INFINITY: f64 = f64::INFINITY;
pub const NEG_INFINITY: f64 = f64::NEG_INFINITY;

/// Cosine results smaller than this are returned as exactly zero.
pub const COS_SNAP: f64 = 1e-6;
/// |cos| below this is treated as a tangent pole.
pub const POLE_EPSILON: f64 = COS_SNAP;
/// Denominators below this in the inverse trig identities are treated as zero.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Returned by `sqrt` for negative input.
pub const SQRT_SENTINEL: f64 = -1.0;
/// Returned by `arcsin`/`arccos` outside [-1, 1].
pub const INVERSE_TRIG_SENTINEL: f64 = 0.0;
/// Returned by `in_range` when the value lies outside the range.
pub const RANGE_SENTINEL: f64 = -1.0;

pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;
pub const FULL_TURN_DEGREES: f64 = 360.0;

//! Approximate math routines and the shared bit helpers they lean on.
//!
//! Everything here is built from first principles: Newton-Raphson for the
//! square root, truncated Maclaurin series for sine and cosine, and a
//! piecewise series/linear-fit scheme for arctangent. The remaining functions
//! are identities layered on top. Results are "good enough, fast enough"
//! rather than correctly rounded; each module states its error bound.

pub mod consts;
mod diag;
mod error;

mod acos;
mod asin;
mod atan;
mod geometry;
mod narrow;
mod sincos;
mod sqrt;
mod tan;

pub use acos::{arccos, try_arccos};
pub use asin::{arcsin, try_arcsin};
pub use atan::{arctan, arctan2};
pub use error::{MathError, Result};
pub use geometry::{
    distance2, distance3, get_angle, in_range, normalize, rollover_angle, to_degrees, to_radians,
    try_in_range, try_normalize,
};
pub use narrow::{
    arccosf, arcsinf, arctan2f, arctanf, cosf, distance2f, distance3f, get_anglef, in_rangef,
    normalizef, rollover_anglef, sinf, sqrtf, tanf,
};
pub use sincos::{cos, reduce_angle, sin, sin_cos};
pub use sqrt::{sqrt, sqrt_with, try_sqrt, SqrtConfig, SqrtEstimate};
pub use tan::tan;

// ========= bit helpers =========

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn fabs(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & !SIGN_MASK)
}

#[inline(always)]
fn copysign(x: f64, y: f64) -> f64 {
    f64_from_bits((f64_to_bits(x) & !SIGN_MASK) | (f64_to_bits(y) & SIGN_MASK))
}

const EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;
const IMPLICIT_BIT: u64 = 0x0010_0000_0000_0000u64;
const SIG_BITS: u32 = 52;

/// Integer significand (implicit bit included) and biased exponent minus one.
#[inline(always)]
fn split_significand(bits: u64) -> (u64, u32) {
    let sat = bits.saturating_sub(IMPLICIT_BIT);
    (bits - (sat & EXP_MASK), (sat >> SIG_BITS) as u32)
}

/// `(sig * 2^e) mod div` on integers.
#[inline(always)]
fn shift_reduce(mut sig: u64, mut e: u32, div: u64) -> u64 {
    if sig >= div {
        sig %= div;
    }
    while e > 63 {
        sig = (((sig as u128) << 63) % (div as u128)) as u64;
        e -= 63;
    }
    if e > 0 {
        sig = (((sig as u128) << e) % (div as u128)) as u64;
    }
    sig
}

/// Remainder of `x / y` truncated toward zero, carrying the sign of `x`.
///
/// Computed on the integer significands, so it is exact for every finite `x`
/// no matter how many multiples of `y` it spans. NaN when `x` is not finite or
/// `y` is zero or not finite.
#[inline]
fn fmod(x: f64, y: f64) -> f64 {
    let sx = f64_to_bits(x) & SIGN_MASK;
    let ux = f64_to_bits(x) & !SIGN_MASK;
    let uy = f64_to_bits(y) & !SIGN_MASK;

    if (ux & EXP_MASK) == EXP_MASK || uy == 0 || (uy & EXP_MASK) == EXP_MASK {
        return f64::NAN;
    }
    if ux < uy {
        return x;
    }

    let (num, ex) = split_significand(ux);
    let (div, ey) = split_significand(uy);
    let rem = shift_reduce(num, ex - ey, div);
    if rem == 0 {
        return f64_from_bits(sx);
    }

    let ilog = 63 - rem.leading_zeros();
    let shift = ey.min(SIG_BITS - ilog);
    let bits = (rem << shift) + (((ey - shift) as u64) << SIG_BITS);
    f64_from_bits(sx | bits)
}

/// Folds `x` into `[0, period)` on top of the exact remainder.
///
/// Non-finite input yields NaN. Lifting a negative remainder rounds once, and
/// a remainder within half an ulp of zero rounds up to `period`; that case is
/// pulled back to zero.
#[inline]
fn wrap_positive(x: f64, period: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let r = fmod(x, period);
    if r < 0.0 {
        let lifted = r + period;
        if lifted >= period {
            0.0
        } else {
            lifted
        }
    } else if r == 0.0 {
        0.0
    } else {
        r
    }
}

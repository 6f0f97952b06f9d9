//! Single-precision entry points.
//!
//! Each one widens its arguments to f64, runs the canonical implementation and
//! rounds the result back, so f32 callers get the same answers as f64 callers
//! up to the final cast.

use super::{
    arccos, arcsin, arctan, arctan2, cos, distance2, distance3, get_angle, in_range, normalize,
    rollover_angle, sin, sqrt, tan,
};

#[inline]
pub fn sqrtf(x: f32, tolerance: f32) -> f32 {
    sqrt(x as f64, tolerance as f64) as f32
}

#[inline]
pub fn sinf(x: f32) -> f32 {
    sin(x as f64) as f32
}

#[inline]
pub fn cosf(x: f32) -> f32 {
    cos(x as f64) as f32
}

#[inline]
pub fn tanf(x: f32) -> f32 {
    tan(x as f64) as f32
}

#[inline]
pub fn arctanf(x: f32) -> f32 {
    arctan(x as f64) as f32
}

#[inline]
pub fn arctan2f(y: f32, x: f32) -> f32 {
    arctan2(y as f64, x as f64) as f32
}

#[inline]
pub fn arcsinf(x: f32) -> f32 {
    arcsin(x as f64) as f32
}

#[inline]
pub fn arccosf(x: f32) -> f32 {
    arccos(x as f64) as f32
}

#[inline]
pub fn distance2f(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    distance2(x1 as f64, y1 as f64, x2 as f64, y2 as f64) as f32
}

#[inline]
pub fn distance3f(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    distance3(x1 as f64, y1 as f64, z1 as f64, x2 as f64, y2 as f64, z2 as f64) as f32
}

#[inline]
pub fn normalizef(num: f32, from: f32, to: f32) -> f32 {
    normalize(num as f64, from as f64, to as f64) as f32
}

#[inline]
pub fn in_rangef(num: f32, from: f32, to: f32) -> f32 {
    in_range(num as f64, from as f64, to as f64) as f32
}

#[inline]
pub fn get_anglef(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    get_angle(x1 as f64, y1 as f64, x2 as f64, y2 as f64) as f32
}

#[inline]
pub fn rollover_anglef(angle: f32) -> f32 {
    let r = rollover_angle(angle as f64) as f32;
    // 359.99999999 rounds up to 360.0f32.
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

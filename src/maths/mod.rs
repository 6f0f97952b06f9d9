//! Freestanding numeric routines.

pub mod approx;

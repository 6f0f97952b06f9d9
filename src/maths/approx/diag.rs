//! Diagnostic sink for domain violations.
//!
//! Events go to whatever `tracing` subscriber the host installs. With the
//! `tracing` feature disabled the report is a no-op.

use super::error::MathError;

#[cfg(feature = "tracing")]
pub(crate) const TARGET: &str = "approxmath";

#[inline]
pub(crate) fn report(err: &MathError) {
    #[cfg(feature = "tracing")]
    tracing::error!(target: TARGET, function = err.function(), "{}", err);

    #[cfg(not(feature = "tracing"))]
    let _ = err;
}

/// Logs `err` and hands back the legacy sentinel for it.
#[inline]
pub(crate) fn recover(err: MathError) -> f64 {
    report(&err);
    err.sentinel()
}

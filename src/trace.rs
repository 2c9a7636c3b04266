//! Parse and soft-set tracing. No-ops unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Trace a flag occurrence recorded during parsing.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_flag(name: &str, value: &str, occurrence: usize) {
    debug!(
        target: "argtable::parse",
        flag = name,
        value = value,
        occurrence = occurrence,
        "recorded {}",
        name
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_flag(_name: &str, _value: &str, _occurrence: usize) {}

/// Trace a token that was kept as a remaining (non-flag) argument.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_remaining(token: &str) {
    debug!(
        target: "argtable::parse",
        token = token,
        "skipped non-flag {:?}",
        token
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_remaining(_token: &str) {}

/// Trace a soft set, whether or not it took effect.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_soft_set(name: &str, value: &str, applied: bool) {
    trace!(
        target: "argtable::soft_set",
        flag = name,
        value = value,
        applied = applied,
        "soft set {}",
        name
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_soft_set(_name: &str, _value: &str, _applied: bool) {}

//! Structured tracing for encode/decode operations.
//!
//! Events are compiled only with the `tracing` feature; without it every
//! helper is an inline no-op. Only names that actually changed are reported,
//! and the name itself is never logged since it may not be printable.

use crate::policy::EncodePolicy;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const ENCODE_TARGET: &str = "safename::encode";

/// Traces a name that was rewritten by [`EncodePolicy::encode`].
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_encoded(policy: EncodePolicy, input_len: usize, output_len: usize) {
    tracing::trace!(
        target: ENCODE_TARGET,
        policy = %policy,
        input_len = input_len,
        output_len = output_len,
        "name_encoded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_encoded(_policy: EncodePolicy, _input_len: usize, _output_len: usize) {}

/// Traces a name that was rewritten by [`EncodePolicy::decode`].
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_decoded(policy: EncodePolicy, input_len: usize, output_len: usize) {
    tracing::trace!(
        target: ENCODE_TARGET,
        policy = %policy,
        input_len = input_len,
        output_len = output_len,
        "name_decoded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_decoded(_policy: EncodePolicy, _input_len: usize, _output_len: usize) {}

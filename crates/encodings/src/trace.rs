//! Structured tracing for registry lookups.
//!
//! Compiled only with the `tracing` feature; otherwise inline no-ops.

use encoder::EncodePolicy;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const REGISTRY_TARGET: &str = "safename::registry";

/// Traces a profile lookup and whether it matched.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_lookup(name: &str, policy: Option<EncodePolicy>) {
    match policy {
        Some(policy) => tracing::debug!(
            target: REGISTRY_TARGET,
            name = %name,
            policy = %policy,
            "encoding_lookup_hit"
        ),
        None => tracing::debug!(target: REGISTRY_TARGET, name = %name, "encoding_lookup_miss"),
    }
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_lookup(_name: &str, _policy: Option<EncodePolicy>) {}

/// Traces a name that resolved as a rule list instead of a profile.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rule_list(name: &str, policy: EncodePolicy) {
    tracing::debug!(
        target: REGISTRY_TARGET,
        name = %name,
        policy = %policy,
        "encoding_rule_list"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_rule_list(_name: &str, _policy: EncodePolicy) {}

use encoder::ParseRuleFlagError;
use thiserror::Error;

use crate::registry::names;

/// Error returned by [`resolve`](crate::resolve) when a name is neither a
/// known profile nor a valid rule list.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error(
    "unknown encoding {name:?}; expected one of {} or a comma-separated rule list",
    names().join(", ")
)]
pub struct UnknownEncodingError {
    name: Box<str>,
    #[source]
    rule: Option<ParseRuleFlagError>,
}

impl UnknownEncodingError {
    pub(crate) fn new(name: impl Into<Box<str>>, rule: Option<ParseRuleFlagError>) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Returns the name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

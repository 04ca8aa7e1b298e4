use thiserror::Error;

/// Error returned when a rule name in a flag list is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised encoding rule: {identifier:?}")]
pub struct ParseRuleFlagError {
    identifier: Box<str>,
}

impl ParseRuleFlagError {
    pub(crate) fn new(identifier: impl Into<Box<str>>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Returns the identifier that failed to parse.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

//! Error types.

use thiserror::Error;

use crate::record::AssertInfo;

/// Owned form of a failed check.
///
/// Used as the panic payload of [`PanicHandler`](crate::PanicHandler) and as
/// the element type of [`CollectingHandler`](crate::CollectingHandler).
/// Displays exactly like [`AssertInfo::render`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{}", self.as_info())]
pub struct AssertionFailure {
    /// Source file of the check.
    pub file: String,
    /// Source line of the check.
    pub line: u32,
    /// Literal condition text.
    pub predicate: String,
    /// Call-site message, empty if none.
    pub message: String,
}

impl AssertionFailure {
    /// Borrow as an [`AssertInfo`].
    pub fn as_info(&self) -> AssertInfo<'_> {
        AssertInfo::new(&self.file, self.line, &self.predicate, &self.message)
    }
}

impl From<AssertInfo<'_>> for AssertionFailure {
    fn from(info: AssertInfo<'_>) -> Self {
        Self {
            file: info.file().to_owned(),
            line: info.line(),
            predicate: info.predicate().to_owned(),
            message: info.message().to_owned(),
        }
    }
}

/// A string did not name a known [`FailureAction`](crate::FailureAction).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown failure action {value:?} (expected one of: {expected})")]
pub struct ParseActionError {
    /// The rejected input.
    pub value: String,
    /// Accepted spellings, comma separated.
    pub expected: &'static str,
}

//! The diagnostic record passed to failure handlers.

use std::fmt;

use crate::error::AssertionFailure;

/// Context of a single failed runtime check.
///
/// Built by the code that detected the failure, rendered or inspected by the
/// active handler, then discarded. All fields borrow from the caller, so a
/// handler that wants to keep a record around should call
/// [`to_failure`](Self::to_failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssertInfo<'a> {
    file: &'a str,
    line: u32,
    predicate: &'a str,
    message: &'a str,
}

impl<'a> AssertInfo<'a> {
    /// Create a record for a failed check.
    pub const fn new(file: &'a str, line: u32, predicate: &'a str, message: &'a str) -> Self {
        Self {
            file,
            line,
            predicate,
            message,
        }
    }

    /// Source file the check lives in.
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Source line of the check.
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Literal text of the condition that evaluated to false.
    pub const fn predicate(&self) -> &'a str {
        self.predicate
    }

    /// Extra explanation supplied at the call site, empty if none.
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Render as `<file>:<line>: ASSERT '<predicate>' failed. <message>`.
    ///
    /// Inputs are copied verbatim; nothing is escaped or truncated.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Copy into an owned [`AssertionFailure`].
    pub fn to_failure(&self) -> AssertionFailure {
        AssertionFailure::from(*self)
    }
}

impl fmt::Display for AssertInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: ASSERT '{}' failed. {}",
            self.file, self.line, self.predicate, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_vector_index() {
        let info = AssertInfo::new("vector.h", 42, "i < size()", "index out of range");
        assert_eq!(
            info.render(),
            "vector.h:42: ASSERT 'i < size()' failed. index out of range"
        );
    }

    #[test]
    fn test_render_empty_fields() {
        let info = AssertInfo::new("", 0, "", "");
        assert_eq!(info.render(), ":0: ASSERT '' failed. ");
    }

    #[test]
    fn test_render_passes_control_chars_through() {
        let info = AssertInfo::new("a\tb.rs", u32::MAX, "x\n'y'", "\0bell\x07");
        assert_eq!(
            info.render(),
            "a\tb.rs:4294967295: ASSERT 'x\n'y'' failed. \0bell\x07"
        );
    }

    #[test]
    fn test_display_matches_render() {
        let info = AssertInfo::new("map.rs", 7, "!self.is_empty()", "");
        assert_eq!(format!("{}", info), info.render());
    }

    #[test]
    fn test_to_failure_keeps_fields() {
        let info = AssertInfo::new("tree.rs", 19, "node.is_some()", "dangling");
        let failure = info.to_failure();
        assert_eq!(failure.file, "tree.rs");
        assert_eq!(failure.line, 19);
        assert_eq!(failure.predicate, "node.is_some()");
        assert_eq!(failure.message, "dangling");
        assert_eq!(failure.as_info(), info);
    }
}

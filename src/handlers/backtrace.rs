//! Abort with a captured backtrace.
//!
//! Only compiled when the `debug` feature is enabled.

use std::io::Write;

use super::DebugHandler;
use crate::record::AssertInfo;

/// Like [`AbortHandler`](crate::AbortHandler), but prints the stack of the
/// failing thread after the diagnostic line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktraceHandler;

impl BacktraceHandler {
    /// Render the record followed by the current backtrace.
    pub fn report_text(info: &AssertInfo<'_>) -> String {
        let bt = ::backtrace::Backtrace::new();
        format!("{}\n{:?}\n", info, bt)
    }
}

impl DebugHandler for BacktraceHandler {
    fn handle(&self, info: &AssertInfo<'_>) {
        let text = Self::report_text(info);
        let _ = std::io::stderr().lock().write_all(text.as_bytes());
        std::process::abort()
    }
}

//! Non-fatal handlers that report and return.

use std::io::Write;

use super::DebugHandler;
use crate::record::AssertInfo;

/// Writes the rendered record to stderr and lets execution continue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarnHandler;

impl DebugHandler for WarnHandler {
    fn handle(&self, info: &AssertInfo<'_>) {
        let mut line = info.render();
        line.push('\n');
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }
}

/// Routes failures to the `log` facade at error level.
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogHandler {
    target: &'static str,
}

#[cfg(feature = "log")]
impl LogHandler {
    /// Log under the `failhook` target.
    pub const fn new() -> Self {
        Self { target: "failhook" }
    }

    /// Log under a custom target.
    pub const fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    /// The log target in use.
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

#[cfg(feature = "log")]
impl Default for LogHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "log")]
impl DebugHandler for LogHandler {
    fn handle(&self, info: &AssertInfo<'_>) {
        log::error!(target: self.target, "{}", info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_handler_returns() {
        WarnHandler.handle(&AssertInfo::new("warn.rs", 3, "ok", "continuing"));
    }

    #[cfg(feature = "log")]
    #[test]
    fn test_log_handler_returns() {
        let handler = LogHandler::with_target("tests");
        assert_eq!(handler.target(), "tests");
        handler.handle(&AssertInfo::new("log.rs", 5, "ok", "logged"));
        assert_eq!(LogHandler::default().target(), "failhook");
    }
}

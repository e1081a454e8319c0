//! Default handler: print and abort.

use std::io::Write;

use super::DebugHandler;
use crate::record::AssertInfo;

/// Write the rendered record plus a newline to stderr, then abort.
///
/// Exactly one write, no unwinding, no cleanup. This is what the global
/// registry runs until something else is installed.
#[cold]
#[inline(never)]
pub fn abort_debug_function(info: &AssertInfo<'_>) -> ! {
    let mut line = info.render();
    line.push('\n');
    let _ = std::io::stderr().lock().write_all(line.as_bytes());
    std::process::abort()
}

/// [`DebugHandler`] form of [`abort_debug_function`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbortHandler;

impl DebugHandler for AbortHandler {
    fn handle(&self, info: &AssertInfo<'_>) {
        abort_debug_function(info)
    }
}

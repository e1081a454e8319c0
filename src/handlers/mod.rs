//! Failure handler strategies.
//!
//! A handler decides what a failed check means for the process: the default
//! [`AbortHandler`] prints and aborts, the others turn a failure into a panic,
//! a warning, a log record, or a queued value for later inspection.
//!
//! ## Writing a handler
//!
//! ```rust
//! use failhook::{AssertInfo, DebugHandler};
//!
//! struct Quiet;
//!
//! impl DebugHandler for Quiet {
//!     fn handle(&self, _info: &AssertInfo<'_>) {}
//! }
//! ```
//!
//! Plain functions work too, see [`DebugFunction`].

mod abort;
mod collect;
mod emit;
mod panic;

#[cfg(feature = "debug")]
mod backtrace;

use std::sync::Arc;

use crate::record::AssertInfo;

pub use abort::{abort_debug_function, AbortHandler};
pub use collect::{CollectingHandler, CountingHandler};
pub use emit::WarnHandler;
pub use panic::PanicHandler;

#[cfg(feature = "log")]
pub use emit::LogHandler;

#[cfg(feature = "debug")]
pub use self::backtrace::BacktraceHandler;

/// Function-pointer form of a handler.
///
/// A handler may return; callers of [`report`](crate::report) must tolerate
/// that. The default one never does.
pub type DebugFunction = fn(&AssertInfo<'_>);

/// Reacts to a failed runtime check.
///
/// Invoked synchronously on the thread that detected the failure. No lock is
/// held during the call, so a handler may report further failures or install
/// a different handler.
pub trait DebugHandler: Send + Sync {
    /// Handle one failure.
    fn handle(&self, info: &AssertInfo<'_>);
}

impl DebugHandler for DebugFunction {
    fn handle(&self, info: &AssertInfo<'_>) {
        self(info)
    }
}

impl<H: DebugHandler + ?Sized> DebugHandler for &H {
    fn handle(&self, info: &AssertInfo<'_>) {
        (**self).handle(info)
    }
}

impl<H: DebugHandler + ?Sized> DebugHandler for Box<H> {
    fn handle(&self, info: &AssertInfo<'_>) {
        (**self).handle(info)
    }
}

impl<H: DebugHandler + ?Sized> DebugHandler for Arc<H> {
    fn handle(&self, info: &AssertInfo<'_>) {
        (**self).handle(info)
    }
}

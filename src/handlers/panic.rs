//! Turn failures into unwinding panics.

use super::DebugHandler;
use crate::record::AssertInfo;

/// Panics with an [`AssertionFailure`](crate::AssertionFailure) payload.
///
/// Lets test suites and fault-tolerant hosts catch a failed check with
/// [`std::panic::catch_unwind`] and downcast the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanicHandler;

impl DebugHandler for PanicHandler {
    fn handle(&self, info: &AssertInfo<'_>) {
        std::panic::panic_any(info.to_failure())
    }
}

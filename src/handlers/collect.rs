//! Handlers that keep state about the failures they see.

use crossbeam_queue::SegQueue;

use super::DebugHandler;
use crate::error::AssertionFailure;
use crate::record::AssertInfo;
use crate::sync::atomics::AtomicCounter;

/// Queues every failure instead of terminating.
///
/// Safe to share across threads; pushes are lock-free.
#[derive(Debug, Default)]
pub struct CollectingHandler {
    failures: SegQueue<AssertionFailure>,
}

impl CollectingHandler {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far, oldest first.
    pub fn drain(&self) -> Vec<AssertionFailure> {
        let mut out = Vec::with_capacity(self.failures.len());
        while let Some(failure) = self.failures.pop() {
            out.push(failure);
        }
        out
    }

    /// Remove and return the oldest collected failure.
    pub fn pop(&self) -> Option<AssertionFailure> {
        self.failures.pop()
    }

    /// Number of failures waiting to be drained.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// True if nothing has been collected since the last drain.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl DebugHandler for CollectingHandler {
    fn handle(&self, info: &AssertInfo<'_>) {
        self.failures.push(info.to_failure());
    }
}

/// Counts failures, then delegates to an inner handler.
pub struct CountingHandler<H> {
    inner: H,
    count: AtomicCounter,
}

impl<H: DebugHandler> CountingHandler<H> {
    /// Wrap `inner`.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            count: AtomicCounter::new(0),
        }
    }

    /// Failures seen since creation or the last reset.
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Zero the count, returning the old value.
    pub fn reset(&self) -> u64 {
        self.count.reset()
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: DebugHandler> DebugHandler for CountingHandler<H> {
    fn handle(&self, info: &AssertInfo<'_>) {
        // Counted first: the inner handler may not return.
        self.count.increment();
        self.inner.handle(info);
    }
}

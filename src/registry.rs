//! The handler slot and the process-wide instance of it.
//!
//! A [`HandlerRegistry`] holds exactly one active handler. It starts out with
//! [`abort_debug_function`] and every `set_*` call replaces the active handler
//! wholesale; earlier handlers are dropped and cannot be retrieved.
//!
//! The global registry is a `static` with a `const` initializer, so it is
//! ready before any thread can observe it. Replacement is synchronized by a
//! mutex that is held only while the active handler is swapped or cloned out;
//! the handler itself always runs unlocked.

use std::fmt;
use std::sync::Arc;

use crate::handlers::{abort_debug_function, DebugFunction, DebugHandler};
use crate::record::AssertInfo;
use crate::sync::mutex::Mutex;

#[derive(Clone)]
enum Active {
    Default,
    Function(DebugFunction),
    Handler(Arc<dyn DebugHandler>),
}

impl Active {
    fn handle(&self, info: &AssertInfo<'_>) {
        match self {
            Active::Default => abort_debug_function(info),
            Active::Function(f) => f(info),
            Active::Handler(h) => h.handle(info),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Active::Default => "default",
            Active::Function(_) => "function",
            Active::Handler(_) => "handler",
        }
    }
}

/// A slot holding the active failure handler.
///
/// Most code uses the process-wide instance through the free functions
/// ([`report`], [`set_handler`], ...). A registry can also be created locally
/// and passed around as a [`DebugHandler`].
pub struct HandlerRegistry {
    slot: Mutex<Active>,
}

impl HandlerRegistry {
    /// Create a registry whose active handler is [`abort_debug_function`].
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Active::Default),
        }
    }

    /// Install a plain function. Always returns `true`.
    pub fn set_debug_function(&self, f: DebugFunction) -> bool {
        self.replace(Active::Function(f))
    }

    /// Install a handler value. Always returns `true`.
    pub fn set_handler<H: DebugHandler + 'static>(&self, handler: H) -> bool {
        self.replace(Active::Handler(Arc::new(handler)))
    }

    /// Install a handler the caller keeps a reference to. Always returns `true`.
    pub fn set_shared_handler(&self, handler: Arc<dyn DebugHandler>) -> bool {
        self.replace(Active::Handler(handler))
    }

    /// True while the initial abort handler is still active.
    pub fn is_default(&self) -> bool {
        matches!(*self.slot.lock(), Active::Default)
    }

    /// Invoke the active handler with `info` on the calling thread.
    ///
    /// Returns only if the active handler returns.
    pub fn report(&self, info: &AssertInfo<'_>) {
        let active = (*self.slot.lock()).clone();
        active.handle(info);
    }

    fn replace(&self, next: Active) -> bool {
        #[cfg(feature = "log")]
        let installed = next.describe();

        let previous = std::mem::replace(&mut *self.slot.lock(), next);

        #[cfg(feature = "log")]
        log::debug!(
            target: "failhook",
            "failure handler replaced ({} -> {})",
            previous.describe(),
            installed
        );

        // Dropped outside the lock, a handler's Drop may touch the registry.
        drop(previous);
        true
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("active", &self.slot.lock().describe())
            .finish()
    }
}

impl DebugHandler for HandlerRegistry {
    fn handle(&self, info: &AssertInfo<'_>) {
        self.report(info)
    }
}

static GLOBAL: HandlerRegistry = HandlerRegistry::new();

/// The process-wide registry.
pub fn global() -> &'static HandlerRegistry {
    &GLOBAL
}

/// Install a plain function in the global registry. Always returns `true`.
///
/// Intended for startup; threads already reporting failures may still run
/// the previous handler once.
pub fn set_debug_function(f: DebugFunction) -> bool {
    GLOBAL.set_debug_function(f)
}

/// Install a handler value in the global registry. Always returns `true`.
pub fn set_handler<H: DebugHandler + 'static>(handler: H) -> bool {
    GLOBAL.set_handler(handler)
}

/// Install a shared handler in the global registry. Always returns `true`.
pub fn set_shared_handler(handler: Arc<dyn DebugHandler>) -> bool {
    GLOBAL.set_shared_handler(handler)
}

/// Invoke the global registry's active handler.
///
/// With nothing installed this prints the record to stderr and aborts.
pub fn report(info: &AssertInfo<'_>) {
    GLOBAL.report(info)
}

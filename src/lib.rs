//! # failhook
//!
//! Pluggable, process-wide handler for failed runtime checks.
//!
//! When an internal invariant is violated, the detecting code builds an
//! [`AssertInfo`] (file, line, predicate text, message) and passes it to the
//! active handler. Unless the application installs something else, that
//! handler writes
//!
//! ```text
//! <file>:<line>: ASSERT '<predicate>' failed. <message>
//! ```
//!
//! to stderr and aborts the process.
//!
//! ## Features
//!
//! - Compile-time initialized global registry, no startup race
//! - Function-pointer and trait-object handlers
//! - Built-in abort, panic, warn, collect and count handlers
//! - Handler injection: any [`DebugHandler`], including a local
//!   [`HandlerRegistry`], can be passed to call sites
//! - `FAILHOOK_ACTION` environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use failhook::{fh_assert, PanicHandler};
//!
//! failhook::set_handler(PanicHandler);
//!
//! let len = 3;
//! let result = std::panic::catch_unwind(|| {
//!     fh_assert!(len > 5, "need at least {} slots", 5);
//! });
//! assert!(result.is_err());
//! ```
//!
//! ## Thread safety
//!
//! Installing a handler is synchronized, but meant for startup. A thread that
//! is already reporting when the handler is replaced may still run the old
//! one. Handlers run on the reporting thread with no lock held.

mod macros;

pub mod config;
pub mod error;
pub mod handlers;
pub mod record;
pub mod registry;

mod sync;

pub use config::{init_from_env, FailureAction, ACTION_ENV_VAR};
pub use error::{AssertionFailure, ParseActionError};
pub use handlers::{
    abort_debug_function, AbortHandler, CollectingHandler, CountingHandler, DebugFunction,
    DebugHandler, PanicHandler, WarnHandler,
};
pub use record::AssertInfo;
pub use registry::{
    global, report, set_debug_function, set_handler, set_shared_handler, HandlerRegistry,
};

#[cfg(feature = "log")]
pub use handlers::LogHandler;

#[cfg(feature = "debug")]
pub use handlers::BacktraceHandler;

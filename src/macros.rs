//! Check macros.
//!
//! These build an [`AssertInfo`](crate::AssertInfo) from the call site and
//! hand it to a handler when the condition is false.

/// Check a condition, reporting to the global registry if it is false.
///
/// The message is optional and takes `format!` arguments.
///
/// # Example
///
/// ```rust,ignore
/// fh_assert!(i < self.len(), "index {} out of range", i);
/// ```
#[macro_export]
macro_rules! fh_assert {
    ($cond:expr $(,)?) => {
        $crate::fh_assert_with!($crate::global(), $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::fh_assert_with!($crate::global(), $cond, $($arg)+)
    };
}

/// Check a condition, reporting to an explicitly supplied handler.
///
/// # Example
///
/// ```rust,ignore
/// let collector = CollectingHandler::new();
/// fh_assert_with!(&collector, queue.is_empty(), "queue not drained");
/// ```
#[macro_export]
macro_rules! fh_assert_with {
    ($handler:expr, $cond:expr $(,)?) => {{
        if !$cond {
            $crate::DebugHandler::handle(
                &$handler,
                &$crate::AssertInfo::new(file!(), line!(), stringify!($cond), ""),
            );
        }
    }};
    ($handler:expr, $cond:expr, $($arg:tt)+) => {{
        if !$cond {
            let message = format!($($arg)+);
            $crate::DebugHandler::handle(
                &$handler,
                &$crate::AssertInfo::new(file!(), line!(), stringify!($cond), &message),
            );
        }
    }};
}

/// [`fh_assert!`] that is only checked when the calling crate has
/// `debug_assertions` on.
#[macro_export]
macro_rules! fh_debug_assert {
    ($($arg:tt)*) => {{
        if cfg!(debug_assertions) {
            $crate::fh_assert!($($arg)*);
        }
    }};
}

//! Selecting a built-in handler by name.
//!
//! Lets an embedding application pick how failed checks behave without
//! writing a handler:
//! - Abort: print and abort (the default)
//! - Panic: unwind with an `AssertionFailure` payload
//! - Warn: print and continue
//! - Log: send to the `log` facade and continue (`log` feature)

use std::env::VarError;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseActionError;
use crate::handlers::{AbortHandler, PanicHandler, WarnHandler};
use crate::registry::{global, HandlerRegistry};

/// Environment variable read by [`init_from_env`].
pub const ACTION_ENV_VAR: &str = "FAILHOOK_ACTION";

#[cfg(feature = "log")]
const EXPECTED: &str = "abort, panic, warn, log";
#[cfg(not(feature = "log"))]
const EXPECTED: &str = "abort, panic, warn";

/// A built-in reaction to a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureAction {
    /// [`AbortHandler`].
    Abort,
    /// [`PanicHandler`].
    Panic,
    /// [`WarnHandler`].
    Warn,
    /// [`LogHandler`](crate::LogHandler).
    #[cfg(feature = "log")]
    Log,
}

impl FailureAction {
    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureAction::Abort => "abort",
            FailureAction::Panic => "panic",
            FailureAction::Warn => "warn",
            #[cfg(feature = "log")]
            FailureAction::Log => "log",
        }
    }

    /// Install the matching handler in `registry`. Always returns `true`.
    pub fn install(self, registry: &HandlerRegistry) -> bool {
        match self {
            FailureAction::Abort => registry.set_handler(AbortHandler),
            FailureAction::Panic => registry.set_handler(PanicHandler),
            FailureAction::Warn => registry.set_handler(WarnHandler),
            #[cfg(feature = "log")]
            FailureAction::Log => registry.set_handler(crate::handlers::LogHandler::new()),
        }
    }
}

impl fmt::Display for FailureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(FailureAction::Abort),
            "panic" | "unwind" => Ok(FailureAction::Panic),
            "warn" | "stderr" => Ok(FailureAction::Warn),
            #[cfg(feature = "log")]
            "log" => Ok(FailureAction::Log),
            _ => Err(ParseActionError {
                value: s.to_owned(),
                expected: EXPECTED,
            }),
        }
    }
}

/// Parse an optional action string and install it in `registry`.
///
/// `None` leaves the registry untouched. So does a parse error.
pub fn apply_action(
    registry: &HandlerRegistry,
    value: Option<&str>,
) -> Result<Option<FailureAction>, ParseActionError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let action: FailureAction = value.parse()?;
    action.install(registry);
    Ok(Some(action))
}

/// Configure the global registry from the `FAILHOOK_ACTION` environment
/// variable.
///
/// Returns the installed action, or `Ok(None)` if the variable is unset. A
/// value that is not unicode or names no action is an error and leaves the
/// registry untouched.
pub fn init_from_env() -> Result<Option<FailureAction>, ParseActionError> {
    apply_var(global(), std::env::var(ACTION_ENV_VAR))
}

fn apply_var(
    registry: &HandlerRegistry,
    var: Result<String, VarError>,
) -> Result<Option<FailureAction>, ParseActionError> {
    match var {
        Ok(value) => apply_action(registry, Some(&value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ParseActionError {
            value: raw.to_string_lossy().into_owned(),
            expected: EXPECTED,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("abort".parse(), Ok(FailureAction::Abort));
        assert_eq!(" Panic ".parse(), Ok(FailureAction::Panic));
        assert_eq!("UNWIND".parse(), Ok(FailureAction::Panic));
        assert_eq!("stderr".parse(), Ok(FailureAction::Warn));
    }

    #[test]
    fn test_parse_unknown_action() {
        let err = "explode".parse::<FailureAction>().unwrap_err();
        assert_eq!(err.value, "explode");
        assert_eq!(err.expected, EXPECTED);
    }

    #[test]
    fn test_display_round_trips() {
        for action in [FailureAction::Abort, FailureAction::Panic, FailureAction::Warn] {
            assert_eq!(action.to_string().parse(), Ok(action));
        }
    }

    #[test]
    fn test_apply_action_installs() {
        let registry = HandlerRegistry::new();
        assert_eq!(apply_action(&registry, None), Ok(None));
        assert!(registry.is_default());

        assert_eq!(
            apply_action(&registry, Some("warn")),
            Ok(Some(FailureAction::Warn))
        );
        assert!(!registry.is_default());
    }

    #[test]
    fn test_apply_invalid_action_leaves_registry() {
        let registry = HandlerRegistry::new();
        assert!(apply_action(&registry, Some("nope")).is_err());
        assert!(registry.is_default());
    }

    #[test]
    fn test_apply_var_unset_is_none() {
        let registry = HandlerRegistry::new();
        assert_eq!(apply_var(&registry, Err(VarError::NotPresent)), Ok(None));
        assert!(registry.is_default());
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_var_not_unicode_is_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let registry = HandlerRegistry::new();
        let raw = OsString::from_vec(b"pan\xffic".to_vec());
        let err = apply_var(&registry, Err(VarError::NotUnicode(raw))).unwrap_err();

        assert_eq!(err.value, "pan\u{fffd}ic");
        assert_eq!(err.expected, EXPECTED);
        assert!(registry.is_default());
    }

    #[cfg(feature = "log")]
    #[test]
    fn test_parse_log_action() {
        assert_eq!("log".parse(), Ok(FailureAction::Log));
    }
}

//! Pass/fail signal for operations without a success value.

use crate::core::{AccessError, Unit};
use crate::outcome::{BoxError, CapturedError, MessageError, Outcome};
use stillwater::{NonEmptyVec, Validation};

/// `Void` on success, or a captured error.
///
/// # Example
///
/// ```rust
/// use tagged::VoidOrError;
///
/// fn remove_stale(path: &str) -> VoidOrError {
///     VoidOrError::catching(|| {
///         if path.ends_with(".lock") {
///             Ok(())
///         } else {
///             Err(format!("refusing to remove {path}"))
///         }
///     })
/// }
///
/// assert!(remove_stale("build.lock").is_void());
/// let failed = remove_stale("Cargo.toml");
/// assert_eq!(failed.error_message().unwrap(), "refusing to remove Cargo.toml");
/// assert!(failed.throw_if_error().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VoidOrError {
    #[default]
    Void,
    Error(CapturedError),
}

impl VoidOrError {
    pub fn void() -> Self {
        Self::Void
    }

    /// Capture `error` at the caller's location.
    #[track_caller]
    pub fn fail<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Error(CapturedError::new(error))
    }

    #[track_caller]
    pub fn fail_message(message: impl Into<String>) -> Self {
        Self::fail(MessageError::new(message))
    }

    pub fn from_captured(error: CapturedError) -> Self {
        Self::Error(error)
    }

    #[track_caller]
    pub fn from_result<E>(result: Result<(), E>) -> Self
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(()) => Self::Void,
            Err(error) => Self::fail(error),
        }
    }

    #[track_caller]
    pub fn catching<E, F>(f: F) -> Self
    where
        E: Into<BoxError>,
        F: FnOnce() -> Result<(), E>,
    {
        Self::from_result(f())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Result<&CapturedError, AccessError> {
        match self {
            Self::Void => Err(AccessError::wrong_variant("VoidOrError", "Error", "Void")),
            Self::Error(error) => Ok(error),
        }
    }

    pub fn error_message(&self) -> Result<String, AccessError> {
        self.error().map(CapturedError::message)
    }

    /// Replay the captured error, if any, as the same capture.
    pub fn throw_if_error(&self) -> Result<(), CapturedError> {
        match self {
            Self::Void => Ok(()),
            Self::Error(error) => Err(error.clone()),
        }
    }

    pub fn into_result(self) -> Result<(), CapturedError> {
        match self {
            Self::Void => Ok(()),
            Self::Error(error) => Err(error),
        }
    }

    /// Run the next step only if this one passed.
    pub fn and_then<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Void => next(),
            error => error,
        }
    }

    pub fn on_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&CapturedError),
    {
        if let Self::Error(error) = &self {
            f(error);
        }
        self
    }

    pub fn into_outcome(self) -> Outcome<Unit> {
        match self {
            Self::Void => Outcome::success(Unit),
            Self::Error(error) => Outcome::from_captured(error),
        }
    }

    pub fn into_validation(self) -> Validation<(), NonEmptyVec<CapturedError>> {
        match self {
            Self::Void => Validation::success(()),
            Self::Error(error) => Validation::fail(error),
        }
    }
}

impl From<Outcome<Unit>> for VoidOrError {
    fn from(outcome: Outcome<Unit>) -> Self {
        match outcome {
            Outcome::Success(_) => Self::Void,
            Outcome::Failure(error) => Self::Error(error),
        }
    }
}

impl<E> From<Result<(), E>> for VoidOrError
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn from(result: Result<(), E>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    #[test]
    fn throw_if_error_replays_same_capture() {
        let line = line!() + 1;
        let signal =
            VoidOrError::fail(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        let stored = signal.error().unwrap().clone();

        let thrown = signal.throw_if_error().unwrap_err();
        assert!(thrown.same_capture(&stored));
        assert_eq!(thrown.location().line(), line);
        assert_eq!(thrown.to_string(), "locked");
    }

    #[test]
    fn void_has_no_error() {
        let signal = VoidOrError::void();
        assert!(signal.throw_if_error().is_ok());
        assert_eq!(
            signal.error().unwrap_err(),
            AccessError::wrong_variant("VoidOrError", "Error", "Void")
        );
    }

    #[test]
    fn and_then_stops_at_first_error() {
        let calls = Cell::new(0);
        let result = VoidOrError::fail_message("first").and_then(|| {
            calls.set(calls.get() + 1);
            VoidOrError::Void
        });
        assert_eq!(result.error_message(), Ok("first".to_string()));
        assert_eq!(calls.get(), 0);

        let passed = VoidOrError::Void.and_then(|| VoidOrError::fail_message("second"));
        assert_eq!(passed.error_message(), Ok("second".to_string()));
    }

    #[test]
    fn outcome_conversion_keeps_capture() {
        let signal = VoidOrError::fail_message("x");
        let stored = signal.error().unwrap().clone();
        let outcome = signal.into_outcome();
        assert!(outcome.error().unwrap().same_capture(&stored));

        let back = VoidOrError::from(outcome);
        assert_eq!(back, VoidOrError::from_captured(stored));
        assert_eq!(VoidOrError::from(Outcome::success(Unit)), VoidOrError::Void);
    }

    #[test]
    fn on_error_observes_only_errors() {
        let seen = Cell::new(false);
        VoidOrError::Void.on_error(|_| seen.set(true));
        assert!(!seen.get());
        VoidOrError::fail_message("x").on_error(|_| seen.set(true));
        assert!(seen.get());
    }

    #[test]
    fn from_result_converts_both_arms() {
        let ok: VoidOrError = Ok::<(), io::Error>(()).into();
        assert!(ok.is_void());

        let err: VoidOrError = Err::<(), _>("disk full").into();
        assert_eq!(err.error_message(), Ok("disk full".to_string()));
    }
}

//! Success value or captured error.
//!
//! `Outcome<T>` short-circuits exactly like `Maybe`, but its failing side
//! carries a [`CapturedError`]. Combinators pass that capture along without
//! inspecting it; only explicit extraction (`value_or_throw`, `into_result`)
//! hands it back, and it hands back the same capture.

mod captured;
mod error;

pub use captured::{BoxError, CapturedError};
pub use error::{MessageError, PanicError};

use crate::core::combinators;
use crate::core::{AccessError, Monad};
use std::panic::UnwindSafe;
use stillwater::{NonEmptyVec, Validation};

/// A success value or a captured error.
///
/// Equality compares success values by `PartialEq` and failures by capture
/// identity (see [`CapturedError`]).
///
/// # Example
///
/// ```rust
/// use tagged::Outcome;
///
/// fn parse(text: &str) -> Outcome<i32> {
///     Outcome::catching(|| text.parse::<i32>())
/// }
///
/// let doubled = parse("21").map(|n| n * 2);
/// assert_eq!(doubled.value(), Ok(&42));
///
/// let failed = parse("x").map(|n| n * 2);
/// assert!(failed.is_failure());
/// let err = failed.value_or_throw().unwrap_err();
/// assert!(err.is::<std::num::ParseIntError>());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(CapturedError),
}

/// Alternate name for [`Outcome`].
pub type Output<T> = Outcome<T>;

/// Kind marker naming the `Outcome` family for the [`Monad`] combinators.
#[derive(Clone, Copy, Debug)]
pub enum OutcomeKind {}

impl Monad for OutcomeKind {
    type Of<T> = Outcome<T>;

    fn pure<T>(value: T) -> Outcome<T> {
        Outcome::Success(value)
    }

    fn bind<T, U, F>(m: Outcome<T>, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        m.bind(f)
    }

    fn map<T, U, F>(m: Outcome<T>, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        m.map(f)
    }
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Capture `error` at the caller's location.
    #[track_caller]
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Failure(CapturedError::new(error))
    }

    /// Fail with a [`MessageError`] carrying `message`.
    #[track_caller]
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::failure(MessageError::new(message))
    }

    /// Wrap an existing capture without re-capturing it.
    pub fn from_captured(error: CapturedError) -> Self {
        Self::Failure(error)
    }

    #[track_caller]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Run a fallible computation and hold its error as data.
    #[track_caller]
    pub fn catching<E, F>(f: F) -> Self
    where
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E>,
    {
        Self::from_result(f())
    }

    /// Run `f`, turning a panic into `Failure(PanicError)`.
    #[track_caller]
    pub fn catch_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match std::panic::catch_unwind(f) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::failure(PanicError::from_payload(&*payload)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value; accessing it on `Failure` is an error.
    pub fn value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(AccessError::wrong_variant("Outcome", "Success", "Failure")),
        }
    }

    /// The captured error; accessing it on `Success` is an error.
    pub fn error(&self) -> Result<&CapturedError, AccessError> {
        match self {
            Self::Success(_) => Err(AccessError::wrong_variant("Outcome", "Failure", "Success")),
            Self::Failure(error) => Ok(error),
        }
    }

    pub fn error_message(&self) -> Result<String, AccessError> {
        self.error().map(CapturedError::message)
    }

    /// The success value, or the original capture as `Err`.
    ///
    /// The returned error is the same capture that was stored: same error
    /// object, location, backtrace and timestamp.
    pub fn value_or_throw(self) -> Result<T, CapturedError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    pub fn into_result(self) -> Result<T, CapturedError> {
        self.value_or_throw()
    }

    pub fn value_or(self, fallback: T) -> T {
        self.value_or_else(|_| fallback)
    }

    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(CapturedError) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Demote a success that fails `predicate` to `Failure(MessageError)`.
    #[track_caller]
    pub fn ensure<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::failure_message(message)
                }
            }
            failure => failure,
        }
    }

    pub fn then<U>(self, next: Outcome<U>) -> Outcome<U> {
        combinators::then::<OutcomeKind, _, _>(self, next)
    }

    pub fn select_many<U, V, F, P>(self, f: F, project: P) -> Outcome<V>
    where
        F: FnOnce(&T) -> Outcome<U>,
        P: FnOnce(T, U) -> V,
    {
        combinators::select_many::<OutcomeKind, _, _, _, _, _>(self, f, project)
    }

    /// Combine two successes; otherwise the first failure, left to right.
    pub fn zip<B, U, F>(self, b: Outcome<B>, f: F) -> Outcome<U>
    where
        F: FnOnce(T, B) -> U,
    {
        combinators::zip2::<OutcomeKind, _, _, _, _>(self, b, f)
    }

    pub fn zip3<B, C, U, F>(self, b: Outcome<B>, c: Outcome<C>, f: F) -> Outcome<U>
    where
        F: FnOnce(T, B, C) -> U,
    {
        combinators::zip3::<OutcomeKind, _, _, _, _, _>(self, b, c, f)
    }

    pub fn zip4<B, C, D, U, F>(
        self,
        b: Outcome<B>,
        c: Outcome<C>,
        d: Outcome<D>,
        f: F,
    ) -> Outcome<U>
    where
        F: FnOnce(T, B, C, D) -> U,
    {
        combinators::zip4::<OutcomeKind, _, _, _, _, _, _>(self, b, c, d, f)
    }

    pub fn zip5<B, C, D, E, U, F>(
        self,
        b: Outcome<B>,
        c: Outcome<C>,
        d: Outcome<D>,
        e: Outcome<E>,
        f: F,
    ) -> Outcome<U>
    where
        F: FnOnce(T, B, C, D, E) -> U,
    {
        combinators::zip5::<OutcomeKind, _, _, _, _, _, _, _>(self, b, c, d, e, f)
    }

    /// Run one of two side effects and return `self` unchanged.
    pub fn run<S, E>(self, on_success: S, on_failure: E) -> Self
    where
        S: FnOnce(&T),
        E: FnOnce(&CapturedError),
    {
        match &self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
        self
    }

    pub fn on_success<S>(self, f: S) -> Self
    where
        S: FnOnce(&T),
    {
        self.run(f, |_| {})
    }

    pub fn on_failure<E>(self, f: E) -> Self
    where
        E: FnOnce(&CapturedError),
    {
        self.run(|_| {}, f)
    }

    /// Lift into a `Validation` so several outcomes can accumulate failures.
    pub fn into_validation(self) -> Validation<T, NonEmptyVec<CapturedError>> {
        match self {
            Self::Success(value) => Validation::success(value),
            Self::Failure(error) => Validation::fail(error),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    pub fn flatten(self) -> Outcome<T> {
        combinators::flatten::<OutcomeKind, _>(self)
    }
}

//! Accumulate many signals into one `Validation`.
//!
//! Where `VoidOrBreak::for_each` stops at the first problem, these helpers
//! look at every signal and report all of them together.

use super::{VoidOrError, VoidOrWarning};
use crate::core::NonEmptyText;
use crate::outcome::CapturedError;
use stillwater::{NonEmptyVec, Validation};

/// Collect every warning. Succeeds only if all signals are `Void`.
///
/// # Example
///
/// ```rust
/// use stillwater::Validation;
/// use tagged::signal::collect_warnings;
/// use tagged::VoidOrWarning;
///
/// let signals = vec![
///     VoidOrWarning::warn("unused import").unwrap(),
///     VoidOrWarning::Void,
///     VoidOrWarning::warn("shadowed binding").unwrap(),
/// ];
///
/// match collect_warnings(signals) {
///     Validation::Failure(warnings) => assert_eq!(warnings.len(), 2),
///     Validation::Success(()) => unreachable!(),
/// }
/// ```
pub fn collect_warnings<I>(signals: I) -> Validation<(), NonEmptyVec<NonEmptyText>>
where
    I: IntoIterator<Item = VoidOrWarning>,
{
    let checks: Vec<Validation<(), NonEmptyVec<NonEmptyText>>> = signals
        .into_iter()
        .map(VoidOrWarning::into_validation)
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Collect every captured error. Succeeds only if all signals are `Void`.
pub fn collect_errors<I>(signals: I) -> Validation<(), NonEmptyVec<CapturedError>>
where
    I: IntoIterator<Item = VoidOrError>,
{
    let checks: Vec<Validation<(), NonEmptyVec<CapturedError>>> = signals
        .into_iter()
        .map(VoidOrError::into_validation)
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

//! Cooperative early exit for sequential processing.

use crate::core::{AccessError, ArgumentError, NonEmptyText};
use serde::{Deserialize, Serialize};

/// `Void` to keep going, or `Break` with the reason to stop.
///
/// Replaces exception-based loop interruption: a step returns `Break` and
/// the driver stops iterating.
///
/// # Example
///
/// ```rust
/// use tagged::VoidOrBreak;
///
/// let mut processed = Vec::new();
/// let signal = VoidOrBreak::for_each([3, 8, 120, 4], |size| {
///     if size > 100 {
///         return VoidOrBreak::break_with(format!("item of size {size} exceeds limit"))
///             .unwrap_or_default();
///     }
///     processed.push(size);
///     VoidOrBreak::Void
/// });
///
/// assert!(signal.is_break());
/// assert_eq!(signal.reason().unwrap(), "item of size 120 exceeds limit");
/// assert_eq!(processed, vec![3, 8]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoidOrBreak {
    #[default]
    Void,
    Break(NonEmptyText),
}

impl VoidOrBreak {
    /// A `Break` carrying `reason`, which must not be blank.
    pub fn break_with(reason: impl Into<String>) -> Result<Self, ArgumentError> {
        NonEmptyText::new(reason, "reason").map(Self::Break)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break(_))
    }

    /// Why processing stopped; accessing it on `Void` is an error.
    pub fn reason(&self) -> Result<&str, AccessError> {
        match self {
            Self::Void => Err(AccessError::wrong_variant("VoidOrBreak", "Break", "Void")),
            Self::Break(reason) => Ok(reason.as_str()),
        }
    }

    /// Run the next step only if this one did not break.
    pub fn and_then<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Void => next(),
            stop => stop,
        }
    }

    /// Apply `step` to each item in order, stopping at the first `Break`.
    ///
    /// Items after the breaking one are never pulled from the iterator.
    pub fn for_each<I, F>(items: I, mut step: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Self,
    {
        for item in items {
            let signal = step(item);
            if signal.is_break() {
                return signal;
            }
        }
        Self::Void
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_reports_is_break() {
        let signal = VoidOrBreak::break_with("stop").unwrap();
        assert!(signal.is_break());
        assert!(!signal.is_void());
        assert_eq!(signal.reason(), Ok("stop"));
    }

    #[test]
    fn void_is_not_break() {
        let signal = VoidOrBreak::Void;
        assert!(!signal.is_break());
        assert_eq!(
            signal.reason(),
            Err(AccessError::wrong_variant("VoidOrBreak", "Break", "Void"))
        );
    }

    #[test]
    fn blank_reason_is_rejected_at_construction() {
        assert_eq!(
            VoidOrBreak::break_with(""),
            Err(ArgumentError::Empty { name: "reason" })
        );
    }

    #[test]
    fn for_each_stops_pulling_after_break() {
        let mut pulled = 0;
        let items = (1..=10).inspect(|_| pulled += 1);
        let signal = VoidOrBreak::for_each(items, |n| {
            if n == 3 {
                VoidOrBreak::break_with("three").unwrap()
            } else {
                VoidOrBreak::Void
            }
        });
        assert_eq!(signal.reason(), Ok("three"));
        assert_eq!(pulled, 3);
    }

    #[test]
    fn for_each_over_empty_is_void() {
        let signal = VoidOrBreak::for_each(Vec::<i32>::new(), |_| VoidOrBreak::Void);
        assert!(signal.is_void());
    }

    #[test]
    fn and_then_skips_after_break() {
        let signal = VoidOrBreak::break_with("early")
            .unwrap()
            .and_then(|| VoidOrBreak::break_with("late").unwrap());
        assert_eq!(signal.reason(), Ok("early"));
    }

    #[test]
    fn break_serializes_correctly() {
        let signal = VoidOrBreak::break_with("halt").unwrap();
        let json = serde_json::to_string(&signal).unwrap();
        let deserialized: VoidOrBreak = serde_json::from_str(&json).unwrap();
        assert_eq!(signal, deserialized);

        let blank: Result<VoidOrBreak, _> = serde_json::from_str(r#"{"Break":" "}"#);
        assert!(blank.is_err());
    }
}

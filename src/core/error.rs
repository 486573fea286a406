//! Errors raised by misuse of the value types themselves.
//!
//! These are programmer errors, not represented failures: they are never
//! stored inside an `Outcome` or `VoidOrError`.

use thiserror::Error;

/// A variant-specific accessor was called on the wrong variant.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("{type_name}: expected the {expected} variant, found {found}")]
    WrongVariant {
        type_name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl AccessError {
    pub(crate) fn wrong_variant(
        type_name: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::WrongVariant {
            type_name,
            expected,
            found,
        }
    }
}

/// A factory rejected its argument.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

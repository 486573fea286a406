//! Non-fatal annotation for operations without a success value.

use super::void_or_error::VoidOrError;
use crate::core::{AccessError, ArgumentError, NonEmptyText};
use serde::{Deserialize, Serialize};
use stillwater::{NonEmptyVec, Validation};

/// `Void`, or a `Warning` the caller may choose to escalate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoidOrWarning {
    #[default]
    Void,
    Warning(NonEmptyText),
}

impl VoidOrWarning {
    /// A `Warning` carrying `message`, which must not be blank.
    pub fn warn(message: impl Into<String>) -> Result<Self, ArgumentError> {
        NonEmptyText::new(message, "message").map(Self::Warning)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    pub fn message(&self) -> Result<&str, AccessError> {
        match self {
            Self::Void => Err(AccessError::wrong_variant("VoidOrWarning", "Warning", "Void")),
            Self::Warning(message) => Ok(message.as_str()),
        }
    }

    /// Treat a warning as a failure.
    #[track_caller]
    pub fn escalate(self) -> VoidOrError {
        match self {
            Self::Void => VoidOrError::Void,
            Self::Warning(message) => VoidOrError::fail_message(message.into_string()),
        }
    }

    pub fn into_validation(self) -> Validation<(), NonEmptyVec<NonEmptyText>> {
        match self {
            Self::Void => Validation::success(()),
            Self::Warning(message) => Validation::fail(message),
        }
    }
}

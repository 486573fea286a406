//! Error types created by the outcome factories themselves.

use thiserror::Error;

/// Failure built from a plain message (`Outcome::failure_message`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct MessageError {
    pub message: String,
}

impl MessageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A panic turned into data by `Outcome::catch_unwind`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("panicked: {message}")]
pub struct PanicError {
    pub message: String,
}

impl PanicError {
    pub(crate) fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self { message }
    }
}

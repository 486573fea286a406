//! Validated non-empty text payload for `Break` reasons and `Warning` messages.

use super::error::ArgumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A string that is guaranteed to contain at least one non-whitespace character.
///
/// # Example
///
/// ```rust
/// use tagged::core::NonEmptyText;
///
/// let reason = NonEmptyText::new("quota exhausted", "reason").unwrap();
/// assert_eq!(reason.as_str(), "quota exhausted");
///
/// assert!(NonEmptyText::new("   ", "reason").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Validate `text`; `name` identifies the argument in the error.
    pub fn new(text: impl Into<String>, name: &'static str) -> Result<Self, ArgumentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ArgumentError::Empty { name });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NonEmptyText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = ArgumentError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text, "text")
    }
}

impl From<NonEmptyText> for String {
    fn from(text: NonEmptyText) -> Self {
        text.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_text() {
        let text = NonEmptyText::new("stop", "reason").unwrap();
        assert_eq!(&*text, "stop");
        assert_eq!(text.to_string(), "stop");
    }

    #[test]
    fn rejects_empty_and_blank_text() {
        assert_eq!(
            NonEmptyText::new("", "reason"),
            Err(ArgumentError::Empty { name: "reason" })
        );
        assert!(NonEmptyText::new(" \t\n", "message").is_err());
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: NonEmptyText = serde_json::from_str("\"halt\"").unwrap();
        assert_eq!(ok.as_str(), "halt");

        let blank: Result<NonEmptyText, _> = serde_json::from_str("\"\"");
        assert!(blank.is_err());
    }
}

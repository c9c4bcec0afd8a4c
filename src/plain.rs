// src/plain.rs

//! Errors identified solely by their message text.

use std::borrow::Cow;
use std::fmt;

/// A simple string-backed error.
///
/// Two plain errors are equal iff their messages are equal, so a constant
/// declared once and an error built later from the same text compare equal:
///
/// ```
/// use errset::PlainError;
///
/// const NOT_FOUND: PlainError = PlainError::from_static("not found");
/// assert_eq!(NOT_FOUND, PlainError::new("not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlainError {
    message: Cow<'static, str>,
}

impl PlainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Cow::Owned(message.into()),
        }
    }

    /// Build a plain error in a `const` context.
    pub const fn from_static(message: &'static str) -> Self {
        Self {
            message: Cow::Borrowed(message),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PlainError {}

impl From<&str> for PlainError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for PlainError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

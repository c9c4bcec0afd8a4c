// src/collection.rs

//! Batch error collection.
//!
//! [`Errors`] gathers every failure of a batch operation instead of stopping
//! at the first one, then reports them as a single block:
//!
//! ```
//! use errset::{ErrorKind, Errors};
//!
//! let missing = ErrorKind::new("missing field %s");
//!
//! let mut errs = Errors::new();
//! errs.add("empty input");
//! errs.add_error(missing.instantiate(&[&"name"]));
//!
//! assert!(errs.contains(&missing));
//! assert_eq!(errs.render(), "empty input\nmissing field name\n");
//! ```

use std::fmt;

use tracing::trace;

use crate::format::display;
use crate::plain::PlainError;
use crate::value::ErrorValue;

/// Ordered, append-only list of error values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    errors: Vec<ErrorValue>,
}

impl Errors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append a plain error built from `message`.
    pub fn add(&mut self, message: impl Into<String>) {
        self.add_error(PlainError::new(message));
    }

    /// Append any error value as-is.
    pub fn add_error(&mut self, err: impl Into<ErrorValue>) {
        self.errors.push(err.into());
        trace!(count = self.errors.len(), "error added to collection");
    }

    /// Membership test.
    ///
    /// A kind probe matches any instance of that kind. Every other probe
    /// matches by [`ErrorValue`] equality, so a plain probe never finds a
    /// kind instance even if the texts are identical.
    pub fn contains(&self, probe: impl Into<ErrorValue>) -> bool {
        let probe = probe.into();
        match &probe {
            ErrorValue::Kind(kind) => self.errors.iter().any(|err| kind.is_kind_of(err)),
            _ => self.errors.iter().any(|err| *err == probe),
        }
    }

    /// Number of entries, duplicates included.
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorValue> {
        self.errors.iter()
    }

    /// Every message followed by a newline, in insertion order.
    ///
    /// Never panics: an element whose `Display` fails contributes the text it
    /// wrote before failing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for err in &self.errors {
            out.push_str(&display(err));
            out.push('\n');
        }
        out
    }

    /// `Ok(())` when nothing was collected, otherwise the collection itself.
    pub fn into_result(self) -> std::result::Result<(), Errors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.errors {
            writeln!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl<E: Into<ErrorValue>> Extend<E> for Errors {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for err in iter {
            self.add_error(err);
        }
    }
}

impl<E: Into<ErrorValue>> FromIterator<E> for Errors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut errors = Errors::new();
        errors.extend(iter);
        errors
    }
}

impl IntoIterator for Errors {
    type Item = ErrorValue;
    type IntoIter = std::vec::IntoIter<ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ErrorValue;
    type IntoIter = std::slice::Iter<'a, ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// src/kind.rs

//! Parametrised "kind" errors.
//!
//! An [`ErrorKind`] is a template such as `"missing field %s"`. Calling
//! [`ErrorKind::instantiate`] produces an [`ErrorKindInstance`] carrying the
//! resolved message (`"missing field name"`) plus a handle back to the kind,
//! so callers can ask "is this a missing-field error?" without looking at the
//! message text.
//!
//! Kind identity is by reference. Two kinds built separately from the same
//! pattern are *different* kinds; clones of a kind are the same kind. Declare
//! each kind once (a `static LazyLock`, or a [`Catalog`](crate::Catalog)) and
//! share it. [`ErrorKind::same_pattern`] is available when pattern-text
//! comparison is really what you want.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::format::format_pattern;
use crate::plain::PlainError;
use crate::value::ErrorValue;

/// An error template identified by reference.
#[derive(Clone)]
pub struct ErrorKind {
    pattern: Arc<str>,
}

impl ErrorKind {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Arc::from(pattern.into()),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// A bare kind renders as its pattern.
    pub fn message(&self) -> &str {
        &self.pattern
    }

    /// Bind `values` positionally into the pattern.
    ///
    /// Arity and verb mismatches are not errors; see [`crate::format`] for
    /// how they render.
    pub fn instantiate(&self, values: &[&dyn fmt::Display]) -> ErrorKindInstance {
        ErrorKindInstance {
            kind: self.clone(),
            message: format_pattern(&self.pattern, values),
        }
    }

    /// True iff `candidate` is an instance produced by this kind.
    pub fn is_kind_of(&self, candidate: &ErrorValue) -> bool {
        match candidate {
            ErrorValue::Instance(instance) => self.is_instance(instance),
            ErrorValue::Plain(_)
            | ErrorValue::Kind(_)
            | ErrorValue::Collection(_)
            | ErrorValue::Other(_) => false,
        }
    }

    pub fn is_instance(&self, instance: &ErrorKindInstance) -> bool {
        instance.kind == *self
    }

    /// Compare pattern text, ignoring identity.
    pub fn same_pattern(&self, other: &ErrorKind) -> bool {
        self.pattern == other.pattern
    }

    fn identity(&self) -> *const u8 {
        Arc::as_ptr(&self.pattern) as *const u8
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pattern, &other.pattern)
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorKind")
            .field("pattern", &&*self.pattern)
            .field("id", &self.identity())
            .finish()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl std::error::Error for ErrorKind {}

/// A concrete occurrence of an [`ErrorKind`] with its resolved message.
#[derive(Debug, Clone)]
pub struct ErrorKindInstance {
    kind: ErrorKind,
    message: String,
}

impl ErrorKindInstance {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Instances compare by originating kind, not by message.
impl PartialEq for ErrorKindInstance {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for ErrorKindInstance {}

impl PartialEq<ErrorKind> for ErrorKindInstance {
    fn eq(&self, other: &ErrorKind) -> bool {
        other.is_instance(self)
    }
}

impl PartialEq<ErrorKindInstance> for ErrorKind {
    fn eq(&self, other: &ErrorKindInstance) -> bool {
        self.is_instance(other)
    }
}

/// Typed comparison against a plain error looks at message text only.
impl PartialEq<PlainError> for ErrorKindInstance {
    fn eq(&self, other: &PlainError) -> bool {
        self.message == other.message()
    }
}

impl fmt::Display for ErrorKindInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorKindInstance {}

// src/value.rs

//! The closed set of error shapes the collection and helpers understand.

use std::fmt;
use std::sync::Arc;

use crate::collection::Errors;
use crate::format::display;
use crate::kind::{ErrorKind, ErrorKindInstance};
use crate::plain::PlainError;

/// Any error value `errset` can store or compare against.
///
/// Equality is variant-strict: a plain error never equals a kind instance,
/// even when their messages match.
///
/// | variants             | equal when                          |
/// |----------------------|-------------------------------------|
/// | `Plain` / `Plain`    | same message text                   |
/// | `Kind` / `Kind`      | same kind (reference identity)      |
/// | `Instance`/`Instance`| same originating kind               |
/// | `Collection` pair    | element-wise equal, same order      |
/// | `Other` / `Other`    | same allocation                     |
#[derive(Debug, Clone)]
pub enum ErrorValue {
    Plain(PlainError),
    Kind(ErrorKind),
    Instance(ErrorKindInstance),
    Collection(Errors),
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl ErrorValue {
    /// Wrap an arbitrary error type.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ErrorValue::Other(Arc::new(err))
    }

    /// Rendered message. Collections render their full block.
    ///
    /// A failing `Display` yields whatever it wrote before failing.
    pub fn message(&self) -> String {
        display(self)
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorValue::Plain(a), ErrorValue::Plain(b)) => a == b,
            (ErrorValue::Kind(a), ErrorValue::Kind(b)) => a == b,
            (ErrorValue::Instance(a), ErrorValue::Instance(b)) => a == b,
            (ErrorValue::Collection(a), ErrorValue::Collection(b)) => a == b,
            (ErrorValue::Other(a), ErrorValue::Other(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::Plain(e) => fmt::Display::fmt(e, f),
            ErrorValue::Kind(e) => fmt::Display::fmt(e, f),
            ErrorValue::Instance(e) => fmt::Display::fmt(e, f),
            ErrorValue::Collection(e) => fmt::Display::fmt(e, f),
            ErrorValue::Other(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for ErrorValue {}

impl From<PlainError> for ErrorValue {
    fn from(e: PlainError) -> Self {
        ErrorValue::Plain(e)
    }
}

impl From<&PlainError> for ErrorValue {
    fn from(e: &PlainError) -> Self {
        ErrorValue::Plain(e.clone())
    }
}

impl From<ErrorKind> for ErrorValue {
    fn from(e: ErrorKind) -> Self {
        ErrorValue::Kind(e)
    }
}

impl From<&ErrorKind> for ErrorValue {
    fn from(e: &ErrorKind) -> Self {
        ErrorValue::Kind(e.clone())
    }
}

impl From<ErrorKindInstance> for ErrorValue {
    fn from(e: ErrorKindInstance) -> Self {
        ErrorValue::Instance(e)
    }
}

impl From<&ErrorKindInstance> for ErrorValue {
    fn from(e: &ErrorKindInstance) -> Self {
        ErrorValue::Instance(e.clone())
    }
}

impl From<Errors> for ErrorValue {
    fn from(e: Errors) -> Self {
        ErrorValue::Collection(e)
    }
}

impl From<&ErrorValue> for ErrorValue {
    fn from(e: &ErrorValue) -> Self {
        e.clone()
    }
}

/// Polymorphic membership test.
///
/// - `container` is a collection: delegates to [`Errors::contains`].
/// - `candidate` is a kind: delegates to [`ErrorKind::is_kind_of`].
/// - otherwise: plain [`ErrorValue`] equality.
pub fn is_contained_in(candidate: &ErrorValue, container: &ErrorValue) -> bool {
    match (candidate, container) {
        (_, ErrorValue::Collection(errors)) => errors.contains(candidate),
        (ErrorValue::Kind(kind), _) => kind.is_kind_of(container),
        _ => candidate == container,
    }
}

/// Number of error occurrences `err` stands for.
///
/// `None` counts as zero, a collection as its [`Errors::count`], anything
/// else as one.
pub fn count_of(err: Option<&ErrorValue>) -> usize {
    match err {
        None => 0,
        Some(ErrorValue::Collection(errors)) => errors.count(),
        Some(
            ErrorValue::Plain(_)
            | ErrorValue::Kind(_)
            | ErrorValue::Instance(_)
            | ErrorValue::Other(_),
        ) => 1,
    }
}

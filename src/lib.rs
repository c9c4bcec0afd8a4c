// src/lib.rs

//! Comparable error values.
//!
//! - [`PlainError`]: identified by its message text.
//! - [`ErrorKind`]: a format-pattern template; its [`ErrorKindInstance`]s
//!   carry resolved messages but stay comparable back to the kind.
//! - [`Errors`]: an append-only batch of errors with membership queries.
//! - [`Catalog`]: named plain errors and kinds loaded from TOML.

pub mod catalog;
pub mod collection;
pub mod errors;
pub mod format;
pub mod kind;
pub mod logging;
pub mod plain;
pub mod value;

pub use crate::catalog::Catalog;
pub use crate::collection::Errors;
pub use crate::errors::{ErrsetError, Result};
pub use crate::kind::{ErrorKind, ErrorKindInstance};
pub use crate::plain::PlainError;
pub use crate::value::{ErrorValue, count_of, is_contained_in};

//! Sample errors shared by the integration tests.

use std::sync::LazyLock;

use errset::{ErrorKind, Errors, PlainError};

pub const SAMPLE_ERROR_1: PlainError = PlainError::from_static("sample error 1");
pub const SAMPLE_ERROR_2: PlainError = PlainError::from_static("sample error 2");
pub const SAMPLE_ERROR_3: PlainError = PlainError::from_static("sample error 3");

/// `"test %s"`, declared once so every test shares the same kind identity.
pub static SAMPLE_KIND: LazyLock<ErrorKind> = LazyLock::new(|| ErrorKind::new("test %s"));

/// The four-entry collection used by the rendering scenarios:
/// three plain samples followed by `SAMPLE_KIND` bound to `"something"`.
pub fn sample_collection() -> Errors {
    let mut errs = Errors::new();
    errs.add_error(SAMPLE_ERROR_1);
    errs.add_error(SAMPLE_ERROR_2);
    errs.add_error(SAMPLE_ERROR_3);
    errs.add_error(SAMPLE_KIND.instantiate(&[&"something"]));
    errs
}

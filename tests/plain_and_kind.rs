// tests/plain_and_kind.rs

use std::collections::HashSet;

use errset::{ErrorKind, ErrorValue, PlainError};
use errset_test_utils::fixtures::{SAMPLE_ERROR_1, SAMPLE_KIND};
use errset_test_utils::init_tracing;

#[test]
fn plain_error_returns_its_message_verbatim() {
    let e = PlainError::new("test");
    assert_eq!(e.message(), "test");
    assert_eq!(e.to_string(), "test");
}

#[test]
fn plain_errors_compare_by_text() {
    assert_eq!(SAMPLE_ERROR_1, PlainError::new("sample error 1"));
    assert_ne!(SAMPLE_ERROR_1, PlainError::new("sample error 2"));
    assert_eq!(PlainError::from("x"), PlainError::from("x".to_string()));
}

#[test]
fn kind_renders_as_its_pattern() {
    assert_eq!(SAMPLE_KIND.pattern(), "test %s");
    assert_eq!(SAMPLE_KIND.message(), "test %s");
    assert_eq!(SAMPLE_KIND.to_string(), "test %s");
}

#[test]
fn instance_resolves_message_and_keeps_its_kind() {
    init_tracing();

    let e = SAMPLE_KIND.instantiate(&[&"something"]);
    assert_eq!(e.message(), "test something");
    assert_eq!(e.to_string(), "test something");
    assert_eq!(e.kind(), &*SAMPLE_KIND);

    assert!(SAMPLE_KIND.is_instance(&e));
    assert!(SAMPLE_KIND.is_kind_of(&ErrorValue::from(&e)));
}

#[test]
fn kinds_with_identical_patterns_are_distinct() {
    let first = ErrorKind::new("test %s");
    let second = ErrorKind::new("test %s");
    let e = first.instantiate(&[&"something"]);

    assert_ne!(first, second);
    assert!(first.same_pattern(&second));
    assert!(first.is_instance(&e));
    assert!(!second.is_instance(&e));
}

#[test]
fn cloned_kind_shares_identity() {
    let kind = ErrorKind::new("code %d");
    let alias = kind.clone();
    let e = kind.instantiate(&[&7]);

    assert_eq!(kind, alias);
    assert!(alias.is_instance(&e));

    let mut set = HashSet::new();
    set.insert(kind.clone());
    assert!(set.contains(&alias));
    assert!(!set.contains(&ErrorKind::new("code %d")));
}

#[test]
fn is_kind_of_rejects_non_instances() {
    let plain = ErrorValue::from(PlainError::new("test something"));
    let bare_kind = ErrorValue::from(&*SAMPLE_KIND);

    assert!(!SAMPLE_KIND.is_kind_of(&plain));
    assert!(!SAMPLE_KIND.is_kind_of(&bare_kind));
}

#[test]
fn instances_of_one_kind_are_equal_regardless_of_values() {
    let a = SAMPLE_KIND.instantiate(&[&"a"]);
    let b = SAMPLE_KIND.instantiate(&[&"b"]);
    let other = ErrorKind::new("test %s").instantiate(&[&"a"]);

    assert_eq!(a, b);
    assert_ne!(a, other);
    assert!(a == *SAMPLE_KIND);
    assert!(*SAMPLE_KIND == b);
}

#[test]
fn instance_against_plain_error_compares_text() {
    let e = SAMPLE_KIND.instantiate(&[&"something"]);
    assert!(e == PlainError::new("test something"));
    assert!(e != PlainError::new("test other"));
}

#[test]
fn values_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    assert_error(&SAMPLE_ERROR_1);
    assert_error(&*SAMPLE_KIND);
    assert_error(&SAMPLE_KIND.instantiate(&[&"x"]));
    assert_error(&ErrorValue::from(SAMPLE_ERROR_1));
}

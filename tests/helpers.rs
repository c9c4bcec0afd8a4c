// tests/helpers.rs

use errset::{ErrorKind, ErrorValue, Errors, PlainError, count_of, is_contained_in};
use errset_test_utils::fixtures::{SAMPLE_ERROR_1, SAMPLE_KIND, sample_collection};

#[test]
fn count_of_absent_error_is_zero() {
    assert_eq!(count_of(None), 0);
}

#[test]
fn count_of_single_error_is_one() {
    assert_eq!(count_of(Some(&ErrorValue::from(SAMPLE_ERROR_1))), 1);
    assert_eq!(count_of(Some(&ErrorValue::from(&*SAMPLE_KIND))), 1);
    assert_eq!(
        count_of(Some(&ErrorValue::from(SAMPLE_KIND.instantiate(&[&"x"])))),
        1
    );
}

#[test]
fn count_of_collection_is_its_count() {
    let errs = ErrorValue::from(sample_collection());
    assert_eq!(count_of(Some(&errs)), 4);
    assert_eq!(count_of(Some(&ErrorValue::from(Errors::new()))), 0);
}

#[test]
fn is_contained_in_delegates_to_collection() {
    let errs = ErrorValue::from(sample_collection());

    assert!(is_contained_in(&ErrorValue::from(SAMPLE_ERROR_1), &errs));
    assert!(is_contained_in(&ErrorValue::from(&*SAMPLE_KIND), &errs));
    assert!(!is_contained_in(
        &ErrorValue::from(PlainError::new("test something")),
        &errs
    ));
}

#[test]
fn is_contained_in_uses_kind_test_for_kind_candidates() {
    let instance = ErrorValue::from(SAMPLE_KIND.instantiate(&[&"something"]));

    assert!(is_contained_in(&ErrorValue::from(&*SAMPLE_KIND), &instance));
    assert!(!is_contained_in(
        &ErrorValue::from(ErrorKind::new("test %s")),
        &instance
    ));
}

#[test]
fn is_contained_in_falls_back_to_equality() {
    let plain = ErrorValue::from(SAMPLE_ERROR_1);
    let instance = ErrorValue::from(SAMPLE_KIND.instantiate(&[&"something"]));

    assert!(is_contained_in(&plain, &ErrorValue::from(PlainError::new("sample error 1"))));
    assert!(!is_contained_in(
        &ErrorValue::from(PlainError::new("test something")),
        &instance
    ));
    assert!(!is_contained_in(&instance, &plain));
}

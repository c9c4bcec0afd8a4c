// tests/properties.rs

use errset::{ErrorKind, ErrorValue, Errors, PlainError};
use proptest::prelude::*;

// Text without '%' so it can be embedded in a pattern literally.
fn literal_text() -> impl Strategy<Value = String> {
    "[^%]{0,24}"
}

proptest! {
    #[test]
    fn plain_message_is_verbatim(s in any::<String>()) {
        let e = PlainError::new(s.clone());
        prop_assert_eq!(e.message(), s.as_str());
    }

    #[test]
    fn instantiate_interpolates_value(
        prefix in literal_text(),
        suffix in literal_text(),
        value in any::<String>(),
    ) {
        let kind = ErrorKind::new(format!("{prefix}%s{suffix}"));
        let e = kind.instantiate(&[&value]);
        prop_assert_eq!(e.message(), format!("{prefix}{value}{suffix}"));
        prop_assert!(kind.is_instance(&e));
    }

    #[test]
    fn count_matches_number_of_appends(
        messages in proptest::collection::vec("[a-c]{0,2}", 0..20),
    ) {
        let kind = ErrorKind::new("kind %s");
        let mut errs = Errors::new();
        for (i, m) in messages.iter().enumerate() {
            if i % 2 == 0 {
                errs.add(m.clone());
            } else {
                errs.add_error(kind.instantiate(&[m]));
            }
        }
        prop_assert_eq!(errs.count(), messages.len());
    }

    #[test]
    fn plain_probe_never_finds_instance(value in literal_text()) {
        let kind = ErrorKind::new("failed: %s");
        let e = kind.instantiate(&[&value]);
        let text = e.message().to_string();

        let mut errs = Errors::new();
        errs.add_error(e);

        prop_assert!(!errs.contains(PlainError::new(text)));
        prop_assert!(errs.contains(ErrorValue::from(&kind)));
    }

    #[test]
    fn render_has_one_line_per_entry(
        messages in proptest::collection::vec("[a-z ]{0,10}", 0..10),
    ) {
        let errs: Errors = messages.iter().map(|m| PlainError::new(m.clone())).collect();
        let expected: String = messages.iter().map(|m| format!("{m}\n")).collect();
        prop_assert_eq!(errs.render(), expected);
    }
}

//! Property tests for classifying package entries.

use proptest::prelude::*;

use assetpack::domain::value_objects::{is_absolute_url, is_external};

fn local_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/?[a-gi-z0-9._-][a-z0-9._/-]{0,40}").unwrap()
}

proptest! {
    /// PROPERTY: Classification never panics, including on multi-byte input.
    #[test]
    fn property_classification_never_panics(s in "(?s).{0,64}") {
        let _ = is_external(&s);
        let _ = is_absolute_url(&s);
    }

    /// PROPERTY: Absolute URLs are always external.
    #[test]
    fn property_absolute_urls_are_external(
        scheme in prop_oneof!["http://", "https://", "HTTPS://", "//"],
        rest in "[a-z0-9./-]{0,40}",
    ) {
        let url = format!("{scheme}{rest}");
        prop_assert!(is_absolute_url(&url));
        prop_assert!(is_external(&url));
    }

    /// PROPERTY: Paths that do not start with `http` or `//` are local.
    #[test]
    fn property_plain_paths_are_local(path in local_path()) {
        prop_assume!(!path.starts_with("//"));
        prop_assert!(!is_external(&path));
        prop_assert!(!is_absolute_url(&path));
    }
}

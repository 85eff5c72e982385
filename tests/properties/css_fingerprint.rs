//! Property tests for CSS image fingerprinting.

use std::path::Path;

use proptest::prelude::*;
use tempfile::tempdir;

use assetpack::domain::services::CssFingerprinter;
use assetpack::infrastructure::LocalFs;

fn image_name() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9_-]{0,12}", prop_oneof!["png", "gif", "jpg", "jpeg"])
        .prop_map(|(stem, ext)| format!("{stem}.{ext}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rewriting never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(css in proptest::collection::vec(any::<u8>(), 0..256)) {
        let fingerprinter = CssFingerprinter::new("/nonexistent-web-root");
        let _ = fingerprinter.rewrite(Path::new("/nonexistent-web-root/a.css"), &css, &LocalFs::new());
    }

    /// PROPERTY: CSS without `url(` comes back byte-for-byte.
    #[test]
    fn property_text_without_urls_is_unchanged(
        css in "[^uU]{0,256}"
    ) {
        let fingerprinter = CssFingerprinter::new("/nonexistent-web-root");
        let out = fingerprinter.rewrite(Path::new("/nonexistent-web-root/a.css"), css.as_bytes(), &LocalFs::new());
        prop_assert_eq!(out, css.into_bytes());
    }

    /// PROPERTY: Bytes that are not valid UTF-8 survive around a rewritten URL.
    #[test]
    fn property_non_utf8_bytes_survive(
        name in image_name(),
        junk in proptest::collection::vec(0x80u8..=0xff, 1..32),
    ) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(&name), b"img").unwrap();
        let mut css = junk.clone();
        css.extend_from_slice(format!(" .x {{ background: url({name}); }} ").as_bytes());
        css.extend_from_slice(&junk);

        let fingerprinter = CssFingerprinter::new(dir.path());
        let out = fingerprinter.rewrite(&dir.path().join("a.css"), &css, &LocalFs::new());

        prop_assert!(out.starts_with(&junk));
        prop_assert!(out.ends_with(&junk));
        let marker = format!("{name}?");
        prop_assert_eq!(String::from_utf8_lossy(&out).matches(&marker).count(), 1);
    }

    /// PROPERTY: Absolute image URLs are never rewritten, even if a file
    /// with the same path exists locally.
    #[test]
    fn property_absolute_urls_are_untouched(
        name in image_name(),
        scheme in prop_oneof!["http://", "https://", "//"],
    ) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(&name), b"img").unwrap();
        let css = format!(".x {{ background: url({scheme}cdn.example.com/{name}); }}");

        let fingerprinter = CssFingerprinter::new(dir.path());
        let out = fingerprinter.rewrite(&dir.path().join("a.css"), css.as_bytes(), &LocalFs::new());

        prop_assert_eq!(out, css.into_bytes());
    }

    /// PROPERTY: Every existing local image gets exactly one fingerprint,
    /// whatever the quoting style.
    #[test]
    fn property_local_images_get_one_fingerprint(
        name in image_name(),
        quote in prop_oneof!["", "'", "\""],
    ) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(&name), b"img").unwrap();
        let css = format!(".x {{ background: url({quote}{name}{quote}); }}");

        let fingerprinter = CssFingerprinter::new(dir.path());
        let out = fingerprinter.rewrite(&dir.path().join("a.css"), css.as_bytes(), &LocalFs::new());
        let out = String::from_utf8(out).unwrap();

        let marker = format!("{name}?");
        prop_assert_eq!(out.matches(&marker).count(), 1, "rewritten css: {}", out);
        let again = fingerprinter.rewrite(&dir.path().join("a.css"), out.as_bytes(), &LocalFs::new());
        prop_assert_eq!(again, out.into_bytes());
    }
}

//! Property tests for content hashing.

use proptest::prelude::*;

use assetpack::domain::value_objects::ContentHash;

proptest! {
    /// PROPERTY: Derived keys are fixed-length lowercase hex prefixes of the digest.
    #[test]
    fn property_keys_are_hex_prefixes(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        let hash = ContentHash::from_bytes(&content);

        prop_assert_eq!(hash.hex().len(), 64);
        prop_assert_eq!(hash.artifact_key().len(), 16);
        prop_assert_eq!(hash.fingerprint().len(), 8);
        prop_assert!(hash.hex().starts_with(hash.artifact_key()));
        prop_assert!(hash.artifact_key().starts_with(hash.fingerprint()));
        prop_assert!(hash.hex().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    /// PROPERTY: Equal content hashes equally.
    #[test]
    fn property_hash_is_deterministic(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(ContentHash::from_bytes(&content), ContentHash::from_bytes(&content.clone()));
    }
}

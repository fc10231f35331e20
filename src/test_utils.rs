//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a single Java package segment (never starts with a digit)
    pub fn package_segment() -> impl Strategy<Value = String> {
        "[a-z_][a-z0-9_]{0,12}"
    }

    /// Generate a dotted package identifier with one to three segments
    pub fn package_id() -> impl Strategy<Value = String> {
        proptest::collection::vec(package_segment(), 1..=3).prop_map(|parts| parts.join("."))
    }

    /// Generate an ordered catalog of distinct package identifiers
    pub fn package_catalog(max_len: usize) -> impl Strategy<Value = Vec<String>> {
        proptest::collection::btree_set(package_id(), 1..=max_len)
            .prop_map(|set| set.into_iter().collect())
            .prop_shuffle()
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_id_generator(id in package_id()) {
            prop_assert!(!id.is_empty());
            prop_assert!(!id.starts_with('.'));
            prop_assert!(!id.ends_with('.'));
            for segment in id.split('.') {
                prop_assert!(!segment.is_empty());
                prop_assert!(!segment.starts_with(|c: char| c.is_ascii_digit()));
            }
        }

        #[test]
        fn test_package_catalog_is_distinct(catalog in package_catalog(6)) {
            let unique: HashSet<_> = catalog.iter().collect();
            prop_assert_eq!(unique.len(), catalog.len());
            prop_assert!(!catalog.is_empty());
        }
    }
}

//! Insertion-ordered dictionaries.
//!
//! Both containers in this module pair a hash-keyed lookup structure with an
//! ordered sequence and keep the two synchronized under every mutation:
//!
//! - [`OrderedDictionary`]: entries live in a `Vec<(K, V)>`; the index maps
//!   each key to its position. Keys at a position may be replaced.
//! - [`ListDictionary`]: keys live in a `Vec<K>`; the index maps each key to
//!   its value. The key at a position is fixed once stored.
//!
//! # Examples
//!
//! ## `OrderedDictionary`
//!
//! ```rust
//! use extended_collections::dictionary::OrderedDictionary;
//!
//! let mut dictionary =
//!     OrderedDictionary::try_from_pairs([("A", "AAA"), ("B", "BBB"), ("C", "CCC")]).unwrap();
//!
//! assert!(dictionary.add("A", "ZZZ").is_err());
//! assert_eq!(dictionary.get("A"), Ok(&"AAA"));
//!
//! dictionary.insert_at(1, "D", "DDD").unwrap();
//! assert_eq!(dictionary.ordered_keys(), vec!["A", "D", "B", "C"]);
//!
//! // Replacing the entry at a position may change its key
//! dictionary.set_at(1, "E", "EEE").unwrap();
//! assert_eq!(dictionary.ordered_keys(), vec!["A", "E", "B", "C"]);
//! ```
//!
//! ## `ListDictionary`
//!
//! ```rust
//! use extended_collections::CollectionError;
//! use extended_collections::dictionary::ListDictionary;
//!
//! let mut dictionary = ListDictionary::try_from_pairs([(0, "ABC"), (1, "DEF")]).unwrap();
//!
//! // The key at a position is fixed
//! assert_eq!(dictionary.set_at(0, 5, "XYZ"), Err(CollectionError::KeyMismatch));
//! assert_eq!(dictionary.set_at(0, 0, "XYZ"), Ok("ABC"));
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hasher used by the lookup structures.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`; with only
/// the `ahash` feature it is `ahash::RandomState`. Otherwise it is the
/// standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub(crate) type IndexBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexBuildHasher = std::collections::hash_map::RandomState;

/// Hash map keyed with [`IndexBuildHasher`].
pub(crate) type IndexMap<K, V> = std::collections::HashMap<K, V, IndexBuildHasher>;

pub(crate) fn index_map_with_capacity<K, V>(capacity: usize) -> IndexMap<K, V> {
    IndexMap::with_capacity_and_hasher(capacity, IndexBuildHasher::default())
}

mod list;
mod ordered;

pub use list::ListDictionary;
pub use list::ListDictionaryIntoIterator;
pub use list::ListDictionaryIterator;
pub use ordered::OrderedDictionary;
pub use ordered::OrderedDictionaryIntoIterator;
pub use ordered::OrderedDictionaryIterator;

#[cfg(test)]
mod index_map_tests {
    use super::index_map_with_capacity;
    use rstest::rstest;

    #[rstest]
    fn test_index_map_with_capacity_is_empty() {
        let map = index_map_with_capacity::<String, usize>(16);
        assert!(map.is_empty());
        assert!(map.capacity() >= 16);
    }
}

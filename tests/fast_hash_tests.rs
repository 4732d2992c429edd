//! Tests for fast hash feature flags.
//!
//! The `fxhash` and `ahash` features swap the hasher behind the position
//! index. These tests run under every hasher configuration and check that
//! lookup and positional access keep agreeing.

#![cfg(feature = "dictionary")]

use extended_collections::dictionary::{ListDictionary, OrderedDictionary};
use rstest::rstest;

// =============================================================================
// Large Scale Tests (hash function stress test)
// =============================================================================

/// Tests that every key maps to its position with many keys.
#[rstest]
fn test_large_scale_add_and_retrieve() {
    const COUNT: i32 = 10_000;

    let dictionary =
        OrderedDictionary::try_from_pairs((0..COUNT).map(|key| (key, key * 2))).unwrap();

    for (position, key) in (0..COUNT).enumerate() {
        assert_eq!(dictionary.get(&key), Ok(&(key * 2)), "Failed to get key {key}");
        assert_eq!(dictionary.index_of_key(&key), Some(position));
    }

    for key in COUNT..(COUNT + 100) {
        assert_eq!(dictionary.try_get(&key), None, "Key {key} should not exist");
    }
}

/// Tests that string keys survive repeated front insertion.
#[rstest]
fn test_string_keys_front_insertion() {
    const COUNT: usize = 1_000;

    let mut dictionary = OrderedDictionary::new();
    for index in 0..COUNT {
        dictionary.insert_at(0, format!("key_{index}"), index).unwrap();
    }

    for index in 0..COUNT {
        let key = format!("key_{index}");
        assert_eq!(dictionary.get(&key), Ok(&index), "Failed to get key {key}");
        assert_eq!(dictionary.index_of_key(&key), Some(COUNT - 1 - index));
    }
}

/// Tests that ListDictionary lookups work with many keys.
#[rstest]
fn test_list_dictionary_large_scale() {
    const COUNT: u32 = 2_000;

    let dictionary =
        ListDictionary::try_from_pairs((0..COUNT).map(|key| (key, key.to_string()))).unwrap();

    for key in 0..COUNT {
        assert_eq!(dictionary.get(&key), Ok(&key.to_string()));
    }
}

// =============================================================================
// Edge Case Tests
// =============================================================================

/// Tests empty string as key.
#[rstest]
fn test_empty_string_key() {
    let dictionary = OrderedDictionary::try_from_pairs([(String::new(), 42)]).unwrap();

    assert_eq!(dictionary.get(""), Ok(&42));
    assert_eq!(dictionary.len(), 1);
}

/// Tests keys that might have similar hash patterns.
#[rstest]
fn test_similar_keys() {
    let dictionary = OrderedDictionary::try_from_pairs(
        ["a", "aa", "aaa", "aaaa"]
            .into_iter()
            .enumerate()
            .map(|(position, key)| (key.to_string(), position)),
    )
    .unwrap();

    assert_eq!(dictionary.get("a"), Ok(&0));
    assert_eq!(dictionary.get("aa"), Ok(&1));
    assert_eq!(dictionary.get("aaa"), Ok(&2));
    assert_eq!(dictionary.get("aaaa"), Ok(&3));
}

/// Tests keys with special characters.
#[rstest]
#[case("\0")]
#[case("\n")]
#[case("\t")]
#[case(" ")]
fn test_special_character_keys(#[case] key: &str) {
    let mut dictionary = OrderedDictionary::new();
    dictionary.add(key.to_string(), key.len()).unwrap();

    assert!(dictionary.contains_key(key));
    assert_eq!(dictionary.index_of_key(key), Some(0));
}

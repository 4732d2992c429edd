//! Unit tests for KeyedList.
//!
//! Values are strings keyed by their first character.

#![cfg(feature = "keyed")]

use extended_collections::CollectionError;
use extended_collections::keyed::KeyedList;
use rstest::{fixture, rstest};

fn first_character(value: &String) -> String {
    value.chars().take(1).collect()
}

#[fixture]
fn seeded() -> KeyedList<String, String> {
    KeyedList::try_from_values(
        first_character,
        ["AAA", "BBB", "CCC"].map(String::from),
    )
    .unwrap()
}

#[rstest]
fn test_add_derives_key(mut seeded: KeyedList<String, String>) {
    seeded.add("DDD".to_string()).unwrap();

    assert_eq!(seeded.get("D"), Ok(&"DDD".to_string()));
    assert_eq!(seeded.index_of_key("D"), Some(3));
}

#[rstest]
fn test_add_conflicting_key_fails(mut seeded: KeyedList<String, String>) {
    assert_eq!(
        seeded.add("AZZ".to_string()),
        Err(CollectionError::DuplicateKey { existing_index: 0 })
    );
    assert_eq!(seeded.len(), 3);
    assert_eq!(seeded.get("A"), Ok(&"AAA".to_string()));
}

#[rstest]
fn test_insert_places_value_at_position(mut seeded: KeyedList<String, String>) {
    seeded.insert(1, "ZZZ".to_string()).unwrap();

    assert_eq!(seeded.ordered_keys(), vec!["A", "Z", "B", "C"]);
    assert_eq!(
        seeded.insert(9, "XXX".to_string()),
        Err(CollectionError::IndexOutOfRange { index: 9, length: 4 })
    );
}

#[rstest]
fn test_set_at_recomputes_key(mut seeded: KeyedList<String, String>) {
    assert_eq!(seeded.set_at(1, "BOB".to_string()), Ok("BBB".to_string()));
    assert_eq!(seeded.set_at(1, "XYZ".to_string()), Ok("BOB".to_string()));
    assert!(!seeded.contains_key("B"));
    assert_eq!(seeded.get("X"), Ok(&"XYZ".to_string()));
}

#[rstest]
fn test_set_at_duplicate_derived_key_changes_nothing(mut seeded: KeyedList<String, String>) {
    let before = seeded.to_vec();
    assert_eq!(
        seeded.set_at(1, "CAT".to_string()),
        Err(CollectionError::DuplicateKey { existing_index: 2 })
    );
    assert_eq!(seeded.to_vec(), before);
}

#[rstest]
fn test_remove_by_value(mut seeded: KeyedList<String, String>) {
    assert!(seeded.remove(&"BBB".to_string()));
    assert!(!seeded.remove(&"BBB".to_string()));
    assert_eq!(seeded.to_vec(), vec!["AAA", "CCC"]);
    assert_eq!(seeded.index_of(&"CCC".to_string()), Some(1));
}

#[rstest]
fn test_remove_at_and_remove_key(mut seeded: KeyedList<String, String>) {
    assert_eq!(seeded.remove_at(0), Ok("AAA".to_string()));
    assert_eq!(seeded.remove_key("C"), Some("CCC".to_string()));
    assert_eq!(seeded.remove_key("C"), None);
    assert_eq!(seeded.get_at(0), Ok(&"BBB".to_string()));
}

#[rstest]
fn test_explicit_key_paths_bypass_selector(mut seeded: KeyedList<String, String>) {
    seeded.add_with_key("custom".to_string(), "QQQ".to_string()).unwrap();
    assert_eq!(seeded.get("custom"), Ok(&"QQQ".to_string()));
    assert!(!seeded.contains_key("Q"));

    assert_eq!(seeded.set("A".to_string(), "ALPHA".to_string()), Some("AAA".to_string()));
}

#[rstest]
fn test_missing_selector_fails_deterministically() {
    let mut list: KeyedList<String, String> = KeyedList::new();

    assert!(!list.has_key_selector());
    assert_eq!(list.add("AAA".to_string()), Err(CollectionError::MissingKeySelector));
    assert_eq!(list.insert(0, "AAA".to_string()), Err(CollectionError::MissingKeySelector));
    assert!(list.is_empty());

    list.set_key_selector(first_character);
    list.add("AAA".to_string()).unwrap();
    assert_eq!(list.get("A"), Ok(&"AAA".to_string()));
}

#[rstest]
fn test_pairs_with_selector_and_iteration() {
    let list = KeyedList::try_from_pairs_with_key_selector(
        first_character,
        [("x".to_string(), "xylophone".to_string())],
    )
    .unwrap();

    let values: Vec<&String> = list.iter().collect();
    assert_eq!(values, vec!["xylophone"]);
    assert!(list.contains(&"xylophone".to_string()));
    assert_eq!(list.as_dictionary().len(), 1);

    let owned: Vec<String> = list.into();
    assert_eq!(owned, vec!["xylophone"]);
}

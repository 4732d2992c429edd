//! Integration tests for keyed containers under the `arc` feature.
//!
//! With `arc`, key selectors are shared through `Arc`, so keyed containers
//! can be moved to and shared between threads.

#![cfg(all(feature = "arc", feature = "keyed"))]

use extended_collections::keyed::{KeyedList, Shelf};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::thread;

fn bucket(value: &u32) -> u32 {
    value / 10
}

#[rstest]
fn test_keyed_list_shared_read_across_threads() {
    let list = Arc::new(KeyedList::try_from_values(bucket, [5, 15, 25]).unwrap());

    let handles: Vec<_> = (0..3)
        .map(|key| {
            let list = Arc::clone(&list);
            thread::spawn(move || list.get(&key).copied())
        })
        .collect();

    let found: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(found, vec![Ok(5), Ok(15), Ok(25)]);
}

#[rstest]
fn test_cloned_list_keeps_selector_in_other_thread() {
    let list = KeyedList::with_key_selector(bucket);
    let mut moved = list.clone();

    let result = thread::spawn(move || {
        moved.add(42).unwrap();
        moved
    })
    .join()
    .unwrap();

    assert_eq!(result.get(&4), Ok(&42));
    assert!(list.is_empty());
}

#[rstest]
fn test_shelf_behind_mutex() {
    let shelf = Arc::new(Mutex::new(Shelf::with_key_selector(bucket)));

    let handles: Vec<_> = (0..4_u32)
        .map(|index| {
            let shelf = Arc::clone(&shelf);
            thread::spawn(move || shelf.lock().unwrap().try_add(index * 10).unwrap())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(shelf.lock().unwrap().len(), 4);
}

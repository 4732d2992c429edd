//! Containers whose keys are derived from their values.
//!
//! - [`KeyedList`]: a list of values that can also be accessed by key; the
//!   key of each value is computed by a key selector function.
//! - [`UniqueTypeList`]: a `KeyedList` keyed by the runtime type of each value,
//!   holding at most one value per type.
//! - [`Shelf`]: a reduced-surface container that is keyed either explicitly
//!   per call or through a key selector.
//!
//! # Examples
//!
//! ```rust
//! use extended_collections::keyed::KeyedList;
//!
//! let mut list = KeyedList::with_key_selector(|value: &String| value.to_lowercase());
//! list.add("Alpha".to_string()).unwrap();
//! list.add("Beta".to_string()).unwrap();
//!
//! // The derived key "alpha" is already taken
//! assert!(list.add("ALPHA".to_string()).is_err());
//!
//! assert_eq!(list.get("beta"), Ok(&"Beta".to_string()));
//! assert_eq!(list.get_at(0), Ok(&"Alpha".to_string()));
//! ```

// =============================================================================
// Key Selector Type Alias
// =============================================================================

/// Shared function computing the key of a value.
///
/// When the `arc` feature is enabled, this is an `Arc` around a
/// `Send + Sync` closure, so containers holding one can cross threads.
///
/// When the `arc` feature is disabled (default), this is an `Rc`.
#[cfg(feature = "arc")]
pub type KeySelector<K, V> = std::sync::Arc<dyn Fn(&V) -> K + Send + Sync>;

/// Shared function computing the key of a value.
///
/// When the `arc` feature is enabled, this is an `Arc` around a
/// `Send + Sync` closure, so containers holding one can cross threads.
///
/// When the `arc` feature is disabled (default), this is an `Rc`.
#[cfg(not(feature = "arc"))]
pub type KeySelector<K, V> = std::rc::Rc<dyn Fn(&V) -> K>;

/// Thread-safety bound placed on key selector closures.
///
/// Implies `Send + Sync` when the `arc` feature is enabled; otherwise every
/// type implements it.
#[cfg(feature = "arc")]
pub trait SelectorBound: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> SelectorBound for T {}

/// Thread-safety bound placed on key selector closures.
///
/// Implies `Send + Sync` when the `arc` feature is enabled; otherwise every
/// type implements it.
#[cfg(not(feature = "arc"))]
pub trait SelectorBound {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> SelectorBound for T {}

#[cfg(feature = "arc")]
type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
type ReferenceCounter<T> = std::rc::Rc<T>;

/// Wraps a closure into a [`KeySelector`].
pub(crate) fn key_selector<K, V, F>(selector: F) -> KeySelector<K, V>
where
    F: Fn(&V) -> K + SelectorBound + 'static,
{
    ReferenceCounter::new(selector)
}

mod keyed_list;
mod shelf;
mod unique_type_list;

pub use keyed_list::KeyedList;
pub use keyed_list::KeyedListIterator;
pub use shelf::Shelf;
pub use unique_type_list::TypeSlot;
pub use unique_type_list::UniqueTypeList;

#[cfg(test)]
mod key_selector_tests {
    use super::key_selector;
    use rstest::rstest;

    #[rstest]
    fn test_key_selector_applies_closure() {
        let selector = key_selector(|value: &String| value.len());
        assert_eq!(selector(&"four".to_string()), 4);
    }

    #[rstest]
    fn test_key_selector_clone_shares_closure() {
        let selector = key_selector(|value: &i32| value * 2);
        let shared = selector.clone();
        assert_eq!(selector(&3), shared(&3));
    }
}

//! A list of values that can also be accessed by key.
//!
//! [`KeyedList`] wraps an [`OrderedDictionary`] and replaces explicit
//! `(key, value)` insertion with value-only insertion: the key of each value
//! is computed by a [`KeySelector`] at the time it is stored.
//!
//! The selector is not re-applied later. Values are treated as immutable for
//! key derivation purposes, which is why this type hands out no mutable
//! iteration over its values.
//!
//! # Examples
//!
//! ```rust
//! use extended_collections::CollectionError;
//! use extended_collections::keyed::KeyedList;
//!
//! let mut list = KeyedList::with_key_selector(|value: &String| value.to_lowercase());
//! list.add_with_key("a".to_string(), "A".to_string()).unwrap();
//! list.add_with_key("b".to_string(), "B".to_string()).unwrap();
//!
//! assert_eq!(
//!     list.add("A".to_string()),
//!     Err(CollectionError::DuplicateKey { existing_index: 0 })
//! );
//!
//! list.insert(1, "C".to_string()).unwrap();
//! assert_eq!(list.get_at(1), Ok(&"C".to_string()));
//! assert_eq!(list.ordered_keys(), vec!["a", "c", "b"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::{KeySelector, SelectorBound, key_selector};
use crate::dictionary::{OrderedDictionary, OrderedDictionaryIterator};
use crate::error::{CollectionError, Result};

/// An ordered list of values, each stored under a key derived from it.
///
/// A `KeyedList` created with [`new`](Self::new) has no key selector; every
/// value-only operation on it fails with
/// [`CollectionError::MissingKeySelector`] until one is set with
/// [`set_key_selector`](Self::set_key_selector). The explicit-key operations
/// (`add_with_key`, `set`, ...) work either way and store under the key
/// given, without consulting the selector.
///
/// # Examples
///
/// ```rust
/// use extended_collections::CollectionError;
/// use extended_collections::keyed::KeyedList;
///
/// let mut list: KeyedList<char, String> = KeyedList::new();
/// assert_eq!(list.add("AAA".to_string()), Err(CollectionError::MissingKeySelector));
///
/// list.set_key_selector(|value: &String| value.chars().next().unwrap_or_default());
/// list.add("AAA".to_string()).unwrap();
/// assert_eq!(list.get(&'A'), Ok(&"AAA".to_string()));
/// ```
#[derive(Clone)]
pub struct KeyedList<K, V> {
    dictionary: OrderedDictionary<K, V>,
    key_selector: Option<KeySelector<K, V>>,
}

impl<K, V> KeyedList<K, V> {
    /// Creates an empty list without a key selector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dictionary: OrderedDictionary::new(),
            key_selector: None,
        }
    }

    /// Creates an empty list that derives keys with `selector`.
    #[must_use]
    pub fn with_key_selector<F>(selector: F) -> Self
    where
        F: Fn(&V) -> K + SelectorBound + 'static,
    {
        Self {
            dictionary: OrderedDictionary::new(),
            key_selector: Some(key_selector(selector)),
        }
    }

    /// Creates an empty list with a key selector and room for `capacity` values.
    #[must_use]
    pub fn with_key_selector_and_capacity<F>(selector: F, capacity: usize) -> Self
    where
        F: Fn(&V) -> K + SelectorBound + 'static,
    {
        Self {
            dictionary: OrderedDictionary::with_capacity(capacity),
            key_selector: Some(key_selector(selector)),
        }
    }

    /// Replaces the key selector.
    ///
    /// Values already stored keep the keys they were stored under.
    pub fn set_key_selector<F>(&mut self, selector: F)
    where
        F: Fn(&V) -> K + SelectorBound + 'static,
    {
        self.key_selector = Some(key_selector(selector));
    }

    /// Returns `true` if a key selector is configured.
    #[must_use]
    pub const fn has_key_selector(&self) -> bool {
        self.key_selector.is_some()
    }

    /// Computes the key `value` would be stored under.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingKeySelector`] if no selector is configured.
    pub fn derive_key(&self, value: &V) -> Result<K> {
        self.key_selector
            .as_ref()
            .map(|selector| selector(value))
            .ok_or(CollectionError::MissingKeySelector)
    }

    /// Returns the underlying dictionary for read-only access.
    #[must_use]
    pub const fn as_dictionary(&self) -> &OrderedDictionary<K, V> {
        &self.dictionary
    }

    /// Returns the number of values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Returns `true` if the list holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Removes every value. The key selector is kept.
    pub fn clear(&mut self) {
        self.dictionary.clear();
    }

    /// Returns an iterator over the values in container order.
    #[must_use]
    pub fn iter(&self) -> KeyedListIterator<'_, K, V> {
        KeyedListIterator {
            inner: self.dictionary.iter(),
        }
    }

    /// Returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn get_at(&self, position: usize) -> Result<&V> {
        self.dictionary.get_at(position).map(|(_, value)| value)
    }

    /// Returns a copy of the keys in container order.
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.dictionary.ordered_keys()
    }

    /// Returns a copy of the values in container order.
    ///
    /// Changes to the returned vector are not reflected in the list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.dictionary.ordered_values()
    }

    /// Returns `true` if some stored value equals `value`.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first stored value equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }
}

impl<K: Hash + Eq + Clone, V> KeyedList<K, V> {
    /// Creates a list with a key selector, adding `values` in order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if two values derive the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::keyed::KeyedList;
    ///
    /// let first_letter = |value: &&str| value[0..1].to_string();
    ///
    /// let list = KeyedList::try_from_values(first_letter, ["AAA", "BBB"]).unwrap();
    /// assert_eq!(list.get("B"), Ok(&"BBB"));
    ///
    /// assert!(KeyedList::try_from_values(first_letter, ["AAA", "ABC"]).is_err());
    /// ```
    pub fn try_from_values<F, I>(selector: F, values: I) -> Result<Self>
    where
        F: Fn(&V) -> K + SelectorBound + 'static,
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter();
        let mut list = Self::with_key_selector_and_capacity(selector, values.size_hint().0);
        for value in values {
            list.add(value)?;
        }
        Ok(list)
    }

    /// Creates a list without a key selector from explicit `(key, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if two pairs share a key.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Ok(Self {
            dictionary: OrderedDictionary::try_from_pairs(pairs)?,
            key_selector: None,
        })
    }

    /// Creates a list with a key selector from explicit `(key, value)` pairs.
    ///
    /// The pairs are stored under the keys given; the selector applies to
    /// values added afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if two pairs share a key.
    pub fn try_from_pairs_with_key_selector<F, I>(selector: F, pairs: I) -> Result<Self>
    where
        F: Fn(&V) -> K + SelectorBound + 'static,
        I: IntoIterator<Item = (K, V)>,
    {
        Ok(Self {
            dictionary: OrderedDictionary::try_from_pairs(pairs)?,
            key_selector: Some(key_selector(selector)),
        })
    }

    /// Appends `value` under its derived key.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::MissingKeySelector`] if no selector is configured.
    /// - [`CollectionError::DuplicateKey`] if the derived key is already present.
    pub fn add(&mut self, value: V) -> Result<()> {
        let key = self.derive_key(&value)?;
        self.dictionary.add(key, value)
    }

    /// Inserts `value` under its derived key at `position`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::MissingKeySelector`] if no selector is configured.
    /// - [`CollectionError::IndexOutOfRange`] if `position > len()`.
    /// - [`CollectionError::DuplicateKey`] if the derived key is already present.
    pub fn insert(&mut self, position: usize, value: V) -> Result<()> {
        let key = self.derive_key(&value)?;
        self.dictionary.insert_at(position, key, value)
    }

    /// Replaces the value at `position` and returns the previous value.
    ///
    /// The key is recomputed from `value`. If it differs from the key at
    /// `position`, the old key is dropped and the new one takes its place.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::MissingKeySelector`] if no selector is configured.
    /// - [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    /// - [`CollectionError::DuplicateKey`] if the derived key is stored at
    ///   another position. The list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::keyed::KeyedList;
    ///
    /// let mut list =
    ///     KeyedList::try_from_values(|value: &i32| value % 10, [11, 22, 33]).unwrap();
    ///
    /// assert_eq!(list.set_at(0, 41), Ok(11));
    /// assert_eq!(list.set_at(0, 52), Err(CollectionError::DuplicateKey { existing_index: 1 }));
    /// assert_eq!(list.to_vec(), vec![41, 22, 33]);
    /// ```
    pub fn set_at(&mut self, position: usize, value: V) -> Result<V> {
        let key = self.derive_key(&value)?;
        self.dictionary
            .set_at(position, key, value)
            .map(|(_, previous)| previous)
    }

    /// Removes and returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<V> {
        self.dictionary
            .remove_at(position)
            .map(|(_, value)| value)
    }

    /// Removes the first stored value equal to `value`.
    ///
    /// Returns `false` if no stored value matches.
    pub fn remove(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let Some(position) = self.index_of(value) else {
            return false;
        };
        self.remove_at(position).is_ok()
    }

    /// Appends `value` under the explicit `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if the key is already present.
    pub fn add_with_key(&mut self, key: K, value: V) -> Result<()> {
        self.dictionary.add(key, value)
    }

    /// Stores `value` under the explicit `key`, replacing and returning any
    /// previous value; an absent key is appended.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.dictionary.set(key, value)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// The key is not re-derived after the value is changed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.get_mut(key)
    }

    /// Returns the value stored under `key`, or `None`.
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.try_get(key)
    }

    /// Returns `true` if `key` is stored in the list.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.contains_key(key)
    }

    /// Returns the position of `key`, or `None` if it is absent.
    #[must_use]
    pub fn index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.index_of_key(key)
    }

    /// Removes the value stored under `key` and returns it.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.remove(key)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the values of a [`KeyedList`] in container order.
pub struct KeyedListIterator<'a, K, V> {
    inner: OrderedDictionaryIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for KeyedListIterator<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for KeyedListIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for KeyedListIterator<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for KeyedListIterator<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for KeyedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a KeyedList<K, V> {
    type Item = &'a V;
    type IntoIter = KeyedListIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> From<KeyedList<K, V>> for Vec<V> {
    fn from(list: KeyedList<K, V>) -> Self {
        list.dictionary.into_iter().map(|(_, value)| value).collect()
    }
}

/// Lists compare by their entries; key selectors are not compared.
impl<K: PartialEq, V: PartialEq> PartialEq for KeyedList<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.dictionary == other.dictionary
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeyedList<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeyedList")
            .field("entries", &self.dictionary)
            .field("has_key_selector", &self.has_key_selector())
            .finish()
    }
}

//! Insertion-ordered dictionary with positional replacement.
//!
//! This module provides [`OrderedDictionary`], a mutable map that also behaves
//! as a list of `(key, value)` entries.
//!
//! # Overview
//!
//! `OrderedDictionary` owns two structures and never exposes either of them
//! for direct mutation:
//!
//! - `entries`: a `Vec<(K, V)>` holding every entry in insertion/positional order
//! - `index`: a hash map from each key to its position in `entries`
//!
//! Every value is stored exactly once, in `entries`; the index only records
//! where it lives. After every public operation:
//!
//! - `entries.len() == index.len()`
//! - `entries[index[k]].0 == k` for every stored key `k`
//! - no key appears twice in `entries`
//!
//! # Failure Atomicity
//!
//! Every duplicate-key and range check runs before either structure is
//! mutated, so an operation that returns `Err` leaves the dictionary exactly
//! as it was.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `get`          | O(1) average        |
//! | `contains_key` | O(1) average        |
//! | `add`          | O(1) amortized      |
//! | `set`          | O(1) average        |
//! | `get_at`       | O(1)                |
//! | `set_at`       | O(1) average        |
//! | `insert_at`    | O(n - position)     |
//! | `remove`       | O(n - position)     |
//! | `remove_at`    | O(n - position)     |
//! | `len`          | O(1)                |
//!
//! # Examples
//!
//! ```rust
//! use extended_collections::CollectionError;
//! use extended_collections::dictionary::OrderedDictionary;
//!
//! let mut dictionary = OrderedDictionary::new();
//! dictionary.add("A", "AAA").unwrap();
//! dictionary.add("B", "BBB").unwrap();
//! dictionary.add("C", "CCC").unwrap();
//!
//! // Duplicate keys are rejected and the dictionary is left untouched
//! assert_eq!(
//!     dictionary.add("A", "ZZZ"),
//!     Err(CollectionError::DuplicateKey { existing_index: 0 })
//! );
//! assert_eq!(dictionary.get("A"), Ok(&"AAA"));
//!
//! // Removal keeps both views in sync
//! assert_eq!(dictionary.remove("B"), Some("BBB"));
//! assert!(!dictionary.contains_key("B"));
//! assert_eq!(dictionary.ordered_values(), vec!["AAA", "CCC"]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::{IndexMap, index_map_with_capacity};
use crate::error::{CollectionError, Result};

/// A map that keeps its entries in insertion order and allows positional access.
///
/// Keys are unique. New keys are appended unless inserted at an explicit
/// position; replacing the value of an existing key keeps its position.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash`, `Eq` and `Clone`
///   (keys are held by both the sequence and the index).
/// * `V` - The value type. Unconstrained; snapshot methods require `Clone`.
///
/// # Examples
///
/// ```rust
/// use extended_collections::dictionary::OrderedDictionary;
///
/// let dictionary =
///     OrderedDictionary::try_from_pairs([("one", 1), ("two", 2), ("three", 3)]).unwrap();
///
/// let keys: Vec<&&str> = dictionary.keys().collect();
/// assert_eq!(keys, vec![&"one", &"two", &"three"]);
/// assert_eq!(dictionary.get_at(1), Ok((&"two", &2)));
/// ```
#[derive(Clone)]
pub struct OrderedDictionary<K, V> {
    entries: Vec<(K, V)>,
    index: IndexMap<K, usize>,
}

impl<K, V> OrderedDictionary<K, V> {
    /// Creates a new empty dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let dictionary: OrderedDictionary<String, i32> = OrderedDictionary::new();
    /// assert!(dictionary.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty dictionary with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: index_map_with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns an iterator over `(&K, &V)` in container order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let dictionary = OrderedDictionary::try_from_pairs([("b", 2), ("a", 1)]).unwrap();
    /// let collected: Vec<(&&str, &i32)> = dictionary.iter().collect();
    /// assert_eq!(collected, vec![(&"b", &2), (&"a", &1)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> OrderedDictionaryIterator<'_, K, V> {
        OrderedDictionaryIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in container order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in container order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values in container order.
    ///
    /// Keys cannot be changed through this iterator, so the index stays valid.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    /// Returns the entry at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let dictionary = OrderedDictionary::try_from_pairs([("A", "AAA")]).unwrap();
    /// assert_eq!(dictionary.get_at(0), Ok((&"A", &"AAA")));
    /// assert_eq!(
    ///     dictionary.get_at(1),
    ///     Err(CollectionError::IndexOutOfRange { index: 1, length: 1 })
    /// );
    /// ```
    pub fn get_at(&self, position: usize) -> Result<(&K, &V)> {
        self.entries
            .get(position)
            .map(|(key, value)| (key, value))
            .ok_or(CollectionError::IndexOutOfRange {
                index: position,
                length: self.entries.len(),
            })
    }

    /// Returns the key and a mutable reference to the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn get_at_mut(&mut self, position: usize) -> Result<(&K, &mut V)> {
        let length = self.entries.len();
        self.entries
            .get_mut(position)
            .map(|(key, value)| (&*key, value))
            .ok_or(CollectionError::IndexOutOfRange {
                index: position,
                length,
            })
    }

    /// Returns a copy of the entries in container order.
    ///
    /// Changes to the returned vector are not reflected in the dictionary.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.entries.clone()
    }

    /// Returns a copy of the keys in container order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let dictionary = OrderedDictionary::try_from_pairs([("b", 2), ("a", 1)]).unwrap();
    /// let mut keys = dictionary.ordered_keys();
    /// keys.push("c");
    ///
    /// // The snapshot is independent of the dictionary
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Returns a copy of the values in container order.
    #[must_use]
    pub fn ordered_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    #[inline]
    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.entries.len() {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfRange {
                index: position,
                length: self.entries.len(),
            })
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedDictionary<K, V> {
    /// Creates a dictionary from `(key, value)` pairs, preserving their order.
    ///
    /// Each pair goes through [`add`](Self::add), so a repeated key fails the
    /// same way it would at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if two pairs share a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let result = OrderedDictionary::try_from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(
    ///     result.err(),
    ///     Some(CollectionError::DuplicateKey { existing_index: 0 })
    /// );
    /// ```
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut dictionary = Self::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            dictionary.add(key, value)?;
        }
        Ok(dictionary)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the key is absent.
    /// Use [`try_get`](Self::try_get) for a non-failing lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let dictionary =
    ///     OrderedDictionary::try_from_pairs([("hello".to_string(), 1)]).unwrap();
    /// assert_eq!(dictionary.get("hello"), Ok(&1));
    /// assert_eq!(dictionary.get("world"), Err(CollectionError::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_get(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self
            .index_of_key(key)
            .ok_or(CollectionError::KeyNotFound)?;
        Ok(&mut self.entries[position].1)
    }

    /// Returns a reference to the value stored under `key`, or `None`.
    ///
    /// Agrees with [`get`](Self::get) and [`contains_key`](Self::contains_key)
    /// at all times.
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if `key` is stored in the dictionary.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the position of `key`, or `None` if it is absent.
    #[must_use]
    pub fn index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Returns the position of the entry `(key, value)`, or `None` if no
    /// entry matches both.
    #[must_use]
    pub fn index_of_entry<Q>(&self, key: &Q, value: &V) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.index_of_key(key)
            .filter(|&position| self.entries[position].1 == *value)
    }

    /// Returns `true` if an entry matches both `key` and `value`.
    #[must_use]
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.index_of_entry(key, value).is_some()
    }

    /// Stores `value` under `key`.
    ///
    /// If the key is present its value is replaced in place and the old value
    /// is returned. Otherwise the entry is appended, as with [`add`](Self::add).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let mut dictionary = OrderedDictionary::try_from_pairs([("a", 1), ("b", 2)]).unwrap();
    ///
    /// assert_eq!(dictionary.set("a", 10), Some(1));
    /// assert_eq!(dictionary.set("c", 3), None);
    /// assert_eq!(dictionary.ordered_values(), vec![10, 2, 3]);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.index.entry(key) {
            Entry::Occupied(occupied) => {
                let position = *occupied.get();
                Some(std::mem::replace(&mut self.entries[position].1, value))
            }
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                vacant.insert(self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Replaces the entry at `position` and returns the replaced entry.
    ///
    /// If `key` equals the key already at `position`, only the value changes.
    /// Otherwise the old key leaves the dictionary and `key` takes its place.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    /// - [`CollectionError::DuplicateKey`] if `key` is stored at another
    ///   position. The existing entry at `position` is kept intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let mut dictionary = OrderedDictionary::try_from_pairs([("a", 1), ("b", 2)]).unwrap();
    ///
    /// assert_eq!(dictionary.set_at(0, "z", 26), Ok(("a", 1)));
    /// assert!(!dictionary.contains_key("a"));
    /// assert_eq!(dictionary.get("z"), Ok(&26));
    ///
    /// assert_eq!(
    ///     dictionary.set_at(0, "b", 0),
    ///     Err(CollectionError::DuplicateKey { existing_index: 1 })
    /// );
    /// assert_eq!(dictionary.get_at(0), Ok((&"z", &26)));
    /// ```
    pub fn set_at(&mut self, position: usize, key: K, value: V) -> Result<(K, V)> {
        self.check_position(position)?;

        let same_key = match self.index.get(&key) {
            Some(&existing_index) if existing_index != position => {
                return Err(CollectionError::DuplicateKey { existing_index });
            }
            Some(_) => true,
            None => false,
        };

        if !same_key {
            self.index.remove(&self.entries[position].0);
            self.index.insert(key.clone(), position);
        }
        Ok(std::mem::replace(
            &mut self.entries[position],
            (key, value),
        ))
    }

    /// Appends a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if the key is already
    /// present. The dictionary is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        let length = self.entries.len();
        match self.index.entry(key) {
            Entry::Occupied(occupied) => Err(CollectionError::DuplicateKey {
                existing_index: *occupied.get(),
            }),
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                vacant.insert(length);
                self.entries.push((key, value));
                Ok(())
            }
        }
    }

    /// Inserts a new entry at `position`, shifting later entries back.
    ///
    /// `position == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `position > len()`.
    /// - [`CollectionError::DuplicateKey`] if the key is already present.
    ///
    /// Both checks run before anything is mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let mut dictionary =
    ///     OrderedDictionary::try_from_pairs([("A", "AAA"), ("B", "BBB"), ("C", "CCC")]).unwrap();
    ///
    /// assert_eq!(
    ///     dictionary.insert_at(4, "D", "DDD"),
    ///     Err(CollectionError::IndexOutOfRange { index: 4, length: 3 })
    /// );
    /// dictionary.insert_at(3, "D", "DDD").unwrap();
    /// assert_eq!(dictionary.ordered_keys(), vec!["A", "B", "C", "D"]);
    /// ```
    pub fn insert_at(&mut self, position: usize, key: K, value: V) -> Result<()> {
        let length = self.entries.len();
        if position > length {
            return Err(CollectionError::IndexOutOfRange {
                index: position,
                length,
            });
        }
        if let Some(&existing_index) = self.index.get(&key) {
            return Err(CollectionError::DuplicateKey { existing_index });
        }

        self.entries.insert(position, (key.clone(), value));
        self.index.insert(key, position);
        self.reindex_from(position + 1);
        Ok(())
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// Returns `None`, leaving the dictionary untouched, if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        self.reindex_from(position);
        Some(value)
    }

    /// Removes the entry matching both `key` and `value`.
    ///
    /// Returns `false` if no entry matches both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::dictionary::OrderedDictionary;
    ///
    /// let mut dictionary = OrderedDictionary::try_from_pairs([("B", "BBB")]).unwrap();
    ///
    /// assert!(!dictionary.remove_entry("B", &"XXX"));
    /// assert!(dictionary.remove_entry("B", &"BBB"));
    /// assert!(dictionary.is_empty());
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        let Some(position) = self.index_of_entry(key, value) else {
            return false;
        };
        self.remove_at(position).is_ok()
    }

    /// Removes and returns the entry at `position`, shifting later entries forward.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<(K, V)> {
        self.check_position(position)?;
        let (key, value) = self.entries.remove(position);
        self.index.remove(&key);
        self.reindex_from(position);
        Ok((key, value))
    }

    /// Returns a copy of the entries as a plain `HashMap`.
    ///
    /// The map has no defined order and is independent of the dictionary.
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        V: Clone,
    {
        self.entries.iter().cloned().collect()
    }

    /// Brings the recorded positions of `entries[start..]` up to date after a
    /// shift.
    fn reindex_from(&mut self, start: usize) {
        for (position, (key, _)) in self.entries.iter().enumerate().skip(start) {
            if let Some(recorded) = self.index.get_mut(key) {
                *recorded = position;
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`OrderedDictionary`] in container order.
pub struct OrderedDictionaryIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for OrderedDictionaryIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedDictionaryIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for OrderedDictionaryIterator<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedDictionaryIterator<'_, K, V> {}

/// An owning iterator over the entries of an [`OrderedDictionary`] in container order.
pub struct OrderedDictionaryIntoIterator<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for OrderedDictionaryIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedDictionaryIntoIterator<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for OrderedDictionaryIntoIterator<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for OrderedDictionaryIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for OrderedDictionary<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for OrderedDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedDictionaryIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedDictionaryIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedDictionaryIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq + Clone, V> TryFrom<Vec<(K, V)>> for OrderedDictionary<K, V> {
    type Error = CollectionError;

    fn try_from(pairs: Vec<(K, V)>) -> Result<Self> {
        Self::try_from_pairs(pairs)
    }
}

impl<K, V> From<OrderedDictionary<K, V>> for Vec<(K, V)> {
    fn from(dictionary: OrderedDictionary<K, V>) -> Self {
        dictionary.entries
    }
}

impl<K: Hash + Eq, V> From<OrderedDictionary<K, V>> for HashMap<K, V> {
    fn from(dictionary: OrderedDictionary<K, V>) -> Self {
        dictionary.entries.into_iter().collect()
    }
}

/// Two dictionaries are equal when they hold the same entries in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedDictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedDictionary<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedDictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    impl<K: Hash + Eq + Clone + fmt::Debug, V> OrderedDictionary<K, V> {
        fn assert_consistent(&self) {
            assert_eq!(self.entries.len(), self.index.len());
            for (position, (key, _)) in self.entries.iter().enumerate() {
                assert_eq!(self.index.get(key), Some(&position), "key {key:?}");
            }
        }
    }

    #[fixture]
    fn letters() -> OrderedDictionary<&'static str, &'static str> {
        OrderedDictionary::try_from_pairs([("A", "AAA"), ("B", "BBB"), ("C", "CCC")]).unwrap()
    }

    #[rstest]
    fn test_new_is_consistent() {
        let dictionary: OrderedDictionary<i32, i32> = OrderedDictionary::new();
        dictionary.assert_consistent();
        assert!(dictionary.is_empty());
    }

    #[rstest]
    fn test_insert_at_front_reindexes_following_entries(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        letters.insert_at(0, "D", "DDD").unwrap();
        letters.assert_consistent();
        assert_eq!(letters.index_of_key("A"), Some(1));
        assert_eq!(letters.index_of_key("C"), Some(3));
    }

    #[rstest]
    fn test_remove_middle_reindexes_following_entries(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        assert_eq!(letters.remove("B"), Some("BBB"));
        letters.assert_consistent();
        assert_eq!(letters.index_of_key("C"), Some(1));
    }

    #[rstest]
    fn test_remove_at_reindexes_following_entries(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        assert_eq!(letters.remove_at(0), Ok(("A", "AAA")));
        letters.assert_consistent();
        assert_eq!(letters.index_of_key("B"), Some(0));
    }

    #[rstest]
    fn test_set_at_with_new_key_replaces_index_entry(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        assert_eq!(letters.set_at(1, "Z", "ZZZ"), Ok(("B", "BBB")));
        letters.assert_consistent();
        assert!(!letters.contains_key("B"));
        assert_eq!(letters.index_of_key("Z"), Some(1));
    }

    #[rstest]
    fn test_set_at_with_same_key_updates_value_only(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        assert_eq!(letters.set_at(1, "B", "bbb"), Ok(("B", "BBB")));
        letters.assert_consistent();
        assert_eq!(letters.get("B"), Ok(&"bbb"));
    }

    #[rstest]
    fn test_set_at_duplicate_leaves_structures_untouched(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        let before = letters.clone();
        assert_eq!(
            letters.set_at(0, "C", "ZZZ"),
            Err(CollectionError::DuplicateKey { existing_index: 2 })
        );
        letters.assert_consistent();
        assert_eq!(letters, before);
    }

    #[rstest]
    fn test_failed_add_leaves_structures_untouched(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        let before = letters.clone();
        assert!(letters.add("A", "ZZZ").is_err());
        letters.assert_consistent();
        assert_eq!(letters, before);
    }

    #[rstest]
    fn test_set_appends_absent_key(mut letters: OrderedDictionary<&'static str, &'static str>) {
        assert_eq!(letters.set("D", "DDD"), None);
        letters.assert_consistent();
        assert_eq!(letters.index_of_key("D"), Some(3));
    }

    #[rstest]
    fn test_clear_empties_both_structures(
        mut letters: OrderedDictionary<&'static str, &'static str>,
    ) {
        letters.clear();
        letters.assert_consistent();
        assert!(letters.is_empty());
        assert!(!letters.contains_key("A"));
    }

    #[rstest]
    fn test_equality_is_order_sensitive() {
        let first = OrderedDictionary::try_from_pairs([(1, 'a'), (2, 'b')]).unwrap();
        let second = OrderedDictionary::try_from_pairs([(2, 'b'), (1, 'a')]).unwrap();
        assert_ne!(first, second);
    }

    #[rstest]
    fn test_debug_lists_entries_in_order(letters: OrderedDictionary<&'static str, &'static str>) {
        assert_eq!(
            format!("{letters:?}"),
            r#"{"A": "AAA", "B": "BBB", "C": "CCC"}"#
        );
    }
}

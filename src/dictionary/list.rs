//! Dictionary backed by an independent key list and value map.
//!
//! [`ListDictionary`] keeps the order of its keys in a `Vec<K>` and their
//! values in a hash map. Unlike [`OrderedDictionary`](super::OrderedDictionary),
//! the key at a position can never be swapped by positional assignment:
//! [`set_at`](ListDictionary::set_at) only replaces values.
//!
//! Removal by key locates the position by a linear scan of the key list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::{IndexMap, index_map_with_capacity};
use crate::error::{CollectionError, Result};

/// An insertion-ordered map whose keys are fixed at their positions.
///
/// # Examples
///
/// ```rust
/// use extended_collections::dictionary::ListDictionary;
///
/// let mut dictionary = ListDictionary::new();
/// dictionary.add(0, "ABC").unwrap();
/// dictionary.add(1, "DEF").unwrap();
///
/// assert_eq!(dictionary.index_of_key(&1), Some(1));
/// assert_eq!(dictionary.index_of_value(&"ABC"), Some(0));
/// ```
#[derive(Clone)]
pub struct ListDictionary<K, V> {
    order: Vec<K>,
    values: IndexMap<K, V>,
}

impl<K, V> ListDictionary<K, V> {
    /// Creates a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty dictionary with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            values: index_map_with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.values.clear();
    }

    /// Returns an iterator over the keys in container order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.order.iter()
    }

    /// Returns a copy of the keys in container order.
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.order.clone()
    }

    fn out_of_range(&self, position: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index: position,
            length: self.order.len(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> ListDictionary<K, V> {
    /// Creates a dictionary from `(key, value)` pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if two pairs share a key.
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

    /// Returns an iterator over `(&K, &V)` in container order.
    pub fn iter(&self) -> ListDictionaryIterator<'_, K, V> {
        ListDictionaryIterator {
            order: self.order.iter(),
            values: &self.values,
        }
    }

    /// Returns an iterator over the values in container order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values in container order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::dictionary::ListDictionary;
    ///
    /// let mut dictionary = ListDictionary::try_from_pairs([("b", 2), ("a", 1)]).unwrap();
    /// for value in dictionary.values_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(dictionary.ordered_values(), vec![20, 10]);
    /// ```
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> {
        let mut slots: IndexMap<&K, &mut V> = index_map_with_capacity(self.values.len());
        slots.extend(self.values.iter_mut());
        self.order.iter().filter_map(move |key| slots.remove(key))
    }

    /// Returns a copy of the values in container order.
    #[must_use]
    pub fn ordered_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.get(key).ok_or(CollectionError::KeyNotFound)
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
        self.values.get_mut(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Returns a reference to the value stored under `key`, or `None`.
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.get(key)
    }

    /// Returns `true` if `key` is stored in the dictionary.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.contains_key(key)
    }

    /// Returns the position of `key`, or `None` if it is absent.
    #[must_use]
    pub fn index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.values.contains_key(key) {
            return None;
        }
        self.order
            .iter()
            .position(|candidate| <K as Borrow<Q>>::borrow(candidate) == key)
    }

    /// Returns the position of the first entry holding `value`.
    #[must_use]
    pub fn index_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.values().position(|candidate| candidate == value)
    }

    /// Returns the position of the entry `(key, value)`.
    #[must_use]
    pub fn index_of_entry<Q>(&self, key: &Q, value: &V) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        match self.values.get(key) {
            Some(stored) if stored == value => self.index_of_key(key),
            _ => None,
        }
    }

    /// Returns `true` if an entry matches both `key` and `value`.
    #[must_use]
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.values.get(key).is_some_and(|stored| stored == value)
    }

    /// Stores `value` under `key`, replacing and returning any previous value.
    ///
    /// An absent key is appended.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(stored) = self.values.get_mut(&key) {
            return Some(std::mem::replace(stored, value));
        }
        self.order.push(key.clone());
        self.values.insert(key, value);
        None
    }

    /// Returns the entry at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn get_at(&self, position: usize) -> Result<(&K, &V)> {
        self.order
            .get(position)
            .and_then(|key| self.values.get_key_value(key))
            .ok_or_else(|| self.out_of_range(position))
    }

    /// Returns the key and a mutable reference to the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn get_at_mut(&mut self, position: usize) -> Result<(&K, &mut V)> {
        let length = self.order.len();
        let out_of_range = CollectionError::IndexOutOfRange {
            index: position,
            length,
        };
        let key = self.order.get(position).ok_or(out_of_range)?;
        let value = self.values.get_mut(key).ok_or(out_of_range)?;
        Ok((key, value))
    }

    /// Returns a copy of the entries in container order.
    ///
    /// Changes to the returned vector are not reflected in the dictionary.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns a copy of the entries as a plain `HashMap`.
    ///
    /// The map has no defined order and is independent of the dictionary.
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        V: Clone,
    {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Replaces the value at `position` and returns the previous value.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    /// - [`CollectionError::KeyMismatch`] if `key` differs from the key
    ///   stored at `position`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::CollectionError;
    /// use extended_collections::dictionary::ListDictionary;
    ///
    /// let mut dictionary = ListDictionary::try_from_pairs([("a", 1), ("b", 2)]).unwrap();
    ///
    /// assert_eq!(dictionary.set_at(1, "b", 20), Ok(2));
    /// assert_eq!(dictionary.set_at(1, "c", 30), Err(CollectionError::KeyMismatch));
    /// assert_eq!(dictionary.get("b"), Ok(&20));
    /// ```
    pub fn set_at(&mut self, position: usize, key: K, value: V) -> Result<V> {
        let stored_key = self
            .order
            .get(position)
            .ok_or_else(|| self.out_of_range(position))?;
        if *stored_key != key {
            return Err(CollectionError::KeyMismatch);
        }
        self.values
            .get_mut(&key)
            .map(|stored| std::mem::replace(stored, value))
            .ok_or(CollectionError::KeyNotFound)
    }

    /// Appends a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] if the key is already present.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        self.ensure_vacant(&key)?;
        self.order.push(key.clone());
        self.values.insert(key, value);
        Ok(())
    }

    /// Inserts a new entry at `position`; `position == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `position > len()`.
    /// - [`CollectionError::DuplicateKey`] if the key is already present.
    pub fn insert_at(&mut self, position: usize, key: K, value: V) -> Result<()> {
        if position > self.order.len() {
            return Err(self.out_of_range(position));
        }
        self.ensure_vacant(&key)?;
        self.order.insert(position, key.clone());
        self.values.insert(key, value);
        Ok(())
    }

    /// Removes the entry stored under `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index_of_key(key)?;
        self.order.remove(position);
        self.values.remove(key)
    }

    /// Removes the entry matching both `key` and `value`.
    pub fn remove_entry<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        if self.contains_entry(key, value) {
            self.remove(key).is_some()
        } else {
            false
        }
    }

    /// Removes and returns the entry at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<(K, V)> {
        if position >= self.order.len() {
            return Err(self.out_of_range(position));
        }
        let key = self.order.remove(position);
        self.values
            .remove_entry(&key)
            .ok_or(CollectionError::KeyNotFound)
    }

    fn ensure_vacant(&self, key: &K) -> Result<()> {
        match self.index_of_key(key) {
            Some(existing_index) => Err(CollectionError::DuplicateKey { existing_index }),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`ListDictionary`] in container order.
pub struct ListDictionaryIterator<'a, K, V> {
    order: std::slice::Iter<'a, K>,
    values: &'a IndexMap<K, V>,
}

impl<'a, K: Hash + Eq, V> Iterator for ListDictionaryIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let values = self.values;
        self.order.find_map(|key| values.get_key_value(key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K: Hash + Eq, V> DoubleEndedIterator for ListDictionaryIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.order.next_back() {
            if let Some(entry) = self.values.get_key_value(key) {
                return Some(entry);
            }
        }
        None
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for ListDictionaryIterator<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K: Hash + Eq, V> FusedIterator for ListDictionaryIterator<'_, K, V> {}

/// An owning iterator over the entries of a [`ListDictionary`] in container order.
pub struct ListDictionaryIntoIterator<K, V> {
    order: std::vec::IntoIter<K>,
    values: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Iterator for ListDictionaryIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let values = &mut self.values;
        self.order.find_map(|key| values.remove_entry(&key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K: Hash + Eq, V> DoubleEndedIterator for ListDictionaryIntoIterator<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.order.next_back() {
            if let Some(entry) = self.values.remove_entry(&key) {
                return Some(entry);
            }
        }
        None
    }
}

impl<K: Hash + Eq, V> ExactSizeIterator for ListDictionaryIntoIterator<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K: Hash + Eq, V> FusedIterator for ListDictionaryIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for ListDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> TryFrom<Vec<(K, V)>> for ListDictionary<K, V> {
    type Error = CollectionError;

    fn try_from(pairs: Vec<(K, V)>) -> Result<Self> {
        Self::try_from_pairs(pairs)
    }
}

impl<K: Hash + Eq, V> IntoIterator for ListDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = ListDictionaryIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ListDictionaryIntoIterator {
            order: self.order.into_iter(),
            values: self.values,
        }
    }
}

impl<'a, K: Hash + Eq + Clone, V> IntoIterator for &'a ListDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ListDictionaryIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V> From<ListDictionary<K, V>> for Vec<(K, V)> {
    fn from(dictionary: ListDictionary<K, V>) -> Self {
        dictionary.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> From<ListDictionary<K, V>> for HashMap<K, V> {
    fn from(dictionary: ListDictionary<K, V>) -> Self {
        dictionary.values.into_iter().collect()
    }
}

/// Two dictionaries are equal when they hold the same entries in the same order.
impl<K: Hash + Eq + Clone, V: PartialEq> PartialEq for ListDictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.iter().eq(other.iter())
    }
}

impl<K: Hash + Eq + Clone, V: Eq> Eq for ListDictionary<K, V> {}

impl<K: Hash + Eq + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for ListDictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_order_and_values_stay_in_step() {
        let mut dictionary = ListDictionary::try_from_pairs([(0, "ABC"), (1, "DEF")]).unwrap();
        dictionary.insert_at(1, 2, "GHI").unwrap();
        dictionary.remove(&0);

        assert_eq!(dictionary.order, vec![2, 1]);
        assert_eq!(dictionary.values.len(), 2);
        assert_eq!(dictionary.ordered_values(), vec!["GHI", "DEF"]);
    }

    #[rstest]
    fn test_owned_iteration_drains_in_order_from_both_ends() {
        let dictionary =
            ListDictionary::try_from_pairs([(3, "C"), (1, "A"), (2, "B")]).unwrap();
        let mut entries = dictionary.into_iter();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries.next(), Some((3, "C")));
        assert_eq!(entries.next_back(), Some((2, "B")));
        assert_eq!(entries.next(), Some((1, "A")));
        assert_eq!(entries.next(), None);
        assert!(entries.values.is_empty());
    }

    #[rstest]
    fn test_values_mut_visits_each_value_once_in_order() {
        let mut dictionary =
            ListDictionary::try_from_pairs([(9, 1), (4, 2), (7, 3)]).unwrap();
        let mut visited = Vec::new();
        for (step, value) in dictionary.values_mut().enumerate() {
            visited.push(*value);
            *value = step * 100;
        }

        assert_eq!(visited, vec![1, 2, 3]);
        assert_eq!(dictionary.ordered_values(), vec![0, 100, 200]);
    }

    #[rstest]
    fn test_failed_insert_touches_neither_structure() {
        let mut dictionary = ListDictionary::try_from_pairs([(0, "ABC"), (1, "DEF")]).unwrap();
        assert_eq!(
            dictionary.insert_at(0, 1, "XYZ"),
            Err(CollectionError::DuplicateKey { existing_index: 1 })
        );
        assert_eq!(dictionary.order, vec![0, 1]);
        assert_eq!(dictionary.values.get(&1), Some(&"DEF"));
    }

    #[rstest]
    fn test_set_at_mismatch_touches_neither_structure() {
        let mut dictionary = ListDictionary::try_from_pairs([(0, "ABC")]).unwrap();
        assert_eq!(
            dictionary.set_at(0, 7, "XYZ"),
            Err(CollectionError::KeyMismatch)
        );
        assert_eq!(dictionary.order, vec![0]);
        assert!(!dictionary.values.contains_key(&7));
    }
}

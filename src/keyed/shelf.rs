//! A reduced-surface keyed container over [`ListDictionary`].

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::{KeySelector, SelectorBound, key_selector};
use crate::dictionary::ListDictionary;
use crate::error::{CollectionError, Result};

/// Where a [`Shelf`] gets the key of a value from.
#[derive(Clone)]
enum KeySource<K, V> {
    /// Every call supplies the key.
    Explicit,
    /// Keys are computed from values.
    Derived(KeySelector<K, V>),
}

/// An ordered container keyed either explicitly or through a key selector.
///
/// The two configurations are fixed at construction:
///
/// - [`Shelf::explicit`]: keys are passed with each value, and value-only
///   additions fail with [`CollectionError::MissingKeySelector`].
/// - [`Shelf::with_key_selector`]: keys are derived from values, and an
///   explicitly passed key must equal the derived one, otherwise
///   [`CollectionError::KeyMismatch`].
///
/// The key at a position never changes through positional assignment.
///
/// # Examples
///
/// ```rust
/// use extended_collections::keyed::Shelf;
///
/// let mut shelf = Shelf::with_key_selector(|value: &String| value.len());
/// shelf.add("one".to_string()).unwrap();
///
/// assert_eq!(shelf.try_add("two".to_string()), Ok(false));
/// assert_eq!(shelf.try_add("three".to_string()), Ok(true));
/// assert_eq!(shelf.get(&5_usize), Ok(&"three".to_string()));
/// ```
#[derive(Clone)]
pub struct Shelf<K, V> {
    dictionary: ListDictionary<K, V>,
    key_source: KeySource<K, V>,
}

impl<K, V> Shelf<K, V> {
    /// Creates an empty shelf whose keys are supplied per call.
    #[must_use]
    pub fn explicit() -> Self {
        Self {
            dictionary: ListDictionary::new(),
            key_source: KeySource::Explicit,
        }
    }

    /// Creates an empty shelf whose keys are computed by `selector`.
    #[must_use]
    pub fn with_key_selector<F>(selector: F) -> Self
    where
        F: Fn(&V) -> K + SelectorBound + 'static,
    {
        Self {
            dictionary: ListDictionary::new(),
            key_source: KeySource::Derived(key_selector(selector)),
        }
    }

    /// Returns `true` if keys are derived from values.
    #[must_use]
    pub const fn has_key_selector(&self) -> bool {
        matches!(self.key_source, KeySource::Derived(_))
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Returns `true` if the shelf holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.dictionary.clear();
    }

    /// Returns the keys in container order.
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.dictionary.ordered_keys()
    }

    fn derived_key(&self, value: &V) -> Result<K> {
        match &self.key_source {
            KeySource::Derived(selector) => Ok(selector(value)),
            KeySource::Explicit => Err(CollectionError::MissingKeySelector),
        }
    }
}

impl<K: Hash + Eq + Clone, V> Shelf<K, V> {
    /// Returns an iterator over the values in container order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.dictionary.values()
    }

    /// Returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn get_at(&self, position: usize) -> Result<&V> {
        self.dictionary.get_at(position).map(|(_, value)| value)
    }

    /// Replaces the value at `position` and returns the previous value.
    ///
    /// With a key selector the key of `value` must equal the key stored at
    /// `position`. Without one the stored key is kept.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    /// - [`CollectionError::KeyMismatch`] if the derived key differs from
    ///   the key at `position`.
    pub fn set_at(&mut self, position: usize, value: V) -> Result<V> {
        let key = match &self.key_source {
            KeySource::Derived(selector) => selector(&value),
            KeySource::Explicit => self.dictionary.get_at(position)?.0.clone(),
        };
        self.dictionary.set_at(position, key, value)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if `key` is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.get(key)
    }

    /// Returns the value stored under `key`, or `None` if absent.
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.try_get(key)
    }

    /// Stores `value` under `key`, replacing and returning any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyMismatch`] if a key selector is
    /// configured and `key` differs from the key it computes for `value`.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.ensure_key_matches(&key, &value)?;
        Ok(self.dictionary.set(key, value))
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.contains_key(key)
    }

    /// Returns the position of `key`.
    #[must_use]
    pub fn index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.index_of_key(key)
    }

    /// Returns `true` if an equal value is present.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first equal value.
    #[must_use]
    pub fn index_of(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.dictionary.index_of_value(value)
    }

    /// Appends `value` under its derived key.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::MissingKeySelector`] if the shelf is explicit.
    /// - [`CollectionError::DuplicateKey`] if the derived key is present.
    pub fn add(&mut self, value: V) -> Result<()> {
        let key = self.derived_key(&value)?;
        self.dictionary.add(key, value)
    }

    /// Appends `value` under `key`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::KeyMismatch`] if a key selector disagrees with `key`.
    /// - [`CollectionError::DuplicateKey`] if `key` is present.
    pub fn add_with_key(&mut self, key: K, value: V) -> Result<()> {
        self.ensure_key_matches(&key, &value)?;
        self.dictionary.add(key, value)
    }

    /// Appends `value` under its derived key unless the key is present.
    ///
    /// Returns `Ok(false)` and leaves the shelf unchanged on a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingKeySelector`] if the shelf is explicit.
    pub fn try_add(&mut self, value: V) -> Result<bool> {
        let key = self.derived_key(&value)?;
        Ok(self.add_if_vacant(key, value))
    }

    /// Appends `value` under `key` unless the key is present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyMismatch`] if a key selector disagrees with `key`.
    pub fn try_add_with_key(&mut self, key: K, value: V) -> Result<bool> {
        self.ensure_key_matches(&key, &value)?;
        Ok(self.add_if_vacant(key, value))
    }

    /// Inserts `value` under its derived key at `position`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::MissingKeySelector`] if the shelf is explicit.
    /// - [`CollectionError::IndexOutOfRange`] if `position > len()`.
    /// - [`CollectionError::DuplicateKey`] if the derived key is present.
    pub fn insert_at(&mut self, position: usize, value: V) -> Result<()> {
        let key = self.derived_key(&value)?;
        self.dictionary.insert_at(position, key, value)
    }

    /// Inserts `value` under `key` at `position`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::KeyMismatch`] if a key selector disagrees with `key`.
    /// - [`CollectionError::IndexOutOfRange`] if `position > len()`.
    /// - [`CollectionError::DuplicateKey`] if `key` is present.
    pub fn insert_at_with_key(&mut self, position: usize, key: K, value: V) -> Result<()> {
        self.ensure_key_matches(&key, &value)?;
        self.dictionary.insert_at(position, key, value)
    }

    /// Removes the first value equal to `value`.
    pub fn remove(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.index_of(value)
            .is_some_and(|position| self.dictionary.remove_at(position).is_ok())
    }

    /// Removes the value stored under `key`.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dictionary.remove(key)
    }

    /// Removes and returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<V> {
        self.dictionary.remove_at(position).map(|(_, value)| value)
    }

    fn ensure_key_matches(&self, key: &K, value: &V) -> Result<()> {
        match &self.key_source {
            KeySource::Derived(selector) if selector(value) != *key => {
                Err(CollectionError::KeyMismatch)
            }
            _ => Ok(()),
        }
    }

    fn add_if_vacant(&mut self, key: K, value: V) -> bool {
        if self.dictionary.contains_key(&key) {
            return false;
        }
        self.dictionary.add(key, value).is_ok()
    }
}

impl<K, V> Default for Shelf<K, V> {
    fn default() -> Self {
        Self::explicit()
    }
}

impl<K: Hash + Eq + Clone, V: PartialEq> PartialEq for Shelf<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.dictionary == other.dictionary
    }
}

impl<K: Hash + Eq + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for Shelf<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Shelf")
            .field("entries", &self.dictionary)
            .field("has_key_selector", &self.has_key_selector())
            .finish()
    }
}

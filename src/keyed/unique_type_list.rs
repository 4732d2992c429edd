//! A list holding at most one value per runtime type.
//!
//! [`UniqueTypeList`] is a [`KeyedList`] whose key selector returns the
//! [`TypeId`] of each value. Values are stored in [`TypeSlot`]s; a slot
//! records the type it is keyed under, so a slot that was explicitly emptied
//! with [`set_none`](UniqueTypeList::set_none) still has a key without any
//! value to compute it from.
//!
//! # Examples
//!
//! ```rust
//! use extended_collections::keyed::UniqueTypeList;
//!
//! let mut list = UniqueTypeList::new();
//! list.set(0_i32).unwrap();
//! list.set("A").unwrap();
//! list.set(1.0_f64).unwrap();
//!
//! assert_eq!(list.get::<i32>(), Ok(Some(&0)));
//! assert_eq!(list.get::<&str>(), Ok(Some(&"A")));
//! assert_eq!(list.get::<f64>(), Ok(Some(&1.0)));
//!
//! // A second value of the same type is rejected
//! assert!(list.set("B").is_err());
//! assert_eq!(list.get::<&str>(), Ok(Some(&"A")));
//!
//! // Explicitly storing "no value" for a type
//! list.set_none::<&str>();
//! assert_eq!(list.get::<&str>(), Ok(None));
//! ```

use std::any::{Any, TypeId};
use std::fmt;

use super::KeyedList;
use super::keyed_list::KeyedListIterator;
use crate::error::Result;

/// A value stored in a [`UniqueTypeList`], tagged with the type it is keyed under.
///
/// A slot is either filled with a value of that type or empty.
pub struct TypeSlot {
    type_id: TypeId,
    value: Option<Box<dyn Any>>,
}

impl TypeSlot {
    /// Creates a slot holding `value`, keyed by `T`.
    #[must_use]
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            value: Some(Box::new(value)),
        }
    }

    /// Creates an empty slot keyed by `T`.
    #[must_use]
    pub fn empty<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            value: None,
        }
    }

    /// Creates a slot keyed by the runtime type of the boxed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::{Any, TypeId};
    /// use extended_collections::keyed::TypeSlot;
    ///
    /// let boxed: Box<dyn Any> = Box::new(7_u8);
    /// let slot = TypeSlot::from_boxed(boxed);
    /// assert_eq!(slot.type_id(), TypeId::of::<u8>());
    /// assert_eq!(slot.downcast_ref::<u8>(), Some(&7));
    /// ```
    #[must_use]
    pub fn from_boxed(value: Box<dyn Any>) -> Self {
        Self {
            type_id: Any::type_id(&*value),
            value: Some(value),
        }
    }

    /// Returns the type this slot is keyed under.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the slot holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if the slot is keyed by `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the value if the slot is filled and keyed by `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_deref()?.downcast_ref()
    }

    /// Returns the value mutably if the slot is filled and keyed by `T`.
    #[must_use]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.as_deref_mut()?.downcast_mut()
    }

    /// Unwraps the slot into its value.
    ///
    /// Returns `Ok(None)` for an empty slot keyed by `T`, and gives the slot
    /// back as `Err` if it is keyed by another type.
    ///
    /// # Errors
    ///
    /// Returns the slot itself if it is not keyed by `T`.
    pub fn into_inner<T: Any>(self) -> std::result::Result<Option<T>, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.value {
            None => Ok(None),
            Some(boxed) => boxed
                .downcast::<T>()
                .map(|value| Some(*value))
                .map_err(Self::from_boxed),
        }
    }
}

impl fmt::Debug for TypeSlot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TypeSlot")
            .field("type_id", &self.type_id)
            .field("is_empty", &self.is_empty())
            .finish()
    }
}

fn slot_type(slot: &TypeSlot) -> TypeId {
    slot.type_id()
}

/// A list in which each runtime type has at most one entry.
///
/// [`set`](Self::set) stores a value under its type and fails with
/// [`CollectionError::DuplicateKey`](crate::error::CollectionError::DuplicateKey)
/// if the type is already present; use [`replace`](Self::replace) for replace
/// semantics.
pub struct UniqueTypeList {
    list: KeyedList<TypeId, TypeSlot>,
}

impl UniqueTypeList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: KeyedList::with_key_selector(slot_type),
        }
    }

    /// Creates an empty list with room for `capacity` types.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: KeyedList::with_key_selector_and_capacity(slot_type, capacity),
        }
    }

    /// Creates a list from boxed values, keyed by their runtime types.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`](crate::error::CollectionError::DuplicateKey) if two values share a type.
    pub fn try_from_boxed<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        Ok(Self {
            list: KeyedList::try_from_values(
                slot_type,
                values.into_iter().map(TypeSlot::from_boxed),
            )?,
        })
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every slot.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the slots in container order.
    #[must_use]
    pub fn iter(&self) -> KeyedListIterator<'_, TypeId, TypeSlot> {
        self.list.iter()
    }

    /// Stores `value` under its type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`](crate::error::CollectionError::DuplicateKey) if a slot for `T` exists,
    /// filled or empty. The stored slot is left unchanged.
    pub fn set<T: Any>(&mut self, value: T) -> Result<()> {
        self.list.add(TypeSlot::new(value))
    }

    /// Stores a boxed value under its runtime type.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`](crate::error::CollectionError::DuplicateKey) if a slot for that type exists.
    pub fn add_boxed(&mut self, value: Box<dyn Any>) -> Result<()> {
        self.list.add(TypeSlot::from_boxed(value))
    }

    /// Stores a slot under the type it is keyed by.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`](crate::error::CollectionError::DuplicateKey) if a slot for that type exists.
    pub fn add_slot(&mut self, slot: TypeSlot) -> Result<()> {
        self.list.add(slot)
    }

    /// Inserts `value` under its type `T` at `position`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`](crate::error::CollectionError::IndexOutOfRange) if `position > len()`.
    /// - [`CollectionError::DuplicateKey`](crate::error::CollectionError::DuplicateKey) if a slot for `T` exists.
    pub fn insert<T: Any>(&mut self, position: usize, value: T) -> Result<()> {
        self.list.insert(position, TypeSlot::new(value))
    }

    /// Returns the value stored for `T`.
    ///
    /// Returns `Ok(None)` if the slot for `T` was emptied with
    /// [`set_none`](Self::set_none).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`](crate::error::CollectionError::KeyNotFound) if there is no slot for `T`.
    pub fn get<T: Any>(&self) -> Result<Option<&T>> {
        self.list
            .get(&TypeId::of::<T>())
            .map(TypeSlot::downcast_ref)
    }

    /// Returns the value stored for `T` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`](crate::error::CollectionError::KeyNotFound) if there is no slot for `T`.
    pub fn get_mut<T: Any>(&mut self) -> Result<Option<&mut T>> {
        self.list
            .get_mut(&TypeId::of::<T>())
            .map(TypeSlot::downcast_mut)
    }

    /// Returns the value stored for `T`, or `None` if it is absent or empty.
    #[must_use]
    pub fn try_get<T: Any>(&self) -> Option<&T> {
        self.list.try_get(&TypeId::of::<T>())?.downcast_ref()
    }

    /// Stores `value` for `T`, replacing and returning any existing slot.
    ///
    /// A new type is appended; an existing type keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extended_collections::keyed::UniqueTypeList;
    ///
    /// let mut list = UniqueTypeList::new();
    /// list.set(String::from("A")).unwrap();
    ///
    /// let previous = list.replace(String::from("B")).unwrap();
    /// assert_eq!(previous.into_inner::<String>().unwrap(), Some("A".to_string()));
    /// assert_eq!(list.get::<String>(), Ok(Some(&"B".to_string())));
    /// ```
    pub fn replace<T: Any>(&mut self, value: T) -> Option<TypeSlot> {
        self.list.set(TypeId::of::<T>(), TypeSlot::new(value))
    }

    /// Stores "no value" for `T`, replacing and returning any existing slot.
    pub fn set_none<T: Any>(&mut self) -> Option<TypeSlot> {
        self.list.set(TypeId::of::<T>(), TypeSlot::empty::<T>())
    }

    /// Returns `true` if a slot for `T` exists, filled or empty.
    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.list.contains_key(&TypeId::of::<T>())
    }

    /// Returns the position of the slot for `T`.
    #[must_use]
    pub fn index_of<T: Any>(&self) -> Option<usize> {
        self.list.index_of_key(&TypeId::of::<T>())
    }

    /// Removes and returns the slot for `T`.
    pub fn remove<T: Any>(&mut self) -> Option<TypeSlot> {
        self.list.remove_key(&TypeId::of::<T>())
    }

    /// Returns the slot at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`](crate::error::CollectionError::IndexOutOfRange) if `position >= len()`.
    pub fn get_at(&self, position: usize) -> Result<&TypeSlot> {
        self.list.get_at(position)
    }

    /// Removes and returns the slot at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`](crate::error::CollectionError::IndexOutOfRange) if `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Result<TypeSlot> {
        self.list.remove_at(position)
    }

    /// Returns the types held, in container order.
    #[must_use]
    pub fn ordered_types(&self) -> Vec<TypeId> {
        self.list.ordered_keys()
    }
}

impl Default for UniqueTypeList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a UniqueTypeList {
    type Item = &'a TypeSlot;
    type IntoIter = KeyedListIterator<'a, TypeId, TypeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for UniqueTypeList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

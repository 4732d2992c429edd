//! # extended-collections
//!
//! Insertion-ordered keyed collections for Rust.
//!
//! ## Overview
//!
//! The standard library offers either key lookup (`HashMap`) or positional
//! access (`Vec`), never both on the same container. This library provides
//! containers that keep a hash index and an ordered sequence in lockstep:
//!
//! - **Dictionaries**: [`OrderedDictionary`](dictionary::OrderedDictionary) and
//!   [`ListDictionary`](dictionary::ListDictionary), maps with positional
//!   get, set, insert and remove
//! - **Keyed lists**: [`KeyedList`](keyed::KeyedList), a list whose keys are
//!   computed from its values by a key selector
//! - **Type-keyed lists**: [`UniqueTypeList`](keyed::UniqueTypeList), holding at
//!   most one value per runtime type
//! - **Shelves**: [`Shelf`](keyed::Shelf), a reduced-surface keyed container
//!
//! Keys are unique within a container. Every failing operation leaves the
//! container exactly as it was.
//!
//! ## Feature Flags
//!
//! - `dictionary`: `OrderedDictionary` and `ListDictionary`
//! - `keyed`: `KeyedList`, `UniqueTypeList` and `Shelf` (implies `dictionary`)
//! - `arc`: use `Arc` for key selectors so keyed containers can be `Send + Sync`
//! - `fxhash`: use `rustc-hash` for the position index
//! - `ahash`: use `ahash` for the position index
//!
//! ## Example
//!
//! ```rust
//! use extended_collections::prelude::*;
//!
//! let mut dictionary = OrderedDictionary::new();
//! dictionary.add("A", "AAA").unwrap();
//! dictionary.add("B", "BBB").unwrap();
//! dictionary.insert_at(1, "C", "CCC").unwrap();
//!
//! assert_eq!(dictionary.ordered_keys(), vec!["A", "C", "B"]);
//! assert_eq!(dictionary.get_at(1), Ok((&"C", &"CCC")));
//! assert_eq!(
//!     dictionary.add("A", "ZZZ"),
//!     Err(CollectionError::DuplicateKey { existing_index: 0 })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers and the error type.
///
/// # Usage
///
/// ```rust
/// use extended_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CollectionError, Result};

    #[cfg(feature = "dictionary")]
    pub use crate::dictionary::*;

    #[cfg(feature = "keyed")]
    pub use crate::keyed::*;
}

pub mod error;

pub use error::{CollectionError, Result};

#[cfg(feature = "dictionary")]
pub mod dictionary;

#[cfg(feature = "keyed")]
pub mod keyed;

#[cfg(feature = "dictionary")]
static_assertions::assert_impl_all!(dictionary::OrderedDictionary<String, i32>: Send, Sync, Clone);

#[cfg(feature = "dictionary")]
static_assertions::assert_impl_all!(dictionary::ListDictionary<String, i32>: Send, Sync, Clone, Eq);

#[cfg(all(feature = "keyed", feature = "arc"))]
static_assertions::assert_impl_all!(keyed::KeyedList<String, String>: Send, Sync);

#[cfg(all(feature = "keyed", feature = "arc"))]
static_assertions::assert_impl_all!(keyed::Shelf<String, String>: Send, Sync);

#[cfg(all(feature = "keyed", not(feature = "arc")))]
static_assertions::assert_not_impl_any!(keyed::KeyedList<String, String>: Send, Sync);

#[cfg(all(feature = "keyed", not(feature = "arc")))]
static_assertions::assert_not_impl_any!(keyed::Shelf<String, String>: Send, Sync);

#[cfg(all(test, feature = "keyed"))]
mod tests {
    use super::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn test_prelude_exposes_containers() {
        let dictionary: OrderedDictionary<i32, i32> = OrderedDictionary::new();
        let list: KeyedList<i32, i32> = KeyedList::new();
        assert!(dictionary.is_empty());
        assert!(list.is_empty());
    }
}

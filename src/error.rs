//! Error types shared by every container in this crate.
//!
//! All fallible operations return [`Result`], whose error side is a
//! [`CollectionError`]. A container that returns an error has not been
//! modified: every check runs before either of its internal structures
//! is touched.

use std::fmt;

/// Represents the ways a container operation can fail.
///
/// # Examples
///
/// ```rust
/// use extended_collections::CollectionError;
/// use extended_collections::dictionary::OrderedDictionary;
///
/// let mut dictionary = OrderedDictionary::new();
/// dictionary.add("A", "AAA").unwrap();
///
/// assert_eq!(
///     dictionary.add("A", "ZZZ"),
///     Err(CollectionError::DuplicateKey { existing_index: 0 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// The key is already stored in the container.
    DuplicateKey {
        /// Position of the entry that already holds the key.
        existing_index: usize,
    },

    /// The key is not stored in the container.
    KeyNotFound,

    /// The position is outside the valid range for the operation.
    ///
    /// Insertion accepts `index == length` (append); every other positional
    /// operation requires `index < length`.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of entries at the time of the call.
        length: usize,
    },

    /// A value-only operation was called on a container that has no key
    /// selector configured.
    MissingKeySelector,

    /// The key supplied for a fixed position or a derived-key container does
    /// not match the key already stored there, or the key the selector derives.
    KeyMismatch,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { existing_index } => {
                write!(
                    formatter,
                    "an entry with the same key already exists at index {existing_index}"
                )
            }
            Self::KeyNotFound => write!(formatter, "the given key was not present"),
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "index {index} is out of range for a container of length {length}"
                )
            }
            Self::MissingKeySelector => {
                write!(formatter, "no key selector is configured for this container")
            }
            Self::KeyMismatch => write!(
                formatter,
                "the given key does not match the key expected for this entry"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::duplicate_key(
        CollectionError::DuplicateKey { existing_index: 2 },
        "an entry with the same key already exists at index 2"
    )]
    #[case::key_not_found(CollectionError::KeyNotFound, "the given key was not present")]
    #[case::index_out_of_range(
        CollectionError::IndexOutOfRange { index: 4, length: 3 },
        "index 4 is out of range for a container of length 3"
    )]
    #[case::missing_key_selector(
        CollectionError::MissingKeySelector,
        "no key selector is configured for this container"
    )]
    #[case::key_mismatch(
        CollectionError::KeyMismatch,
        "the given key does not match the key expected for this entry"
    )]
    fn test_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = CollectionError::KeyNotFound;
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_error_is_boxable() {
        let boxed: Box<dyn std::error::Error> = Box::new(CollectionError::KeyMismatch);
        assert_eq!(
            boxed.to_string(),
            "the given key does not match the key expected for this entry"
        );
    }
}

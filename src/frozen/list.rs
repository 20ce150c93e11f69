//! Read-only sequence.
//!
//! [`FrozenList`] owns an immutable `Arc<[T]>`. All read access goes through
//! shared borrows (it dereferences to `[T]`), so the usual slice methods such
//! as `get`, `first`, `last` and `contains` are available directly.
//!
//! # Examples
//!
//! ```rust
//! use collection_util::frozen::FrozenList;
//!
//! let list: FrozenList<Option<char>> = [Some('a'), None, Some('c')].into_iter().collect();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list[1], None);
//! assert_eq!(list.last(), Some(&Some('c')));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Deref;
use std::sync::Arc;

use super::rejected;
use crate::error::CollectionError;
#[cfg(feature = "merge")]
use crate::merge::Merge;
use crate::mutation::{MutableCollection, MutableSequence};

const COLLECTION_NAME: &str = "FrozenList";

/// A read-only, null-tolerant sequence.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `from_slice`   | O(n)       |
/// | `len`          | O(1)       |
/// | `get`          | O(1)       |
/// | `clone`        | O(1)       |
/// | `merged`       | O(n + m)   |
///
/// # Examples
///
/// ```rust
/// use collection_util::frozen::FrozenList;
///
/// let list = FrozenList::from_slice(&[1, 2, 3]);
/// assert_eq!(list, [1, 2, 3]);
/// ```
pub struct FrozenList<T> {
    elements: Arc<[T]>,
}

impl<T> FrozenList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_util::frozen::FrozenList;
    ///
    /// let list: FrozenList<i32> = FrozenList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Arc::from(Vec::<T>::new()),
        }
    }

    /// Creates a list holding clones of `elements`, in order.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            elements: Arc::from(elements),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements, in order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for FrozenList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FrozenList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T> Deref for FrozenList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T> AsRef<[T]> for FrozenList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> From<Vec<T>> for FrozenList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: Arc::from(elements),
        }
    }
}

impl<T> FromIterator<T> for FrozenList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FrozenList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

impl<T: PartialEq> PartialEq for FrozenList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FrozenList<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for FrozenList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<FrozenList<T>> for Vec<T> {
    fn eq(&self, other: &FrozenList<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for FrozenList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for FrozenList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FrozenList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for FrozenList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for FrozenList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FrozenList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Merge and Mutation
// =============================================================================

#[cfg(feature = "merge")]
impl<T: Clone> Merge for FrozenList<T> {
    fn merged(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T> MutableCollection<T> for FrozenList<T> {
    fn try_add(&mut self, _value: T) -> Result<bool, CollectionError> {
        Err(rejected(COLLECTION_NAME, "try_add"))
    }

    fn try_remove_value(&mut self, _value: &T) -> Result<bool, CollectionError> {
        Err(rejected(COLLECTION_NAME, "try_remove_value"))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Err(rejected(COLLECTION_NAME, "try_clear"))
    }
}

impl<T> MutableSequence<T> for FrozenList<T> {
    fn try_insert(&mut self, _index: usize, _value: T) -> Result<(), CollectionError> {
        Err(rejected(COLLECTION_NAME, "try_insert"))
    }

    fn try_replace(&mut self, _index: usize, _value: T) -> Result<T, CollectionError> {
        Err(rejected(COLLECTION_NAME, "try_replace"))
    }

    fn try_remove_at(&mut self, _index: usize) -> Result<T, CollectionError> {
        Err(rejected(COLLECTION_NAME, "try_remove_at"))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for FrozenList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for FrozenList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

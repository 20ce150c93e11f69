//! Checked mutation of collections.
//!
//! [`MutableCollection`] and [`MutableSequence`] describe writes that may be
//! refused. Ordinary standard collections accept them; the read-only
//! containers in [`frozen`](crate::frozen) refuse every one with
//! [`CollectionError::UnsupportedMutation`].
//!
//! Positional writes never panic: an index outside of the sequence is
//! reported as [`CollectionError::IndexOutOfBounds`].
//!
//! # Examples
//!
//! ```rust
//! use collection_util::mutation::{MutableCollection, MutableSequence};
//!
//! let mut values = vec![Some(1)];
//! assert_eq!(values.try_add(None), Ok(true));
//! assert_eq!(values.try_replace(0, Some(5)), Ok(Some(1)));
//! assert!(values.try_remove_at(9).unwrap_err().is_index_out_of_bounds());
//! assert_eq!(values, vec![Some(5), None]);
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::error::{CollectionError, IndexOutOfBoundsError};

/// A collection whose structural writes may be refused.
pub trait MutableCollection<T> {
    /// Adds `value`.
    ///
    /// Returns whether the collection changed: sequences always append,
    /// sets report `false` for a value already present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedMutation`] for read-only
    /// collections.
    fn try_add(&mut self, value: T) -> Result<bool, CollectionError>;

    /// Removes one occurrence of `value`, returning whether one was found.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedMutation`] for read-only
    /// collections.
    fn try_remove_value(&mut self, value: &T) -> Result<bool, CollectionError>;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedMutation`] for read-only
    /// collections.
    fn try_clear(&mut self) -> Result<(), CollectionError>;
}

/// A sequence whose positional writes may be refused.
pub trait MutableSequence<T>: MutableCollection<T> {
    /// Inserts `value` at `index`, shifting later elements back.
    ///
    /// `index` may equal the length, which appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] when `index` is greater
    /// than the length, or [`CollectionError::UnsupportedMutation`] for
    /// read-only sequences.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), CollectionError>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] when `index` is not a
    /// valid position, or [`CollectionError::UnsupportedMutation`] for
    /// read-only sequences.
    fn try_replace(&mut self, index: usize, value: T) -> Result<T, CollectionError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] when `index` is not a
    /// valid position, or [`CollectionError::UnsupportedMutation`] for
    /// read-only sequences.
    fn try_remove_at(&mut self, index: usize) -> Result<T, CollectionError>;
}

const fn out_of_bounds(index: usize, length: usize) -> CollectionError {
    CollectionError::IndexOutOfBounds(IndexOutOfBoundsError { index, length })
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: PartialEq> MutableCollection<T> for Vec<T> {
    fn try_add(&mut self, value: T) -> Result<bool, CollectionError> {
        self.push(value);
        Ok(true)
    }

    fn try_remove_value(&mut self, value: &T) -> Result<bool, CollectionError> {
        let position = self.iter().position(|element| element == value);
        Ok(position.map(|index| self.remove(index)).is_some())
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<T: PartialEq> MutableSequence<T> for Vec<T> {
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.len() {
            return Err(out_of_bounds(index, self.len()));
        }
        self.insert(index, value);
        Ok(())
    }

    fn try_replace(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let length = self.len();
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or_else(|| out_of_bounds(index, length))
    }

    fn try_remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.len() {
            return Err(out_of_bounds(index, self.len()));
        }
        Ok(self.remove(index))
    }
}

// =============================================================================
// VecDeque Implementation
// =============================================================================

impl<T: PartialEq> MutableCollection<T> for VecDeque<T> {
    fn try_add(&mut self, value: T) -> Result<bool, CollectionError> {
        self.push_back(value);
        Ok(true)
    }

    fn try_remove_value(&mut self, value: &T) -> Result<bool, CollectionError> {
        let position = self.iter().position(|element| element == value);
        Ok(position.and_then(|index| self.remove(index)).is_some())
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<T: PartialEq> MutableSequence<T> for VecDeque<T> {
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.len() {
            return Err(out_of_bounds(index, self.len()));
        }
        self.insert(index, value);
        Ok(())
    }

    fn try_replace(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let length = self.len();
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or_else(|| out_of_bounds(index, length))
    }

    fn try_remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let length = self.len();
        self.remove(index).ok_or_else(|| out_of_bounds(index, length))
    }
}

// =============================================================================
// Set Implementations
// =============================================================================

impl<T, S> MutableCollection<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn try_add(&mut self, value: T) -> Result<bool, CollectionError> {
        Ok(self.insert(value))
    }

    fn try_remove_value(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(self.remove(value))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

impl<T: Ord> MutableCollection<T> for BTreeSet<T> {
    fn try_add(&mut self, value: T) -> Result<bool, CollectionError> {
        Ok(self.insert(value))
    }

    fn try_remove_value(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(self.remove(value))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }
}

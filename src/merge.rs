//! Merging two collections into a new one.
//!
//! Sequences are concatenated (the left operand first, duplicates kept) and
//! sets are united (duplicates collapse). In both cases the inputs are only
//! borrowed and the result is freshly allocated, even when one side is empty.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use collection_util::merge::merge;
//!
//! let merged = merge(Some(&vec![1, 2]), Some(&vec![3])).unwrap();
//! assert_eq!(merged, vec![1, 2, 3]);
//!
//! let left: HashSet<i32> = [1, 2].into_iter().collect();
//! let right: HashSet<i32> = [2, 3].into_iter().collect();
//! let expected: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(merge(Some(&left), Some(&right)).unwrap(), expected);
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::argument::require;
use crate::error::CollectionError;

/// A collection that can be merged with another of the same kind.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
///
/// ```text
/// a.merged(&b).merged(&c) == a.merged(&b.merged(&c))
/// ```
///
/// Sequences additionally keep every element of `self` in order, followed by
/// every element of `other` in order.
pub trait Merge {
    /// Returns a new collection holding the elements of `self` and `other`.
    #[must_use]
    fn merged(&self, other: &Self) -> Self;
}

/// Merges two collections into a new one.
///
/// Both arguments are checked before any element is copied; `first` is
/// checked first.
///
/// # Errors
///
/// Returns [`CollectionError::NullArgument`] if either argument is `None`.
///
/// # Examples
///
/// ```rust
/// use collection_util::merge::merge;
///
/// let values = vec![Some(1), None];
/// let merged = merge(Some(&values), Some(&vec![None])).unwrap();
/// assert_eq!(merged, vec![Some(1), None, None]);
///
/// assert!(merge(None, Some(&values)).unwrap_err().is_null_argument());
/// ```
pub fn merge<C: Merge>(first: Option<&C>, second: Option<&C>) -> Result<C, CollectionError> {
    let first = require(first, "merge", "first")?;
    let second = require(second, "merge", "second")?;
    Ok(first.merged(second))
}

// =============================================================================
// Sequence Implementations
// =============================================================================

impl<T: Clone> Merge for Vec<T> {
    fn merged(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

impl<T: Clone> Merge for VecDeque<T> {
    fn merged(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Set Implementations
// =============================================================================

impl<T, S> Merge for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn merged(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity_and_hasher(self.len() + other.len(), S::default());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

impl<T: Clone + Ord> Merge for BTreeSet<T> {
    fn merged(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

//! Defensive, read-only, null-tolerant copies.
//!
//! [`copy_null_safe`] clones every element of a sequence or set, `None`
//! elements included, into a [`FrozenList`] or [`FrozenSet`]. The copy owns
//! its own storage, so later writes to the source are not observable through
//! it, and it refuses every write made through the checked-mutation traits.
//!
//! # Examples
//!
//! ```rust
//! use collection_util::copy::copy_null_safe;
//! use collection_util::mutation::MutableCollection;
//!
//! let mut source = vec![None, Some(1), None];
//! let mut copy = copy_null_safe(Some(&source)).unwrap();
//!
//! source.push(Some(2));
//! assert_eq!(copy, vec![None, Some(1), None]);
//! assert!(copy.try_add(Some(3)).unwrap_err().is_unsupported_mutation());
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::argument::require;
use crate::error::CollectionError;
use crate::frozen::{FrozenList, FrozenSet};

/// A collection that can produce a read-only copy of itself.
pub trait CopyNullSafe {
    /// The read-only container produced by [`CopyNullSafe::copy_null_safe`].
    type Output;

    /// Returns a read-only copy holding clones of every element.
    #[must_use]
    fn copy_null_safe(&self) -> Self::Output;
}

/// Returns a read-only copy of `source`.
///
/// Sequences keep their order and every `None` element, duplicates included.
/// Sets keep their membership.
///
/// # Errors
///
/// Returns [`CollectionError::NullArgument`] when `source` is `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use collection_util::copy::copy_null_safe;
///
/// let source: HashSet<Option<&str>> = [None, Some("a")].into_iter().collect();
/// let copy = copy_null_safe(Some(&source)).unwrap();
/// assert_eq!(copy, source);
///
/// let missing: Option<&HashSet<Option<&str>>> = None;
/// assert!(copy_null_safe(missing).unwrap_err().is_null_argument());
/// ```
pub fn copy_null_safe<C>(source: Option<&C>) -> Result<C::Output, CollectionError>
where
    C: CopyNullSafe + ?Sized,
{
    let source = require(source, "copy_null_safe", "source")?;
    Ok(source.copy_null_safe())
}

// =============================================================================
// Sequence Implementations
// =============================================================================

impl<T: Clone> CopyNullSafe for [T] {
    type Output = FrozenList<T>;

    fn copy_null_safe(&self) -> Self::Output {
        FrozenList::from_slice(self)
    }
}

impl<T: Clone> CopyNullSafe for Vec<T> {
    type Output = FrozenList<T>;

    fn copy_null_safe(&self) -> Self::Output {
        FrozenList::from_slice(self.as_slice())
    }
}

impl<T: Clone> CopyNullSafe for VecDeque<T> {
    type Output = FrozenList<T>;

    fn copy_null_safe(&self) -> Self::Output {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> CopyNullSafe for FrozenList<T> {
    type Output = Self;

    fn copy_null_safe(&self) -> Self::Output {
        Self::from_slice(self.as_slice())
    }
}

// =============================================================================
// Set Implementations
// =============================================================================

impl<T, S> CopyNullSafe for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Output = FrozenSet<T, S>;

    fn copy_null_safe(&self) -> Self::Output {
        FrozenSet::from(self.clone())
    }
}

/// The copy is hash-based: it keeps membership but not the ascending order
/// of the source, so iterating it (or calling `last_iterated` on it) may
/// yield elements in a different order. Elements must be `Hash`.
impl<T> CopyNullSafe for BTreeSet<T>
where
    T: Clone + Eq + Hash,
{
    type Output = FrozenSet<T>;

    fn copy_null_safe(&self) -> Self::Output {
        self.iter().cloned().collect()
    }
}

impl<T, S> CopyNullSafe for FrozenSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Output = Self;

    fn copy_null_safe(&self) -> Self::Output {
        Self::from(self.to_set())
    }
}

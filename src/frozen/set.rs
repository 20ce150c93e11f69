//! Read-only hash set.
//!
//! [`FrozenSet`] owns an immutable `Arc<HashSet<T, S>>`. A `None` element is
//! an ordinary member, so a `FrozenSet<Option<T>>` holds at most one of them.
//!
//! # Examples
//!
//! ```rust
//! use collection_util::frozen::FrozenSet;
//!
//! let set: FrozenSet<Option<i32>> = [Some(1), None, None].into_iter().collect();
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&None));
//! assert!(!set.contains(&Some(2)));
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::sync::Arc;

use super::rejected;
use crate::error::CollectionError;
#[cfg(feature = "merge")]
use crate::merge::Merge;
use crate::mutation::MutableCollection;

const COLLECTION_NAME: &str = "FrozenSet";

/// A read-only, null-tolerant hash set.
///
/// Iteration order is the order of the backing `HashSet` and is unspecified.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `contains`     | O(1) avg   |
/// | `len`          | O(1)       |
/// | `clone`        | O(1)       |
/// | `merged`       | O(n + m)   |
///
/// # Examples
///
/// ```rust
/// use collection_util::frozen::FrozenSet;
///
/// let set: FrozenSet<&str> = ["a", "b"].into_iter().collect();
/// assert!(set.contains("a"));
/// ```
pub struct FrozenSet<T, S = RandomState> {
    elements: Arc<HashSet<T, S>>,
}

impl<T, S: Default> FrozenSet<T, S> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_util::frozen::FrozenSet;
    ///
    /// let set: FrozenSet<i32> = FrozenSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Arc::new(HashSet::with_hasher(S::default())),
        }
    }
}

impl<T, S> FrozenSet<T, S> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in unspecified order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a shared view of the backing set.
    #[inline]
    #[must_use]
    pub fn as_set(&self) -> &HashSet<T, S> {
        &self.elements
    }
}

impl<T, S> FrozenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains `value`.
    ///
    /// The value may be any borrowed form of the element type.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(value)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns an owned, mutable copy of the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_util::frozen::FrozenSet;
    ///
    /// let frozen: FrozenSet<i32> = [1].into_iter().collect();
    /// let mut owned = frozen.to_set();
    /// owned.insert(2);
    /// assert_eq!(frozen.len(), 1);
    /// assert_eq!(owned.len(), 2);
    /// ```
    #[must_use]
    pub fn to_set(&self) -> HashSet<T, S>
    where
        T: Clone,
        S: Clone,
    {
        HashSet::clone(&self.elements)
    }
}

impl<T, S: Default> Default for FrozenSet<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for FrozenSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T, S> From<HashSet<T, S>> for FrozenSet<T, S> {
    fn from(elements: HashSet<T, S>) -> Self {
        Self {
            elements: Arc::new(elements),
        }
    }
}

impl<T, S> From<BTreeSet<T>> for FrozenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(elements: BTreeSet<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> FromIterator<T> for FrozenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashSet<T, S>>())
    }
}

impl<'a, T, S> IntoIterator for &'a FrozenSet<T, S> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Equality
// =============================================================================

impl<T, S> PartialEq for FrozenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_set() == other.as_set()
    }
}

impl<T, S> Eq for FrozenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, S> PartialEq<HashSet<T, S>> for FrozenSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &HashSet<T, S>) -> bool {
        self.as_set() == other
    }
}

impl<T, S> PartialEq<FrozenSet<T, S>> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &FrozenSet<T, S>) -> bool {
        self == other.as_set()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug, S> fmt::Debug for FrozenSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for FrozenSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Merge and Mutation
// =============================================================================

#[cfg(feature = "merge")]
impl<T, S> Merge for FrozenSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Default,
{
    fn merged(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T, S> MutableCollection<T> for FrozenSet<T, S> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for FrozenSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
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
impl<'de, T, S> serde::Deserialize<'de> for FrozenSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <HashSet<T, S> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

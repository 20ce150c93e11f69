//! Retrieving the last element of a collection.
//!
//! Elements are `Option<T>`; a trailing `None` is reported exactly like an
//! empty collection. Callers that need to tell the two apart should inspect
//! the length themselves.
//!
//! # Examples
//!
//! ```rust
//! use collection_util::last::last;
//!
//! let values = vec![Some(1), Some(2), Some(3)];
//! assert_eq!(last(Some(&values)), Ok(Some(&3)));
//!
//! let trailing_none = vec![Some(1), None];
//! assert_eq!(last(Some(&trailing_none)), Ok(None));
//! ```

use crate::argument::require;
use crate::error::CollectionError;

/// Returns the element at the final position of a sequence.
///
/// Runs in constant time. An empty sequence and a sequence ending in `None`
/// both yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`CollectionError::NullArgument`] when `list` is `None`.
///
/// # Examples
///
/// ```rust
/// use collection_util::last::last;
///
/// let empty: Vec<Option<&str>> = Vec::new();
/// assert_eq!(last(Some(&empty)), Ok(None));
///
/// let array = [Some("a"), Some("b")];
/// assert_eq!(last(Some(&array)), Ok(Some(&"b")));
/// ```
pub fn last<T, L>(list: Option<&L>) -> Result<Option<&T>, CollectionError>
where
    L: AsRef<[Option<T>]> + ?Sized,
{
    let list = require(list, "last", "list")?;
    Ok(list.as_ref().last().and_then(Option::as_ref))
}

/// Returns the element produced last by one full iteration of `collection`.
///
/// The collection is walked end to end with a fresh iterator and left
/// untouched. For collections with a defined iteration order (`Vec`,
/// `VecDeque`, `BTreeSet`, ...) this is the positionally last element. For
/// `HashSet` and other unordered collections the result depends on the
/// iteration order of that particular instance and is not portable.
///
/// # Errors
///
/// Returns [`CollectionError::NullArgument`] when `collection` is `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use collection_util::last::last_iterated;
///
/// let set: BTreeSet<Option<i32>> = [Some(2), Some(9), Some(4)].into_iter().collect();
/// assert_eq!(last_iterated(Some(&set)), Ok(Some(&9)));
///
/// // `None` sorts first, so it is never the last element of a `BTreeSet`.
/// let with_none: BTreeSet<Option<i32>> = [None, Some(1)].into_iter().collect();
/// assert_eq!(last_iterated(Some(&with_none)), Ok(Some(&1)));
/// ```
pub fn last_iterated<'a, T, C>(collection: Option<&'a C>) -> Result<Option<&'a T>, CollectionError>
where
    T: 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    let collection = require(collection, "last_iterated", "collection")?;
    Ok(collection.into_iter().last().and_then(Option::as_ref))
}

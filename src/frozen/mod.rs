//! Read-only result containers.
//!
//! This module provides the containers returned by
//! [`copy_null_safe`](crate::copy::copy_null_safe):
//!
//! - [`FrozenList`]: read-only sequence backed by `Arc<[T]>`
//! - [`FrozenSet`]: read-only hash set backed by `Arc<HashSet<T, S>>`
//!
//! # Read-Only Guarantee
//!
//! Neither container hands out `&mut` access to its storage. Every method of
//! the checked-mutation traits ([`MutableCollection`](crate::mutation::MutableCollection),
//! [`MutableSequence`](crate::mutation::MutableSequence)) fails with
//! [`CollectionError::UnsupportedMutation`](crate::error::CollectionError::UnsupportedMutation)
//! and leaves the contents as they were.
//!
//! Cloning a frozen container shares the storage, which is safe because the
//! storage can never change.
//!
//! # Examples
//!
//! ```rust
//! use collection_util::frozen::FrozenList;
//! use collection_util::mutation::MutableCollection;
//!
//! let mut list: FrozenList<Option<i32>> = vec![Some(1), None].into();
//! assert!(list.try_add(Some(2)).unwrap_err().is_unsupported_mutation());
//! assert_eq!(list, vec![Some(1), None]);
//! ```

mod list;
mod set;

pub use list::FrozenList;
pub use set::FrozenSet;

use crate::error::{CollectionError, UnsupportedMutationError};

/// Builds the error every frozen container returns from a write.
pub(crate) const fn rejected(
    collection_name: &'static str,
    method_name: &'static str,
) -> CollectionError {
    CollectionError::UnsupportedMutation(UnsupportedMutationError {
        collection_name,
        method_name,
    })
}

static_assertions::assert_impl_all!(FrozenList<i32>: Send, Sync);
static_assertions::assert_impl_all!(FrozenList<Option<String>>: Send, Sync);
static_assertions::assert_impl_all!(FrozenSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(FrozenSet<Option<String>>: Send, Sync);

static_assertions::assert_not_impl_any!(FrozenList<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(FrozenSet<std::rc::Rc<i32>>: Send, Sync);

//! # collection-util
//!
//! Small, generic, null-safe collection helpers.
//!
//! ## Overview
//!
//! - **Merge**: concatenate two sequences or unite two sets into a new
//!   collection ([`merge::merge`])
//! - **Last**: the last element of a sequence, or the last element produced by
//!   iterating any collection ([`last::last`], [`last::last_iterated`])
//! - **Copy**: a defensive, read-only copy that tolerates `None` elements
//!   ([`copy::copy_null_safe`])
//!
//! ## Absent Values
//!
//! Two different things can be "null" and they are kept apart:
//!
//! - the collection argument itself, passed as `Option<&C>`; `None` is
//!   rejected eagerly with [`CollectionError::NullArgument`];
//! - an element, typed `Option<T>`; `None` elements are ordinary content and
//!   are never rejected.
//!
//! ## Feature Flags
//!
//! - `merge`: [`merge`] module
//! - `last`: [`last`] module
//! - `copy`: [`copy`], [`frozen`] and [`mutation`] modules
//! - `serde`: `Serialize`/`Deserialize` for the read-only containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use collection_util::prelude::*;
//!
//! let merged = merge(Some(&vec![Some(1), Some(2)]), Some(&vec![None])).unwrap();
//! assert_eq!(merged, vec![Some(1), Some(2), None]);
//! assert_eq!(last(Some(&merged)), Ok(None));
//!
//! let mut copy = copy_null_safe(Some(&merged)).unwrap();
//! assert!(copy.try_clear().unwrap_err().is_unsupported_mutation());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the operations, traits, containers and error types.
///
/// # Usage
///
/// ```rust
/// use collection_util::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "last")]
    pub use crate::last::*;

    #[cfg(feature = "copy")]
    pub use crate::copy::*;

    #[cfg(feature = "copy")]
    pub use crate::frozen::*;

    #[cfg(feature = "copy")]
    pub use crate::mutation::*;
}

pub mod argument;
pub mod error;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "last")]
pub mod last;

#[cfg(feature = "copy")]
pub mod copy;

#[cfg(feature = "copy")]
pub mod frozen;

#[cfg(feature = "copy")]
pub mod mutation;

pub use error::CollectionError;

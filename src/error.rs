//! Error types for the collection helpers.
//!
//! Two independent failure channels exist:
//!
//! - a required collection argument was absent ([`NullArgumentError`]);
//! - a write was attempted on a read-only container
//!   ([`UnsupportedMutationError`]).
//!
//! Positional writes on ordinary sequences report [`IndexOutOfBoundsError`]
//! instead of panicking. All of them are gathered in [`CollectionError`].

/// Represents a required collection argument that was not supplied.
///
/// This is about the container reference itself, never about its elements:
/// a collection holding `None` elements is a perfectly valid argument.
///
/// # Examples
///
/// ```rust
/// use collection_util::error::NullArgumentError;
///
/// let error = NullArgumentError {
///     function_name: "merge",
///     parameter_name: "first",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "merge: argument `first` must not be null"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NullArgumentError {
    /// The name of the function that rejected the argument.
    pub function_name: &'static str,
    /// The name of the missing parameter.
    pub parameter_name: &'static str,
}

impl std::fmt::Display for NullArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: argument `{}` must not be null",
            self.function_name, self.parameter_name
        )
    }
}

impl std::error::Error for NullArgumentError {}

/// Represents a write attempted on a read-only container.
///
/// # Examples
///
/// ```rust
/// use collection_util::error::UnsupportedMutationError;
///
/// let error = UnsupportedMutationError {
///     collection_name: "FrozenList",
///     method_name: "try_add",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "FrozenList::try_add: the collection is read-only"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnsupportedMutationError {
    /// The name of the read-only container.
    pub collection_name: &'static str,
    /// The name of the rejected method.
    pub method_name: &'static str,
}

impl std::fmt::Display for UnsupportedMutationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: the collection is read-only",
            self.collection_name, self.method_name
        )
    }
}

impl std::error::Error for UnsupportedMutationError {}

/// Represents a positional write outside of a sequence's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexOutOfBoundsError {
    /// The requested position.
    pub index: usize,
    /// The length of the sequence at the time of the call.
    pub length: usize,
}

impl std::fmt::Display for IndexOutOfBoundsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} is out of bounds for length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexOutOfBoundsError {}

/// Represents every error raised by this crate.
///
/// # Examples
///
/// ```rust
/// use collection_util::error::{CollectionError, NullArgumentError};
///
/// let error = CollectionError::NullArgument(NullArgumentError {
///     function_name: "last",
///     parameter_name: "list",
/// });
/// assert!(error.is_null_argument());
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CollectionError {
    /// A required collection argument was absent.
    NullArgument(NullArgumentError),
    /// A read-only container rejected a write.
    UnsupportedMutation(UnsupportedMutationError),
    /// A positional write fell outside of the sequence.
    IndexOutOfBounds(IndexOutOfBoundsError),
}

impl CollectionError {
    /// Returns `true` for [`CollectionError::NullArgument`].
    #[must_use]
    pub const fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument(_))
    }

    /// Returns `true` for [`CollectionError::UnsupportedMutation`].
    #[must_use]
    pub const fn is_unsupported_mutation(&self) -> bool {
        matches!(self, Self::UnsupportedMutation(_))
    }

    /// Returns `true` for [`CollectionError::IndexOutOfBounds`].
    #[must_use]
    pub const fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds(_))
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullArgument(error) => write!(formatter, "{error}"),
            Self::UnsupportedMutation(error) => write!(formatter, "{error}"),
            Self::IndexOutOfBounds(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NullArgument(error) => Some(error),
            Self::UnsupportedMutation(error) => Some(error),
            Self::IndexOutOfBounds(error) => Some(error),
        }
    }
}

impl From<NullArgumentError> for CollectionError {
    fn from(error: NullArgumentError) -> Self {
        Self::NullArgument(error)
    }
}

impl From<UnsupportedMutationError> for CollectionError {
    fn from(error: UnsupportedMutationError) -> Self {
        Self::UnsupportedMutation(error)
    }
}

impl From<IndexOutOfBoundsError> for CollectionError {
    fn from(error: IndexOutOfBoundsError) -> Self {
        Self::IndexOutOfBounds(error)
    }
}

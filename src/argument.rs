//! Reference validity checks shared by every operation.

use crate::error::{CollectionError, NullArgumentError};

/// Unwraps a required collection argument.
///
/// `None` stands for a null reference and is reported as
/// [`CollectionError::NullArgument`]. The elements of the collection are not
/// inspected.
///
/// # Errors
///
/// Returns [`CollectionError::NullArgument`] when `argument` is `None`.
///
/// # Examples
///
/// ```rust
/// use collection_util::argument::require;
///
/// let values = vec![Some(1), None];
/// assert_eq!(require(Some(&values), "copy_null_safe", "source"), Ok(&values));
///
/// let missing: Option<&Vec<Option<i32>>> = None;
/// assert!(require(missing, "copy_null_safe", "source").is_err());
/// ```
#[inline]
pub fn require<'a, C: ?Sized>(
    argument: Option<&'a C>,
    function_name: &'static str,
    parameter_name: &'static str,
) -> Result<&'a C, CollectionError> {
    argument.ok_or(CollectionError::NullArgument(NullArgumentError {
        function_name,
        parameter_name,
    }))
}

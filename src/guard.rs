//! Defensive validation guards used at construction boundaries.
//!
//! Every component of this crate funnels its argument validation through
//! these two functions so that bad inputs fail fast with a uniform
//! [`SieveError::InvalidArgument`].

use crate::error::{Result, SieveError};

/// Ensure a value is present, returning it unchanged.
///
/// The identity passthrough allows inline use at construction sites:
///
/// ```
/// use error_sieve::guard;
///
/// let port = guard::ensure_object(Some(8080), "Must provide a port!").unwrap();
/// assert_eq!(port, 8080);
/// ```
pub fn ensure_object<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| SieveError::invalid_argument(message))
}

/// Ensure a string is non-blank (non-empty after trimming), returning it unchanged.
pub fn ensure_string<S: AsRef<str>>(value: S, message: &str) -> Result<S> {
    if value.as_ref().trim().is_empty() {
        return Err(SieveError::invalid_argument(message));
    }

    Ok(value)
}

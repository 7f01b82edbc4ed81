//! Cause-chain containment checks.
//!
//! A failure here is any `dyn std::error::Error`; its cause chain is the
//! sequence of [`Error::source`] links. Containment asks whether a target
//! (a concrete failure type, or a substring of a message) occurs anywhere
//! along that chain.

use std::error::Error;
use tracing::trace;

use crate::error::Result;
use crate::failure::IndirectFailure;
use crate::guard;

/// True if `failure` or any failure reachable through its cause chain has
/// dynamic type `T`.
///
/// An absent failure is simply not a match; this never fails. Recursion
/// terminates when a match is found or the chain runs out of causes. Chains
/// are assumed acyclic; there is no cycle detection.
pub fn contains_type<T: Error + 'static>(failure: Option<&(dyn Error + 'static)>) -> bool {
    let Some(current) = failure else {
        trace!(
            target_type = std::any::type_name::<T>(),
            "no failure to examine, not contained"
        );
        return false;
    };

    if current.is::<T>() {
        trace!(
            target_type = std::any::type_name::<T>(),
            failure = %current,
            "failure chain contains the target type"
        );
        return true;
    }

    trace!(failure = %current, "examining the cause for containment");
    contains_type::<T>(current.source())
}

/// True if `failure` or any of its causes has the same dynamic type as
/// `target`.
///
/// Unlike [`contains_type`], an absent `target` is a caller bug and fails
/// with an invalid argument error.
pub fn contains_instance<T: Error + 'static>(
    failure: Option<&(dyn Error + 'static)>,
    target: Option<&T>,
) -> Result<bool> {
    guard::ensure_object(target, "Must have a failure to check!")?;

    Ok(contains_type::<T>(failure))
}

/// True if `failure` or any of its causes is a [`std::io::Error`].
pub fn contains_io_error(failure: Option<&(dyn Error + 'static)>) -> bool {
    contains_type::<std::io::Error>(failure)
}

/// True if `failure`'s message contains `needle` as a literal,
/// case-sensitive substring.
///
/// A blank `needle` fails with an invalid argument error; an absent failure
/// is a plain non-match. An [`IndirectFailure`] is bypassed in favor of its
/// target failure, so the wrapper's own dispatch-site message is never
/// searched.
pub fn message_contains(failure: Option<&(dyn Error + 'static)>, needle: &str) -> Result<bool> {
    guard::ensure_string(needle, "Cannot search for a blank needle!")?;

    let Some(current) = failure else {
        trace!(needle, "no failure to examine, message not contained");
        return Ok(false);
    };

    if let Some(wrapper) = current.downcast_ref::<IndirectFailure>() {
        trace!(
            wrapper = %wrapper,
            "failure is an indirection wrapper, examining its target"
        );
        return message_contains(Some(wrapper.target()), needle);
    }

    let message = current.to_string();
    trace!(needle, message = %message, "checking message containment");

    Ok(message.contains(needle))
}

//! Indirection wrapper for failures raised by indirectly dispatched calls.

use std::error::Error;
use std::fmt;

/// A failure produced when a dynamically dispatched call fails.
///
/// The wrapper's own message describes the dispatch site and is not
/// meaningful for message classification; the real failure is carried as the
/// target. Message containment (see [`crate::chain::message_contains`])
/// bypasses the wrapper and inspects the target, while type containment sees
/// the target through [`Error::source`].
#[derive(Debug)]
pub struct IndirectFailure {
    message: String,
    target: Box<dyn Error + Send + Sync>,
}

impl IndirectFailure {
    /// Wrap a target failure with a dispatch-site message.
    pub fn new<S: Into<String>>(message: S, target: Box<dyn Error + Send + Sync>) -> Self {
        Self {
            message: message.into(),
            target,
        }
    }

    /// The wrapped target failure.
    pub fn target(&self) -> &(dyn Error + 'static) {
        &*self.target
    }
}

impl fmt::Display for IndirectFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for IndirectFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.target())
    }
}

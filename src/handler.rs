//! Callback seam for observing operation failures.

use std::error::Error;
use std::fmt::Debug;
use tracing::trace;

/// Callback invoked when an operation on a value fails.
///
/// Implementations must not assume ownership of the failure; it is only
/// borrowed for observation.
pub trait FailureHandler<V>: Send + Sync {
    /// Observe that an operation on `value` failed with `failure`.
    fn failed(&self, value: &V, failure: &(dyn Error + 'static));
}

/// Handler that does nothing beyond trace logging.
#[derive(Debug, Clone, Default)]
pub struct NullFailureHandler;

impl NullFailureHandler {
    pub fn new() -> Self {
        Self
    }
}

impl<V: Debug> FailureHandler<V> for NullFailureHandler {
    fn failed(&self, value: &V, failure: &(dyn Error + 'static)) {
        trace!(value = ?value, failure = %failure, "operation failed");
    }
}

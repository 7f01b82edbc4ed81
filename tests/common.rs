//! Shared fixtures for integration tests: small failure types with cause
//! chains, mirroring how application errors wrap one another in practice.

#![allow(dead_code)]

use std::error::Error;

/// Leaf failure standing in for an I/O problem.
#[derive(Debug, thiserror::Error)]
#[error("io failure: {0}")]
pub struct IoFailure(pub String);

/// Leaf failure standing in for an operation timeout.
#[derive(Debug, thiserror::Error)]
#[error("timeout failure: {0}")]
pub struct TimeoutFailure(pub String);

/// General chained failure with an optional cause.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeFailure {
    message: String,
    #[source]
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl RuntimeFailure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn caused_by<S: Into<String>>(message: S, cause: Box<dyn Error + Send + Sync>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }
}

/// Build the three-deep chain `A(cause = B(cause = C))` where `C` is an
/// [`IoFailure`].
pub fn three_deep_io_chain() -> RuntimeFailure {
    let c = IoFailure("disk gone".to_string());
    let b = RuntimeFailure::caused_by("b", Box::new(c));
    RuntimeFailure::caused_by("a", Box::new(b))
}

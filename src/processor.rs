//! The failure-classification capability and its built-in processors.
//!
//! A processor answers one question: is this failure applicable to me?
//! Callers hold an ordered list of processors (most specific first, a
//! [`CatchAllProcessor`] last) and dispatch on the first positive answer.
//! Processors are immutable value objects; build them once and reuse them
//! from any thread.

use std::error::Error;
use tracing::trace;

use crate::chain;
use crate::error::Result;
use crate::guard;

/// Capability to decide whether a caught failure is applicable.
pub trait FailureProcessor: Send + Sync {
    /// Decide applicability of `failure` for this processor.
    fn is_applicable(&self, failure: Option<&(dyn Error + 'static)>) -> Result<bool>;
}

/// Applicable when the failure, or any cause in its chain, has a configured
/// dynamic type.
///
/// An absent failure is a plain non-match, never an error.
#[derive(Debug, Clone)]
pub struct TypeMatchProcessor {
    type_name: &'static str,
    contains: fn(Option<&(dyn Error + 'static)>) -> bool,
}

impl TypeMatchProcessor {
    /// Create a processor matching failures of type `T` anywhere in the
    /// cause chain.
    pub fn new<T: Error + 'static>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            contains: chain::contains_type::<T>,
        }
    }

    /// The name of the type this processor matches.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl FailureProcessor for TypeMatchProcessor {
    fn is_applicable(&self, failure: Option<&(dyn Error + 'static)>) -> Result<bool> {
        let applicable = (self.contains)(failure);

        trace!(
            target_type = self.type_name,
            applicable,
            "type match processor examined failure"
        );

        Ok(applicable)
    }
}

/// Applicable when the failure's message contains a configured substring.
///
/// Asking about an absent failure is a caller bug and fails with an invalid
/// argument error; there is no message to search on nothing.
#[derive(Debug, Clone)]
pub struct MessageMatchProcessor {
    needle: String,
}

impl MessageMatchProcessor {
    /// Create a processor matching failures whose message contains `needle`.
    ///
    /// Fails with an invalid argument error when `needle` is blank.
    pub fn new<S: Into<String>>(needle: S) -> Result<Self> {
        Ok(Self {
            needle: guard::ensure_string(needle.into(), "Cannot match on a blank message!")?,
        })
    }

    /// The substring this processor searches for.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl FailureProcessor for MessageMatchProcessor {
    fn is_applicable(&self, failure: Option<&(dyn Error + 'static)>) -> Result<bool> {
        let failure = guard::ensure_object(
            failure,
            "Cannot determine applicability of an absent failure!",
        )?;

        chain::message_contains(Some(failure), &self.needle)
    }
}

/// Always applicable; the terminal default branch of a processor chain.
#[derive(Debug, Clone, Default)]
pub struct CatchAllProcessor;

impl CatchAllProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl FailureProcessor for CatchAllProcessor {
    fn is_applicable(&self, _failure: Option<&(dyn Error + 'static)>) -> Result<bool> {
        Ok(true)
    }
}

//! Error Sieve - Failure classification over cause chains
//!
//! This crate decides, for an arbitrary caught failure, whether it matches a
//! caller-supplied criterion: a concrete failure type found anywhere along
//! the cause chain, or a substring of its message. Classification rules
//! implement the [`FailureProcessor`] capability and are meant to be held in
//! an ordered list (most specific first, [`CatchAllProcessor`] last) with
//! first-match-wins dispatch.
//!
//! The supporting utility modules (validation guards, properties store, URL
//! and file helpers) share the same fail-fast validation contract: absent or
//! blank constructor arguments fail immediately with
//! [`SieveError::InvalidArgument`].

// Core modules
pub mod chain;
pub mod error;
pub mod failure;
pub mod guard;
pub mod processor;

// Collaborator utility modules
pub mod files;
pub mod handler;
pub mod pause;
pub mod props;
pub mod urls;

// Re-export main types for convenience
pub use chain::{contains_instance, contains_io_error, contains_type, message_contains};
pub use error::{Result, SieveError};
pub use failure::IndirectFailure;
pub use handler::{FailureHandler, NullFailureHandler};
pub use processor::{
    CatchAllProcessor, FailureProcessor, MessageMatchProcessor, TypeMatchProcessor,
};
pub use props::PropertiesStore;

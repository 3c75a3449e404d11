//! Routing error module.
//!
//! This module defines the error type for route registration. Resolution has
//! no error type of its own: "no match" is an ordinary `None`, and looking
//! up or removing an absent key anywhere in the core is a well-defined miss,
//! never an error.

use thiserror::Error;

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Errors that can occur during route registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// Error when a registration carries no handler for any verb.
    #[error("No handler for any method registered under pattern: {pattern}")]
    EmptyHandlerSet {
        /// The pattern the empty handler set was registered under.
        pattern: String,
    },
}

//! Makai Router Library
//!
//! This library contains the path-based request routing core of the Makai
//! embedded HTTP server: a compact radix trie, the segment tree built on top
//! of it, and the router that registers slash-delimited patterns and
//! resolves request paths to per-verb handler sets with wildcard captures.
//! The hosting transport (socket handling, HTTP parsing, static-file
//! fallback) lives outside this crate and talks to it only through
//! [`routing::PathRouter`] and the configuration types.
//!
//! # Architecture
//!
//! The crate is layered bottom-up:
//! - `data_structures`: the hand-built containers (trie, traversal stack,
//!   segment tree). Synchronous, no I/O, no logging.
//! - `routing`: pattern registration and greedy literal-over-wildcard
//!   resolution, generic over the host's handler type.
//! - `config` / `error`: validated configuration and the error framework
//!   shared with the hosting application.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod routing;
pub mod utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Makai Router.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaiResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}

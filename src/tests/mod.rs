//! Test modules for the Makai Router.
//!
//! This module contains crate-level testing infrastructure:
//! - Unit and property-based tests for the data-structure layer
//! - Configuration and error-framework tests
//! - Shared fixtures and proptest strategies
//!
//! Module-local tests (the routing suite, the inline data-structure tests)
//! live next to the code they exercise; the integration surface is covered
//! under the crate's top-level `tests/` directory.

pub mod segment_tree_tests;

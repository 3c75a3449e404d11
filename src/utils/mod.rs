//! Shared utilities for the Makai Router.

pub mod path;

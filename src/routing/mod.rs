// Copyright (c) 2025 Makai Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path routing for the Makai embedded HTTP server.
//!
//! This module maps slash-delimited request paths plus an HTTP verb to
//! previously registered handler sets. Patterns support literal segments and
//! one reserved wildcard token per segment; the literal segments a wildcard
//! matched are handed back to the caller in order, as positional arguments
//! for the selected handler.
//!
//! # Example
//!
//! ```
//! use makai_router_lib::routing::{HttpMethod, MethodHandlers, PathRouter};
//!
//! let mut router: PathRouter<&str> = PathRouter::new();
//! router
//!     .register("/users/<?>", MethodHandlers::new().with_get("get_user"))
//!     .unwrap();
//!
//! let found = router.resolve("/users/42").unwrap();
//! assert_eq!(found.handler_for(HttpMethod::Get), Some(&"get_user"));
//! assert_eq!(found.handler_for(HttpMethod::Post), None);
//! assert_eq!(found.args().as_slice(), ["42"]);
//!
//! assert!(router.resolve("/orders/42").is_none());
//! ```

mod handlers;
mod method;
mod router;

#[cfg(test)]
mod tests;

// Re-exports
pub use crate::error::routing::{RoutingError, RoutingResult};
pub use handlers::{MethodHandlers, Route};
pub use method::{HttpMethod, UnknownMethod};
pub use router::{PathArgs, PathRouter, RouteMatch};

// Copyright (c) 2025 Makai Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Per-verb handler sets and route registration records.
//!
//! The router is generic over the handler type `H`: the hosting server
//! decides what a handler is (a function pointer, a boxed closure, a trait
//! object). A [`MethodHandlers`] carries up to one handler per supported
//! verb; an absent slot means "verb not supported at this path".

use super::method::HttpMethod;

/// The set of per-verb handlers registered at a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHandlers<H> {
    pub get: Option<H>,
    pub post: Option<H>,
    pub put: Option<H>,
    pub delete: Option<H>,
}

impl<H> MethodHandlers<H> {
    /// Creates a handler set with every slot empty.
    pub fn new() -> Self {
        Self {
            get: None,
            post: None,
            put: None,
            delete: None,
        }
    }

    /// Sets the GET handler.
    pub fn with_get(mut self, handler: H) -> Self {
        self.get = Some(handler);
        self
    }

    /// Sets the POST handler.
    pub fn with_post(mut self, handler: H) -> Self {
        self.post = Some(handler);
        self
    }

    /// Sets the PUT handler.
    pub fn with_put(mut self, handler: H) -> Self {
        self.put = Some(handler);
        self
    }

    /// Sets the DELETE handler.
    pub fn with_delete(mut self, handler: H) -> Self {
        self.delete = Some(handler);
        self
    }

    /// Returns the handler registered for `method`, if any.
    pub fn handler_for(&self, method: HttpMethod) -> Option<&H> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }

    /// Whether no verb has a handler.
    pub fn is_empty(&self) -> bool {
        self.get.is_none() && self.post.is_none() && self.put.is_none() && self.delete.is_none()
    }

    /// The verbs that have a handler, in [`HttpMethod::ALL`] order.
    pub fn supported_methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter(|method| self.handler_for(*method).is_some())
    }
}

impl<H> Default for MethodHandlers<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A route registration record: a path pattern plus its handler set.
///
/// Patterns are `/`-separated; a segment equal to the configured wildcard
/// token matches any literal segment at that level and captures it.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pub pattern: String,
    pub handlers: MethodHandlers<H>,
}

impl<H> Route<H> {
    /// Creates a registration record for `pattern`.
    pub fn new(pattern: impl Into<String>, handlers: MethodHandlers<H>) -> Self {
        Self {
            pattern: pattern.into(),
            handlers,
        }
    }
}

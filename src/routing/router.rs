// Copyright (c) 2025 Makai Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path registration and resolution.
//!
//! [`PathRouter`] maps slash-delimited paths to per-verb handler sets. A
//! registered pattern may use the configured wildcard token as a whole
//! segment; resolving a path substitutes the literal segment it matched and
//! hands the substitutions back in order.
//!
//! Matching is greedy and single-pass: at every level a literal child is
//! preferred over the wildcard child, and once a literal branch is taken the
//! wildcard branch at that level is never revisited, even if the literal
//! branch fails on a deeper segment. A route behind the wildcard can
//! therefore be unreachable for paths that also match a literal sibling
//! prefix. The wildcard token itself is an ordinary string: a host that
//! registers the same literal segment shadows the wildcard at that level.

use tracing::{debug, info, warn};

use crate::config::routing::RoutingConfig;
use crate::data_structures::kula_segment_tree::SegmentTree;
use crate::error::routing::{RoutingError, RoutingResult};
use crate::utils::path::{segments, truncate_lossy};

use super::handlers::{MethodHandlers, Route};
use super::method::HttpMethod;

/// The ordered wildcard substitutions captured while resolving a path.
///
/// Capacity is bounded by the router's `max_wildcard_captures`; once full,
/// further wildcard segments still match structurally but are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArgs {
    values: Vec<String>,
    capacity: usize,
}

impl PathArgs {
    fn new(capacity: usize) -> Self {
        Self {
            values: Vec::new(),
            capacity,
        }
    }

    /// Records a captured segment. Returns `false` when the capture table
    /// is full and the value was dropped.
    fn push(&mut self, value: &str) -> bool {
        if self.values.len() >= self.capacity {
            return false;
        }
        self.values.push(value.to_string());
        true
    }

    /// The captured segment at position `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Iterates over the captured segments in match order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of recorded captures.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no captures were recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The recorded captures as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}

/// The outcome of a successful resolution: the handler set stored at the
/// matched path plus the wildcard substitutions collected on the way there.
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    handlers: &'r MethodHandlers<H>,
    args: PathArgs,
}

impl<'r, H> RouteMatch<'r, H> {
    /// The matched per-verb handler set.
    pub fn handlers(&self) -> &'r MethodHandlers<H> {
        self.handlers
    }

    /// The handler for `method`, or `None` when the verb is not supported
    /// at the matched path (the path itself did match).
    pub fn handler_for(&self, method: HttpMethod) -> Option<&'r H> {
        self.handlers.handler_for(method)
    }

    /// The wildcard substitutions, in match order.
    pub fn args(&self) -> &PathArgs {
        &self.args
    }

    /// Consumes the match, returning the handler set and the captures.
    pub fn into_parts(self) -> (&'r MethodHandlers<H>, PathArgs) {
        (self.handlers, self.args)
    }
}

/// A path router mapping registered patterns to per-verb handler sets.
///
/// Registration is expected to happen up front, before resolution begins;
/// the router carries no internal synchronization. Resolutions are read-only
/// and each owns its capture list, so they can run concurrently once
/// registration is done.
#[derive(Debug)]
pub struct PathRouter<H> {
    routes: SegmentTree<MethodHandlers<H>>,
    config: RoutingConfig,
}

impl<H> PathRouter<H> {
    /// Creates a router with the default [`RoutingConfig`].
    pub fn new() -> Self {
        Self::with_config(RoutingConfig::default())
    }

    /// Creates a router with the given configuration.
    pub fn with_config(config: RoutingConfig) -> Self {
        Self {
            routes: SegmentTree::new(),
            config,
        }
    }

    /// The configuration this router operates under.
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Registers `handlers` under `pattern`.
    ///
    /// The pattern is truncated to `max_path_bytes` before tokenization;
    /// empty segments (leading, trailing, or doubled slashes) are skipped.
    /// Registering a pattern that is already present replaces the previous
    /// handler set (last write wins): a supported, non-error operation.
    /// A handler set with no verb at all is rejected.
    pub fn register(&mut self, pattern: &str, handlers: MethodHandlers<H>) -> RoutingResult<()> {
        if handlers.is_empty() {
            return Err(RoutingError::EmptyHandlerSet {
                pattern: pattern.to_string(),
            });
        }

        if pattern.len() > self.config.max_path_bytes {
            warn!(
                pattern,
                max_path_bytes = self.config.max_path_bytes,
                "Pattern exceeds the path length bound and will be truncated"
            );
        }
        let pattern = truncate_lossy(pattern, self.config.max_path_bytes);

        let methods: Vec<&str> = handlers.supported_methods().map(HttpMethod::as_str).collect();
        let mut node = &mut self.routes;
        for segment in segments(pattern) {
            node = node.subtree_or_insert(segment);
        }
        if node.set_value(handlers).is_some() {
            warn!(pattern, "Handlers already registered for path, replacing");
        }

        info!(pattern, methods = ?methods, "Registered path");
        Ok(())
    }

    /// Registers a list of routes in order, stopping at the first failure.
    pub fn register_routes<I>(&mut self, routes: I) -> RoutingResult<()>
    where
        I: IntoIterator<Item = Route<H>>,
    {
        for route in routes {
            self.register(&route.pattern, route.handlers)?;
        }
        Ok(())
    }

    /// Resolves `path` to the handler set registered for it, collecting
    /// wildcard substitutions along the way.
    ///
    /// The path is tokenized exactly like a registration pattern (same
    /// truncation, same empty-segment skipping). At each level the literal
    /// segment is tried first and the wildcard child only as a fallback;
    /// the choice is never revisited. Returns `None` when no handler set is
    /// stored at the end of the descent: the host's cue to fall back to
    /// its document handling.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        let truncated = truncate_lossy(path, self.config.max_path_bytes);
        let mut node = &self.routes;
        let mut args = PathArgs::new(self.config.max_wildcard_captures);

        for segment in segments(truncated) {
            if let Some(literal) = node.subtree(segment) {
                node = literal;
                continue;
            }
            match node.subtree(&self.config.wildcard_token) {
                Some(wildcard) => {
                    node = wildcard;
                    if !args.push(segment) {
                        warn!(
                            path,
                            segment,
                            max_wildcard_captures = self.config.max_wildcard_captures,
                            "Wildcard capture table is full, substitution not recorded"
                        );
                    }
                }
                None => {
                    debug!(path, segment, "No route matches path");
                    return None;
                }
            }
        }

        let matched = node.value().map(|handlers| RouteMatch { handlers, args });
        if matched.is_none() {
            debug!(path, "Path reached a node with no registered handlers");
        }
        matched
    }
}

impl<H> Default for PathRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

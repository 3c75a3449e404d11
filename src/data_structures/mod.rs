//! Data structures for the Makai Router.
//!
//! This module contains the hand-built containers the router is made of:
//! a compact radix trie, the traversal stack backing its iterator, and the
//! recursive segment tree that composes tries into a multi-level path index.
//! All implementations are synchronous and allocation-light; none of them
//! perform I/O or logging.

pub mod kula_segment_tree;
pub mod lanai_stack;
pub mod molokai_trie;

// Re-export common data structures
pub use kula_segment_tree::SegmentTree;
pub use lanai_stack::Stack;
pub use molokai_trie::{PrefixIter, Trie};

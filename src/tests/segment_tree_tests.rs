//! Tests for the Kula Segment Tree.

use proptest::prelude::*;

use crate::data_structures::kula_segment_tree::SegmentTree;
use crate::tests::test_utils::segment_strategy;

#[test]
fn test_descend_and_register_along_segments() {
    let mut tree: SegmentTree<u32> = SegmentTree::new();

    let node = ["api", "v2", "users"]
        .iter()
        .fold(&mut tree, |node, segment| node.subtree_or_insert(segment));
    node.set_value(1);

    let found = ["api", "v2", "users"]
        .iter()
        .try_fold(&tree, |node, segment| node.subtree(segment));
    assert_eq!(found.and_then(SegmentTree::value), Some(&1));

    // A sibling path shares the prefix nodes without touching the value.
    let node = ["api", "v2", "orders"]
        .iter()
        .fold(&mut tree, |node, segment| node.subtree_or_insert(segment));
    node.set_value(2);

    assert_eq!(
        tree.subtree("api").map(SegmentTree::subtree_count),
        Some(1)
    );
    assert_eq!(
        tree.subtree("api")
            .and_then(|node| node.subtree("v2"))
            .map(SegmentTree::subtree_count),
        Some(2)
    );
}

#[test]
fn test_take_value_keeps_subtree() {
    let mut tree: SegmentTree<&str> = SegmentTree::new();
    tree.subtree_or_insert("static").set_value("files");
    tree.set_value("root");

    assert_eq!(tree.take_value(), Some("root"));
    assert_eq!(tree.take_value(), None);
    assert_eq!(
        tree.subtree("static").and_then(SegmentTree::value),
        Some(&"files")
    );
}

proptest! {
    // Property: registering values along arbitrary segment chains makes
    // them retrievable by the same chain, and unrelated chains stay empty.
    #[test]
    fn prop_chain_round_trip(chain in prop::collection::vec(segment_strategy(), 1..5)) {
        let mut tree: SegmentTree<usize> = SegmentTree::new();

        let node = chain
            .iter()
            .fold(&mut tree, |node, segment| node.subtree_or_insert(segment));
        node.set_value(chain.len());

        let found = chain
            .iter()
            .try_fold(&tree, |node, segment| node.subtree(segment));
        prop_assert_eq!(found.and_then(SegmentTree::value), Some(&chain.len()));

        // Extending the chain one level further finds nothing.
        let deeper = found.and_then(|node| node.subtree("missing"));
        prop_assert!(deeper.is_none());
    }

    // Property: subtree_or_insert is idempotent: repeating the descent
    // neither duplicates nodes nor disturbs stored values.
    #[test]
    fn prop_get_subtree_idempotent(chain in prop::collection::vec(segment_strategy(), 1..5)) {
        let mut tree: SegmentTree<usize> = SegmentTree::new();
        for _ in 0..3 {
            let node = chain
                .iter()
                .fold(&mut tree, |node, segment| node.subtree_or_insert(segment));
            node.set_value(7);
        }

        let mut node = &tree;
        for segment in &chain {
            prop_assert_eq!(node.subtree_count(), 1);
            node = node.subtree(segment).expect("chain must exist");
        }
        prop_assert_eq!(node.value(), Some(&7));
    }
}

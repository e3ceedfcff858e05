//! Integration tests for tg-tree.

use proptest::prelude::*;
use tg_tree::{Link, Node, height_iterative, height_recursive};

/// root(1) with left(2, left=4(left=8), right=5) and right(3, left=7, right=6).
fn sample_tree() -> Node<i32> {
    Node::with_children(
        1,
        Some(Node::with_children(
            2,
            Some(Node::new(4).with_left(Node::new(8))),
            Some(Node::new(5)),
        )),
        Some(Node::with_children(3, Some(Node::new(7)), Some(Node::new(6)))),
    )
}

fn left_chain(n: usize) -> Link<usize> {
    let mut root: Link<usize> = None;
    for i in 0..n {
        root = Some(Box::new(Node {
            value: i,
            left: root,
            right: None,
        }));
    }
    root
}

#[test]
fn sample_tree_height() {
    let root = sample_tree();
    assert_eq!(height_recursive(Some(&root)), 4);
    assert_eq!(height_iterative(Some(&root)), 4);
    assert_eq!(root.node_count(), 8);
}

#[test]
fn sample_tree_levels() {
    let root = sample_tree();
    let levels: Vec<Vec<i32>> = root
        .levels()
        .map(|level| level.into_iter().copied().collect())
        .collect();

    assert_eq!(
        levels,
        vec![vec![1], vec![2, 3], vec![4, 5, 7, 6], vec![8]]
    );
}

#[test]
fn left_chain_height_is_length() {
    for n in [0, 1, 2, 10, 100] {
        let root = left_chain(n);
        assert_eq!(height_recursive(root.as_deref()), n);
        assert_eq!(height_iterative(root.as_deref()), n);
    }
}

#[test]
fn iterative_handles_very_deep_chain() {
    let root = left_chain(500_000);
    assert_eq!(height_iterative(root.as_deref()), 500_000);
}

#[test]
fn concurrent_readers_share_tree() {
    let tree = sample_tree();
    let root = &tree;
    let heights: Vec<(usize, usize)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || (root.height_recursive(), root.height_iterative())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(heights.iter().all(|&h| h == (4, 4)));
}

fn arb_tree() -> impl Strategy<Value = Link<i32>> {
    let leaf = prop_oneof![
        Just(None),
        any::<i32>().prop_map(|v| Some(Box::new(Node::new(v)))),
    ];
    leaf.prop_recursive(10, 128, 2, |inner| {
        (any::<i32>(), inner.clone(), inner).prop_map(|(value, left, right)| {
            Some(Box::new(Node { value, left, right }))
        })
    })
}

proptest! {
    #[test]
    fn recursive_and_iterative_agree(tree in arb_tree()) {
        let root = tree.as_deref();
        prop_assert_eq!(height_recursive(root), height_iterative(root));
    }

    #[test]
    fn height_matches_level_count(tree in arb_tree()) {
        let levels = tree.as_deref().map_or(0, |node| node.levels().count());
        prop_assert_eq!(height_iterative(tree.as_deref()), levels);
    }

    #[test]
    fn height_bounded_by_node_count(tree in arb_tree()) {
        let count = tree.as_deref().map_or(0, Node::node_count);
        let height = height_recursive(tree.as_deref());
        prop_assert!(height <= count);
        prop_assert_eq!(height == 0, count == 0);
    }
}

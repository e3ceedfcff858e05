//! Tree height algorithms.
//!
//! Both functions take the (possibly absent) root and return the number of
//! levels on the longest root-to-leaf path. Inputs must be finite trees; the
//! owning `Node` links make cycles unrepresentable in safe code.

use std::collections::VecDeque;

use crate::node::Node;

/// Depth-first height: `0` for `None`, else `1 + max(left, right)`.
///
/// Uses one stack frame per level. Prefer [`height_iterative`] for
/// untrusted or very deep (degenerate) trees.
pub fn height_recursive<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let left = height_recursive(node.left.as_deref());
            let right = height_recursive(node.right.as_deref());
            1 + left.max(right)
        }
    }
}

/// Breadth-first height using an explicit queue.
///
/// Each pass of the outer loop drains exactly one level and enqueues the
/// next, so the counter ends at the number of levels. Memory is bounded by
/// the widest level rather than by depth.
pub fn height_iterative<T>(node: Option<&Node<T>>) -> usize {
    let Some(root) = node else {
        return 0;
    };

    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    queue.push_back(root);
    let mut height = 0;

    while !queue.is_empty() {
        height += 1;
        for _ in 0..queue.len() {
            if let Some(current) = queue.pop_front() {
                queue.extend(current.left.as_deref());
                queue.extend(current.right.as_deref());
            }
        }
    }

    height
}

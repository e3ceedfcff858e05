//! Level-order traversal.

use std::collections::VecDeque;

use crate::node::Node;

/// Iterator over a tree's values grouped by depth, root level first.
///
/// Within a level, values appear left to right.
#[derive(Debug)]
pub struct Levels<'a, T> {
    frontier: VecDeque<&'a Node<T>>,
}

impl<'a, T> Levels<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            frontier: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }

        let width = self.frontier.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            if let Some(node) = self.frontier.pop_front() {
                level.push(&node.value);
                self.frontier.extend(node.left.as_deref());
                self.frontier.extend(node.right.as_deref());
            }
        }
        Some(level)
    }
}

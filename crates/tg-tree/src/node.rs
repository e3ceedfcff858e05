//! Binary tree node.

/// Owning link to an optional child.
pub type Link<T> = Option<Box<Node<T>>>;

/// A binary tree node owning its two optional children.
///
/// Fields are public so callers can wire trees by hand. The ownership model
/// rules out shared or cyclic links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    /// Create a node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Create a node with the given children.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replace the left child, builder style.
    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Replace the right child, builder style.
    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// See [`crate::height_recursive`].
    pub fn height_recursive(&self) -> usize {
        crate::height_recursive(Some(self))
    }

    /// See [`crate::height_iterative`].
    pub fn height_iterative(&self) -> usize {
        crate::height_iterative(Some(self))
    }

    /// Breadth-first iterator over the values, one `Vec` per level.
    pub fn levels(&self) -> crate::Levels<'_, T> {
        crate::Levels::new(Some(self))
    }
}

// Tear the subtree down with an explicit stack so that dropping a
// degenerate chain does not recurse once per level.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

//! tg-tree: binary tree nodes and height computation.
//!
//! Height counts levels: an empty tree has height 0 and a lone root has
//! height 1. Two algorithms are provided and agree on every finite tree:
//! - `height_recursive`: depth-first, stack depth proportional to height
//! - `height_iterative`: breadth-first with an explicit queue, safe for
//!   arbitrarily deep trees
//!
//! # Example
//!
//! ```
//! use tg_tree::{Node, height_iterative, height_recursive};
//!
//! let root = Node::new(1)
//!     .with_left(Node::new(2).with_left(Node::new(4)))
//!     .with_right(Node::new(3));
//!
//! assert_eq!(height_recursive(Some(&root)), 3);
//! assert_eq!(height_iterative(Some(&root)), 3);
//! assert_eq!(height_iterative::<i32>(None), 0);
//! ```

pub mod height;
pub mod node;
pub mod traversal;

pub use height::{height_iterative, height_recursive};
pub use node::{Link, Node};
pub use traversal::Levels;

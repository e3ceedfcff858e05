//! tg-graph: adjacency-list graph store.
//!
//! Provides:
//! - `AdjacencyGraph`, a map from vertex to its ordered adjacency sequence
//! - Directed and undirected edge insertion
//! - A dense `AdjacencyMatrix` view for display and comparison
//!
//! # Example
//!
//! ```
//! use tg_graph::{AdjacencyGraph, EdgeKind};
//!
//! let mut graph = AdjacencyGraph::with_vertices(1..=3);
//! graph.add_edge(1, 2, EdgeKind::Undirected).unwrap();
//! graph.add_edge(1, 3, EdgeKind::Undirected).unwrap();
//!
//! assert_eq!(graph.neighbors(&1).unwrap(), &[2, 3]);
//! assert_eq!(graph.neighbors(&3).unwrap(), &[1]);
//! ```

pub mod error;
pub mod graph;
pub mod matrix;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyGraph, EdgeKind};
pub use matrix::AdjacencyMatrix;

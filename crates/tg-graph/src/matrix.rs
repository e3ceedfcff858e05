//! Dense adjacency-matrix view.
//!
//! Rows and columns are ordered by vertex registration order, so row `i`
//! describes `vertices()[i]`.

use std::collections::HashMap;
use std::hash::Hash;

/// Square matrix of edge multiplicities.
///
/// Cell `(i, j)` counts how many times vertex `j` appears in vertex `i`'s
/// adjacency sequence. Destinations that are not registered vertices have no
/// column and are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<V> {
    vertices: Vec<V>,

    /// Row-major cells: `cells[i * n + j]`.
    cells: Vec<usize>,
}

impl<V: Clone + Eq + Hash> AdjacencyMatrix<V> {
    pub(crate) fn from_adjacency(
        vertices: &[V],
        index: &HashMap<V, usize>,
        adjacency: &[Vec<V>],
    ) -> Self {
        let n = vertices.len();
        let mut cells = vec![0; n * n];

        for (row, neighbors) in adjacency.iter().enumerate() {
            for neighbor in neighbors {
                if let Some(&col) = index.get(neighbor) {
                    cells[row * n + col] += 1;
                }
            }
        }

        Self {
            vertices: vertices.to_vec(),
            cells,
        }
    }
}

impl<V> AdjacencyMatrix<V> {
    /// Row/column labels.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Cell value, or `None` if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.len();
        if row >= n || col >= n {
            return None;
        }
        Some(self.cells[row * n + col])
    }

    /// A full row (panics if out of bounds).
    pub fn row(&self, row: usize) -> &[usize] {
        let n = self.len();
        &self.cells[row * n..(row + 1) * n]
    }

    /// Iterate over rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = (&V, &[usize])> {
        let n = self.len();
        self.vertices
            .iter()
            .enumerate()
            .map(move |(i, v)| (v, &self.cells[i * n..(i + 1) * n]))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AdjacencyGraph, EdgeKind};

    #[test]
    fn empty_matrix() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let matrix = graph.adjacency_matrix();
        assert!(matrix.is_empty());
        assert_eq!(matrix.get(0, 0), None);
        assert_eq!(matrix.rows().count(), 0);
    }

    #[test]
    fn counts_multiplicity_and_skips_unknown_columns() {
        let mut graph = AdjacencyGraph::with_vertices(["x", "y"]);
        graph.add_edge("x", "y", EdgeKind::Directed).unwrap();
        graph.add_edge("x", "y", EdgeKind::Directed).unwrap();
        graph.add_edge("y", "ghost", EdgeKind::Directed).unwrap();

        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.row(0), &[0, 2]);
        assert_eq!(matrix.row(1), &[0, 0]);
        assert_eq!(matrix.get(0, 1), Some(2));
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn rows_are_labelled() {
        let mut graph = AdjacencyGraph::with_vertices([10, 20]);
        graph.add_edge(10, 20, EdgeKind::Undirected).unwrap();

        let rows: Vec<_> = graph.adjacency_matrix().rows().map(|(v, r)| (*v, r.to_vec())).collect();
        assert_eq!(rows, vec![(10, vec![0, 1]), (20, vec![1, 0])]);
    }
}

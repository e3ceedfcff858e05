//! Core adjacency store.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};
use crate::matrix::AdjacencyMatrix;

/// How an inserted edge is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Only `source -> destination` is recorded.
    Directed,
    /// Both `source -> destination` and `destination -> source` are recorded.
    Undirected,
}

impl EdgeKind {
    pub fn is_directed(self) -> bool {
        matches!(self, EdgeKind::Directed)
    }
}

/// Adjacency-list graph keyed by vertex identifier.
///
/// The store holds:
/// - The registered vertices in registration order.
/// - For each vertex, its adjacency sequence in insertion order.
///
/// Duplicate edges and self-loops are stored as given. Vertices are never
/// removed.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    /// Vertex -> slot in `vertices`/`adjacency`.
    index: HashMap<V, usize>,

    /// Registered vertices (slot -> vertex).
    vertices: Vec<V>,

    /// Adjacency sequences, parallel to `vertices`.
    adjacency: Vec<Vec<V>>,
}

impl<V> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<V> AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with the given vertices registered and no edges.
    pub fn with_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Register a vertex with an empty adjacency sequence.
    ///
    /// Calling this for a vertex that is already present leaves it unchanged.
    pub fn add_vertex(&mut self, vertex: V) {
        if self.index.contains_key(&vertex) {
            return;
        }
        tracing::trace!(?vertex, "register vertex");
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
    }

    /// Append `destination` to `source`'s adjacency sequence.
    ///
    /// For `EdgeKind::Undirected` the reverse entry is appended as well. The
    /// source must be registered; in undirected mode the destination must be
    /// too. Both endpoints are checked before anything is written, so a failed
    /// call leaves the graph unchanged.
    pub fn add_edge(&mut self, source: V, destination: V, kind: EdgeKind) -> GraphResult<(), V> {
        let src = self.slot(&source).ok_or_else(|| GraphError::MissingVertex {
            vertex: source.clone(),
        })?;

        match kind {
            EdgeKind::Directed => {
                tracing::trace!(?source, ?destination, "insert directed edge");
                self.adjacency[src].push(destination);
            }
            EdgeKind::Undirected => {
                let dst = self
                    .slot(&destination)
                    .ok_or_else(|| GraphError::MissingVertex {
                        vertex: destination.clone(),
                    })?;
                tracing::trace!(?source, ?destination, "insert undirected edge");
                self.adjacency[src].push(destination);
                self.adjacency[dst].push(source);
            }
        }

        Ok(())
    }

    /// Adjacency sequence of `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<&[V], V> {
        self.slot(vertex)
            .map(|i| self.adjacency[i].as_slice())
            .ok_or_else(|| GraphError::NotFound {
                vertex: vertex.clone(),
            })
    }

    /// Number of entries in `vertex`'s adjacency sequence.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize, V> {
        self.neighbors(vertex).map(<[V]>::len)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Build the dense matrix view of this graph.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<V> {
        AdjacencyMatrix::from_adjacency(&self.vertices, &self.index, &self.adjacency)
    }

    fn slot(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }
}

impl<V> AdjacencyGraph<V> {
    /// Registered vertices in registration order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of adjacency entries.
    ///
    /// An undirected edge contributes two entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over `(vertex, adjacency sequence)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.vertices
            .iter()
            .zip(self.adjacency.iter().map(Vec::as_slice))
    }
}

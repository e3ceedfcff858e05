//! Graph-specific error types.

use thiserror::Error;

pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// Errors raised by the adjacency store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// An edge endpoint was never registered with `add_vertex`.
    #[error("Vertex {vertex:?} is not registered; add it before inserting edges")]
    MissingVertex { vertex: V },

    /// Lookup of a vertex that was never registered.
    #[error("Vertex {vertex:?} not found")]
    NotFound { vertex: V },
}

impl<V> GraphError<V> {
    /// The vertex the error refers to.
    pub fn vertex(&self) -> &V {
        match self {
            GraphError::MissingVertex { vertex } | GraphError::NotFound { vertex } => vertex,
        }
    }
}

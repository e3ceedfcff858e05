//! Workbook schema definitions.

use serde::{Deserialize, Serialize};
use tg_graph::EdgeKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workbook {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub graphs: Vec<GraphDef>,
    #[serde(default)]
    pub trees: Vec<TreeDef>,
}

impl Workbook {
    pub fn graph(&self, id: &str) -> Option<&GraphDef> {
        self.graphs.iter().find(|g| g.id == id)
    }

    pub fn tree(&self, id: &str) -> Option<&TreeDef> {
        self.trees.iter().find(|t| t.id == id)
    }
}

/// Adjacency-list graph: vertices are registered in listed order, then edges
/// are inserted in listed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphDef {
    pub id: String,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub vertices: Vec<i64>,
    /// `[source, destination]` pairs.
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
}

impl GraphDef {
    pub fn edge_kind(&self) -> EdgeKind {
        if self.directed {
            EdgeKind::Directed
        } else {
            EdgeKind::Undirected
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeDef {
    pub id: String,
    /// Absent for the empty tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<NodeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<NodeDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<NodeDef>>,
}

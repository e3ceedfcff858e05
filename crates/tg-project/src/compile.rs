//! Turn workbook definitions into runtime structures.

use tg_graph::AdjacencyGraph;
use tg_tree::{Link, Node};

use crate::ProjectResult;
use crate::schema::{GraphDef, NodeDef, TreeDef};

/// Register the listed vertices, then insert the listed edges in order.
pub fn compile_graph(def: &GraphDef) -> ProjectResult<AdjacencyGraph<i64>> {
    let kind = def.edge_kind();
    tracing::debug!(
        graph = %def.id,
        vertices = def.vertices.len(),
        edges = def.edges.len(),
        ?kind,
        "compiling graph"
    );

    let mut graph = AdjacencyGraph::with_vertices(def.vertices.iter().copied());
    for &(source, destination) in &def.edges {
        graph.add_edge(source, destination, kind)?;
    }
    Ok(graph)
}

/// Build the owned tree described by `def`; `None` for an empty tree.
pub fn compile_tree(def: &TreeDef) -> Link<i64> {
    tracing::debug!(tree = %def.id, "compiling tree");
    def.root.as_ref().map(|root| Box::new(compile_node(root)))
}

fn compile_node(def: &NodeDef) -> Node<i64> {
    Node {
        value: def.value,
        left: def.left.as_deref().map(|n| Box::new(compile_node(n))),
        right: def.right.as_deref().map(|n| Box::new(compile_node(n))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProjectError;
    use tg_graph::GraphError;
    use tg_tree::height_iterative;

    #[test]
    fn compile_directed_graph() {
        let def = GraphDef {
            id: "d".to_string(),
            directed: true,
            vertices: vec![1, 2],
            edges: vec![(1, 2), (2, 1), (2, 5)],
        };
        let graph = compile_graph(&def).unwrap();
        assert_eq!(graph.neighbors(&1).unwrap(), &[2]);
        assert_eq!(graph.neighbors(&2).unwrap(), &[1, 5]);
    }

    #[test]
    fn compile_reports_missing_vertex() {
        let def = GraphDef {
            id: "bad".to_string(),
            directed: false,
            vertices: vec![1],
            edges: vec![(1, 2)],
        };
        let err = compile_graph(&def).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::Graph(GraphError::MissingVertex { vertex: 2 })
        ));
    }

    #[test]
    fn compile_tree_shapes() {
        let empty = TreeDef {
            id: "empty".to_string(),
            root: None,
        };
        assert!(compile_tree(&empty).is_none());

        let def = TreeDef {
            id: "t".to_string(),
            root: Some(NodeDef {
                value: 1,
                left: None,
                right: Some(Box::new(NodeDef {
                    value: 2,
                    left: None,
                    right: None,
                })),
            }),
        };
        let tree = compile_tree(&def);
        assert_eq!(height_iterative(tree.as_deref()), 2);
        assert_eq!(tree.as_ref().and_then(|n| n.right.as_ref()).map(|n| n.value), Some(2));
    }
}

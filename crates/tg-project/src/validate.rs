//! Workbook validation logic.

use crate::schema::{GraphDef, Workbook};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_workbook(workbook: &Workbook) -> Result<(), ValidationError> {
    if workbook.version != LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: workbook.version,
        });
    }

    let mut graph_ids = HashSet::new();
    for graph in &workbook.graphs {
        check_id(&graph.id, "graphs.id")?;
        if !graph_ids.insert(&graph.id) {
            return Err(ValidationError::DuplicateId {
                id: graph.id.clone(),
                context: "graphs".to_string(),
            });
        }
        validate_graph(graph)?;
    }

    let mut tree_ids = HashSet::new();
    for tree in &workbook.trees {
        check_id(&tree.id, "trees.id")?;
        if !tree_ids.insert(&tree.id) {
            return Err(ValidationError::DuplicateId {
                id: tree.id.clone(),
                context: "trees".to_string(),
            });
        }
    }

    Ok(())
}

fn check_id(id: &str, field: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: format!("{id:?}"),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_graph(graph: &GraphDef) -> Result<(), ValidationError> {
    let vertices: HashSet<i64> = graph.vertices.iter().copied().collect();

    for &(source, destination) in &graph.edges {
        if !vertices.contains(&source) {
            return Err(ValidationError::MissingReference {
                id: source.to_string(),
                context: format!("graph {} edge source", graph.id),
            });
        }
        // Directed edges may point at vertices that are never registered.
        if !graph.directed && !vertices.contains(&destination) {
            return Err(ValidationError::MissingReference {
                id: destination.to_string(),
                context: format!("graph {} edge destination", graph.id),
            });
        }
    }

    Ok(())
}

//! tg-project: workbook file format, validation and compilation.
//!
//! A workbook names a set of graphs and binary trees. It is stored as YAML
//! or JSON, validated on load and save, and compiled into
//! `tg_graph::AdjacencyGraph` / `tg_tree::Node` values.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{compile_graph, compile_tree};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_workbook};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] tg_graph::GraphError<i64>),

    #[error("Not found: {what} {id}")]
    NotFound { what: &'static str, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Workbook> {
    tracing::debug!(path = %path.display(), "loading YAML workbook");
    let content = std::fs::read_to_string(path)?;
    let workbook: Workbook = serde_yaml::from_str(&content)?;
    validate_workbook(&workbook)?;
    Ok(workbook)
}

pub fn save_yaml(path: &Path, workbook: &Workbook) -> ProjectResult<()> {
    validate_workbook(workbook)?;
    let content = serde_yaml::to_string(workbook)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Workbook> {
    tracing::debug!(path = %path.display(), "loading JSON workbook");
    let content = std::fs::read_to_string(path)?;
    let workbook: Workbook = serde_json::from_str(&content)?;
    validate_workbook(&workbook)?;
    Ok(workbook)
}

pub fn save_json(path: &Path, workbook: &Workbook) -> ProjectResult<()> {
    validate_workbook(workbook)?;
    let content = serde_json::to_string_pretty(workbook)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<Workbook> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

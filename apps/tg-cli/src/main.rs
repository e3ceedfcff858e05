use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use tg_graph::{AdjacencyGraph, EdgeKind};
use tg_project::{ProjectError, ProjectResult, compile_graph, compile_tree};
use tg_tree::{Node, height_iterative, height_recursive};

#[derive(Parser)]
#[command(name = "tg-cli")]
#[command(about = "TreeGraph CLI - adjacency lists and binary tree heights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate workbook syntax and structure
    Validate {
        /// Path to the workbook (YAML, or JSON by extension)
        workbook_path: PathBuf,
    },
    /// Print the adjacency list of one or all graphs
    Graph {
        /// Path to the workbook
        workbook_path: PathBuf,
        /// Graph ID (defaults to every graph)
        #[arg(long)]
        id: Option<String>,
        /// Also print the adjacency matrix
        #[arg(long)]
        matrix: bool,
    },
    /// Print the height of one or all trees
    Height {
        /// Path to the workbook
        workbook_path: PathBuf,
        /// Tree ID (defaults to every tree)
        #[arg(long)]
        id: Option<String>,
    },
    /// Build the built-in seven-vertex graph and eight-node tree
    Demo,
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { workbook_path } => cmd_validate(&workbook_path),
        Commands::Graph {
            workbook_path,
            id,
            matrix,
        } => cmd_graph(&workbook_path, id.as_deref(), matrix),
        Commands::Height { workbook_path, id } => cmd_height(&workbook_path, id.as_deref()),
        Commands::Demo => cmd_demo(),
    }
}

fn cmd_validate(workbook_path: &Path) -> ProjectResult<()> {
    println!("Validating workbook: {}", workbook_path.display());
    let workbook = tg_project::load(workbook_path)?;
    println!(
        "✓ Workbook '{}' is valid ({} graphs, {} trees)",
        workbook.name,
        workbook.graphs.len(),
        workbook.trees.len()
    );
    Ok(())
}

fn cmd_graph(workbook_path: &Path, id: Option<&str>, matrix: bool) -> ProjectResult<()> {
    let workbook = tg_project::load(workbook_path)?;
    let defs = match id {
        Some(id) => vec![workbook.graph(id).ok_or_else(|| not_found("graph", id))?],
        None => workbook.graphs.iter().collect(),
    };

    for def in defs {
        tracing::info!(graph = %def.id, "printing graph");
        let graph = compile_graph(def)?;
        let mode = if def.directed { "directed" } else { "undirected" };
        println!("Graph {} ({mode})", def.id);
        print_adjacency_list(&graph);
        if matrix {
            println!();
            print_adjacency_matrix(&graph);
        }
        println!();
    }
    Ok(())
}

fn cmd_height(workbook_path: &Path, id: Option<&str>) -> ProjectResult<()> {
    let workbook = tg_project::load(workbook_path)?;
    let defs = match id {
        Some(id) => vec![workbook.tree(id).ok_or_else(|| not_found("tree", id))?],
        None => workbook.trees.iter().collect(),
    };

    for def in defs {
        let tree = compile_tree(def);
        print_heights(&def.id, tree.as_deref());
    }
    Ok(())
}

fn cmd_demo() -> ProjectResult<()> {
    let mut graph = AdjacencyGraph::with_vertices(1..=7_i64);
    for (a, b) in [(1, 2), (1, 3), (1, 4), (2, 3), (3, 5), (3, 6)] {
        graph.add_edge(a, b, EdgeKind::Undirected)?;
    }

    println!("Adjacency List:");
    print_adjacency_list(&graph);
    println!();
    println!("Adjacency Matrix:");
    print_adjacency_matrix(&graph);
    println!();

    let root = Node::with_children(
        1_i64,
        Some(Node::with_children(
            2,
            Some(Node::new(4).with_left(Node::new(8))),
            Some(Node::new(5)),
        )),
        Some(Node::with_children(3, Some(Node::new(7)), Some(Node::new(6)))),
    );
    print_heights("demo", Some(&root));
    Ok(())
}

fn not_found(what: &'static str, id: &str) -> ProjectError {
    ProjectError::NotFound {
        what,
        id: id.to_string(),
    }
}

fn print_adjacency_list<V>(graph: &AdjacencyGraph<V>)
where
    V: Display,
{
    for (vertex, neighbors) in graph.iter() {
        let joined = neighbors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{vertex} | {joined}");
    }
}

fn print_adjacency_matrix<V>(graph: &AdjacencyGraph<V>)
where
    V: Display + Eq + Hash + Clone + std::fmt::Debug,
{
    let matrix = graph.adjacency_matrix();
    let labels: Vec<String> = matrix.vertices().iter().map(ToString::to_string).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(1);

    print!("{:width$}", "");
    for label in &labels {
        print!(" {label:>width$}");
    }
    println!();

    for (label, (_, row)) in labels.iter().zip(matrix.rows()) {
        print!("{label:>width$}");
        for cell in row {
            print!(" {cell:>width$}");
        }
        println!();
    }
}

fn print_heights<T>(id: &str, root: Option<&Node<T>>) {
    let recursive = height_recursive(root);
    let iterative = height_iterative(root);
    if recursive != iterative {
        tracing::warn!(tree = id, recursive, iterative, "height algorithms disagree");
    }
    println!("Tree {id}: height {recursive} (recursive), {iterative} (iterative)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_graph_flags() {
        let cli = Cli::parse_from(["tg-cli", "graph", "wb.yaml", "--id", "figure", "--matrix"]);
        match cli.command {
            Commands::Graph { id, matrix, .. } => {
                assert_eq!(id.as_deref(), Some("figure"));
                assert!(matrix);
            }
            _ => panic!("expected graph subcommand"),
        }
    }

    #[test]
    fn demo_runs() {
        cmd_demo().unwrap();
    }

    #[test]
    fn unknown_id_is_reported() {
        let workbook = tg_project::Workbook {
            version: tg_project::LATEST_VERSION,
            name: "w".to_string(),
            graphs: vec![],
            trees: vec![],
        };
        let path = std::env::temp_dir().join("tg_cli_unknown_id.yaml");
        tg_project::save_yaml(&path, &workbook).unwrap();

        let err = cmd_graph(&path, Some("nope"), false).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound { what: "graph", .. }));
    }
}

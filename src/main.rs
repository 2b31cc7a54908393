use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use reachgraph::config::{load_config, GraphConfig};
use reachgraph::format::{format_adjacency, format_report};
use reachgraph::graph::GraphTraverser;
use reachgraph::loader::read_graph_file;
use reachgraph::types::*;

/// Reachability search over a directed graph file.
#[derive(Parser)]
#[command(
    name = "reachgraph",
    about = "Load a directed graph and search for a path with DFS and BFS"
)]
struct Cli {
    /// Graph file in the `<count>` / `id:<id> tag:<tag>` / `<orig> <dest>` format
    graph_file: PathBuf,
    /// Id of the vertex the search starts from
    #[arg(allow_negative_numbers = true)]
    from_id: VertexId,
    /// Id of the vertex to look for
    #[arg(allow_negative_numbers = true)]
    to_id: VertexId,
    /// JSON file with capacity limits
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print both search reports as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        let _ = io::stdout().flush();
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr, filtered by `REACHGRAPH_LOG` (default `warn`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("REACHGRAPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> reachgraph::errors::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GraphConfig::default(),
    };

    let graph = read_graph_file(&cli.graph_file, &config)?;
    tracing::info!(
        path = %cli.graph_file.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let traverser = GraphTraverser::with_queue_capacity(&graph, config.queue_capacity);

    if cli.json {
        let dfs = traverser.depth_first_search(cli.from_id, cli.to_id)?;
        let bfs = traverser.breadth_first_search(cli.from_id, cli.to_id)?;
        let output = serde_json::json!({
            "graph": graph.stats(),
            "searches": [dfs, bfs],
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Input graph:");
    print!("{}", format_adjacency(&graph));
    for strategy in [SearchStrategy::DepthFirst, SearchStrategy::BreadthFirst] {
        print_section_header(strategy, cli.from_id, cli.to_id);
        let report = traverser.search(strategy, cli.from_id, cli.to_id)?;
        print!("{}", format_report(&report));
    }
    Ok(())
}

fn print_section_header(strategy: SearchStrategy, from_id: VertexId, to_id: VertexId) {
    println!("\n---{}---", strategy.as_str().to_uppercase());
    println!("From vertex id: {}", from_id);
    println!("To vertex id: {}", to_id);
    println!("Output:");
}

//! `crossing check` command - validate a graph document

use crate::cli::CheckArgs;
use crate::commands::dispatch::CommandContext;
use crossing_core::document::load_graph;
use crossing_core::error::Result;
use crossing_core::format::OutputFormat;

pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    let mismatch = graph.expected_edges() != graph.edge_count();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "path": args.graph.display().to_string(),
                    "nodes": graph.node_count(),
                    "edges": graph.edge_count(),
                    "expected_edges": graph.expected_edges(),
                    "edge_count_mismatch": mismatch,
                })
            );
        }
        OutputFormat::Human => {
            println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
            if mismatch && !ctx.cli.quiet {
                eprintln!(
                    "warning: document announces {} edges",
                    graph.expected_edges()
                );
            }
        }
    }

    Ok(())
}

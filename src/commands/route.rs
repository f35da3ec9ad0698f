//! `crossing route` command - shortest route between two nodes

use crate::cli::RouteArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crossing_core::document::load_graph;
use crossing_core::error::Result;
use crossing_core::format::{render_route, OutputFormat};
use crossing_core::graph::shortest_path;

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let source = ctx.source(args.source);
    let target = ctx.target(args.target, &graph);
    let wait = ctx.wait_policy(&args.wait)?;

    let outcome = shortest_path(&graph, source, target, &wait)?;
    trace_command!(ctx.cli, ctx.start, "shortest_path");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "target": target,
                "wait": wait,
                "outcome": outcome,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", render_route(&outcome, ctx.precision()));
        }
    }

    Ok(())
}

//! `crossing distances` command - full shortest-path tree from one source

use crate::cli::DistancesArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crossing_core::document::load_graph;
use crossing_core::error::Result;
use crossing_core::format::{render_tree, tree_to_json, OutputFormat};
use crossing_core::graph::shortest_path_tree;

pub fn execute(ctx: &CommandContext, args: &DistancesArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let source = ctx.source(args.source);
    let wait = ctx.wait_policy(&args.wait)?;

    let tree = shortest_path_tree(&graph, source, None, &wait)?;
    trace_command!(ctx.cli, ctx.start, "shortest_path_tree");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tree_to_json(&tree))?);
        }
        OutputFormat::Human => {
            println!("{}", render_tree(&tree, ctx.precision()));
            if !ctx.cli.quiet {
                let unreached = tree.node_count() - tree.reached().count();
                if unreached > 0 {
                    eprintln!("{} of {} nodes unreachable", unreached, tree.node_count());
                }
            }
        }
    }

    Ok(())
}

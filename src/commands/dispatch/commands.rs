use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, distances, route};
use crossing_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => route::execute(ctx, args),
            Commands::Distances(args) => distances::execute(ctx, args),
            Commands::Check(args) => check::execute(ctx, args),
        }
    }
}

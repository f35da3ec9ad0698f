//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, WaitArgs};
use crossing_core::config::EngineConfig;
use crossing_core::error::Result;
use crossing_core::graph::{Graph, NodeId, WaitPolicy};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--wait` if given, else the configured policy
    pub fn wait_policy(&self, args: &WaitArgs) -> Result<WaitPolicy> {
        match args.wait {
            Some(value) => {
                let policy = WaitPolicy::constant(value);
                policy.validate()?;
                Ok(policy)
            }
            None => Ok(self.config.wait.clone()),
        }
    }

    pub fn source(&self, flag: Option<NodeId>) -> NodeId {
        flag.or(self.config.query.source).unwrap_or(0)
    }

    pub fn target(&self, flag: Option<NodeId>, graph: &Graph) -> NodeId {
        flag.or(self.config.query.target)
            .unwrap_or_else(|| graph.last_node())
    }

    pub fn precision(&self) -> Option<usize> {
        self.config.output.precision
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: print the version
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("crossing {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}

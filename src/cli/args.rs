//! Argument structs for crossing subcommands

use std::path::PathBuf;

use clap::Args;
use crossing_core::graph::NodeId;

/// Wait-cost override shared by query commands
#[derive(Args, Debug, Clone, Default)]
pub struct WaitArgs {
    /// Constant wait at every intersection, replacing the configured policy
    #[arg(long, value_name = "COST", allow_negative_numbers = true)]
    pub wait: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Graph document (.json, otherwise TOML)
    pub graph: PathBuf,

    /// Start node (defaults to the configured source, then 0)
    #[arg(long, short)]
    pub source: Option<NodeId>,

    /// Destination node (defaults to the configured target, then the last node)
    #[arg(long, short)]
    pub target: Option<NodeId>,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DistancesArgs {
    /// Graph document (.json, otherwise TOML)
    pub graph: PathBuf,

    /// Start node (defaults to the configured source, then 0)
    #[arg(long, short)]
    pub source: Option<NodeId>,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Graph document (.json, otherwise TOML)
    pub graph: PathBuf,
}

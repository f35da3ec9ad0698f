//! CLI argument parsing for crossing
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crossing_core::format::OutputFormat;
pub use args::{CheckArgs, DistancesArgs, RouteArgs, WaitArgs};
use parse::parse_output_format;

/// Crossing - shortest routes through road graphs with intersection waits
#[derive(Parser, Debug)]
#[command(name = "crossing")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. debug, crossing_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./crossing.toml when present)
    #[arg(long, global = true, env = "CROSSING_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest route between two intersections
    Route(RouteArgs),

    /// Distance and predecessor of every node from one source
    Distances(DistancesArgs),

    /// Load and validate a graph document
    Check(CheckArgs),
}

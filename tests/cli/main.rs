//! Integration tests for the crossing subcommands

mod check;
mod config;
mod distances;
mod errors;
mod logging;

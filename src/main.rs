//! Crossing - shortest routes through road graphs with intersection waits
//!
//! Loads a graph document, runs a single-source search with the configured
//! wait policy, and prints the route, the full distance table, or a summary.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use crossing_core::error::{CrossingError, ExitCode as CrossingExitCode};
use crossing_core::format::OutputFormat;
use crossing_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` may not have been parsed yet, so read it from argv
            match parse_failure(&err) {
                Some(error) if argv_format_json => {
                    eprintln!("{}", error.to_json());
                    return ExitCode::from(error.exit_code() as u8);
                }
                _ => err.exit(),
            }
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(CrossingExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Map a clap failure onto the crate's error taxonomy.
///
/// `None` for help and version output, which clap prints itself.
fn parse_failure(err: &clap::Error) -> Option<CrossingError> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::Io | ErrorKind::Format => Some(CrossingError::Other(err.to_string())),
        // every remaining kind is a malformed command line
        _ => Some(CrossingError::UsageError(err.to_string())),
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg.eq_ignore_ascii_case("--format=json") {
            return true;
        }
    }
    false
}

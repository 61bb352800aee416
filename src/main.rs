//! GraphLab - classical graph algorithms from the command line
//!
//! Loads a weighted graph from JSON, YAML, stdin, or a built-in sample and
//! runs one of BFS, DFS, Dijkstra, Bellman-Ford, Floyd-Warshall, Kruskal or
//! Prim over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphlab_core::error::GraphLabError;
use graphlab_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Until the config is read only the flag decides how errors are reported
    let mut error_format = cli.format.unwrap_or_default();
    let outcome = commands::dispatch::open(&cli, start).and_then(|ctx| {
        error_format = ctx.format();
        commands::dispatch::execute(&ctx)
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, error_format, cli.quiet),
    }
}

/// Parse argv. Clap errors keep clap's own output unless JSON was requested
/// on the command line, since the config has not been read yet.
fn parse_cli() -> Result<Cli, ExitCode> {
    Cli::try_parse().map_err(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
            || !json_requested(env::args().skip(1))
        {
            err.exit();
        }
        report(&from_clap(&err), OutputFormat::Json, false)
    })
}

fn from_clap(err: &clap::Error) -> GraphLabError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => GraphLabError::UsageError(err.to_string()),
        _ => GraphLabError::Other(err.to_string()),
    }
}

/// Write the error to stderr and turn it into the process exit code
fn report(err: &GraphLabError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        _ if quiet => {}
        _ => eprintln!("error: {}", err),
    }
    ExitCode::from(err.exit_code() as u8)
}

fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.as_deref() == Some("json") {
            return true;
        }
    }
    false
}

//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphlab_core::config::LabConfig;
use graphlab_core::error::Result;
use graphlab_core::graph::{load_graph, Graph};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: LabConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: LabConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format from `--format`, else the configured default
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.default_format)
    }

    /// Decimal places for fractional costs in human output
    pub fn precision(&self) -> usize {
        self.config.output.precision
    }

    /// Load a graph using the configured validation rules
    pub fn load_graph(&self, source: &str) -> Result<Graph> {
        let graph = load_graph(source, &self.config.validation)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }

    /// Print rendered output, which already ends with a newline when non-empty
    pub fn emit(&self, text: &str) {
        print!("{}", text);
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphlab {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classical graph algorithms over small weighted graphs.");
        println!();
        println!("Run `graphlab --help` for usage information.");
        Ok(())
    }
}

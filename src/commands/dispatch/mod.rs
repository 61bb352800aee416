//! Command dispatch logic for graphlab

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use graphlab_core::config::LabConfig;
use graphlab_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

/// Discover the configuration and build the context every command runs in
pub fn open(cli: &Cli, start: Instant) -> Result<CommandContext<'_>> {
    let cwd = env::current_dir()?;
    let config = LabConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    Ok(CommandContext::new(cli, config, start))
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    }
}

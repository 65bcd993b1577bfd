//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::network::Network;
use hydroroute_core::error::Result;

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn open_network(&self) -> Result<Network> {
        let network = Network::open(self.cli)?;
        trace_command!(self.start, "open_network");
        Ok(network)
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
        println!("hydroroute {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest travel times across water-distribution pipe networks.");
        println!();
        println!("Run `hydroroute --help` for usage information.");
        Ok(())
    }
}

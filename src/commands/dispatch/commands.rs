//! Command implementations for all hydroroute commands

use crate::cli::Commands;
use crate::commands::{init, neighbors, pipes, route, survey, times};
use hydroroute_core::error::Result;

use super::command::{Command, CommandContext};
use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let cli = ctx.cli;
        let result = match self {
            Commands::Init { path, force } => init::execute(cli, path, *force),
            Commands::Route { from, to } => route::execute(cli, &ctx.open_network()?, *from, *to),
            Commands::Times { from } => times::execute(cli, &ctx.open_network()?, *from),
            Commands::Neighbors { center } => {
                neighbors::execute(cli, &ctx.open_network()?, *center)
            }
            Commands::Pipes => pipes::execute(cli, &ctx.open_network()?),
            Commands::Survey => survey::execute(cli, &ctx.open_network()?),
        };
        trace_command!(ctx.start, "execute_command");
        result
    }
}

//! CLI argument parsing for hydroroute
//!
//! Global flags select the network, the output format and logging, and
//! apply one-run pipe changes before the command executes.

pub mod commands;
pub mod format;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use hydroroute_core::format::OutputFormat;
use hydroroute_core::graph::QueueKind;
pub use parse::{PipeRef, PipeSpec};
use parse::{parse_output_format, parse_pipe_ref, parse_pipe_spec, parse_queue_kind};

/// Hydroroute - travel times between water-distribution centers
#[derive(Parser, Debug)]
#[command(name = "hydroroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network definition file (defaults to the built-in sample network)
    #[arg(long, global = true, env = "HYDROROUTE_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Add a pipe for this run (repeatable)
    #[arg(long = "add", global = true, value_name = "FROM:TO:MINUTES", value_parser = parse_pipe_spec, action = clap::ArgAction::Append)]
    pub add: Vec<PipeSpec>,

    /// Disable a pipe for this run (repeatable)
    #[arg(long = "disable", global = true, value_name = "FROM:TO", value_parser = parse_pipe_ref, action = clap::ArgAction::Append)]
    pub disable: Vec<PipeRef>,

    /// Enable a pipe for this run (repeatable)
    #[arg(long = "enable", global = true, value_name = "FROM:TO", value_parser = parse_pipe_ref, action = clap::ArgAction::Append)]
    pub enable: Vec<PipeRef>,

    /// Priority queue used by the solver (overrides the network file)
    #[arg(long, global = true, value_parser = parse_queue_kind)]
    pub queue: Option<QueueKind>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

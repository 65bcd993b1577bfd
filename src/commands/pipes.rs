//! `hydroroute pipes` command - list every pipe

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{pipe_json, print_json, status_label};
use crate::commands::network::Network;
use crate::output_by_format_result;
use hydroroute_core::error::Result;

/// Execute the pipes command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let graph = &network.graph;
    let enabled = graph.edges().filter(|edge| edge.available).count();

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "network": network.origin,
            "centers": graph.vertex_count(),
            "pipes": graph.edges().map(pipe_json).collect::<Vec<_>>(),
        })),
        human => {
            println!("{:>4}  {:>4}  {:>7}  STATUS", "FROM", "TO", "MINUTES");
            for edge in graph.edges() {
                println!(
                    "{:>4}  {:>4}  {:>7}  {}",
                    edge.from,
                    edge.to,
                    edge.weight,
                    status_label(edge.available)
                );
            }
            if !cli.quiet {
                println!();
                println!(
                    "{} pipes, {} enabled, {} centers ({})",
                    graph.edge_count(),
                    enabled,
                    graph.vertex_count(),
                    network.origin
                );
            }
        }
    )
}

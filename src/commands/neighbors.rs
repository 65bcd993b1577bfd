//! `hydroroute neighbors` command - outgoing pipes of a center

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{pipe_json, print_json, status_label};
use crate::commands::network::Network;
use crate::output_by_format_result;
use hydroroute_core::error::Result;
use hydroroute_core::graph::VertexId;

/// Execute the neighbors command
///
/// Lists one entry per adjacency slot, so a re-added pipe appears again.
pub fn execute(cli: &Cli, network: &Network, center: VertexId) -> Result<()> {
    let neighbors = network.graph.neighbors(center)?;
    let pipes: Vec<_> = network.graph.outgoing(center)?.collect();

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "center": center,
            "neighbors": neighbors,
            "pipes": pipes.iter().map(|edge| pipe_json(edge)).collect::<Vec<_>>(),
        })),
        human => {
            if pipes.is_empty() {
                println!("Center {} has no outgoing pipes", center);
            } else {
                if !cli.quiet {
                    println!("Pipes out of center {}:", center);
                }
                for edge in &pipes {
                    println!(
                        "  {} -> {}  {} min  {}",
                        edge.from,
                        edge.to,
                        edge.weight,
                        status_label(edge.available)
                    );
                }
            }
        }
    )
}

//! `hydroroute route` command - shortest route between two centers

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::print_json;
use crate::commands::network::Network;
use crate::output_by_format_result;
use hydroroute_core::error::Result;
use hydroroute_core::format::format_route;
use hydroroute_core::graph::{shortest_paths_using, VertexId};

/// Execute the route command
///
/// An unreachable destination is reported, not treated as an error.
pub fn execute(cli: &Cli, network: &Network, from: VertexId, to: VertexId) -> Result<()> {
    let paths = shortest_paths_using(&network.graph, from, network.queue)?;
    let route = paths.route_to(to)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "from": from,
            "to": to,
            "reachable": route.is_some(),
            "minutes": route.as_ref().map(|r| r.minutes),
            "route": route.as_ref().map(|r| &r.vertices),
        })),
        human => {
            match &route {
                Some(route) => println!(
                    "Route from {} to {}: {} ({} min)",
                    from,
                    to,
                    format_route(&route.vertices),
                    route.minutes
                ),
                None => println!("No route from {} to {}", from, to),
            }
        }
    )
}

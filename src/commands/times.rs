//! `hydroroute times` command - travel times from one center to all others

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{minutes_label, print_json};
use crate::commands::network::Network;
use crate::output_by_format_result;
use hydroroute_core::error::Result;
use hydroroute_core::format::format_route;
use hydroroute_core::graph::{shortest_paths_using, VertexId};

/// Execute the times command
pub fn execute(cli: &Cli, network: &Network, from: VertexId) -> Result<()> {
    let paths = shortest_paths_using(&network.graph, from, network.queue)?;

    let mut rows = Vec::with_capacity(paths.vertex_count());
    for center in 0..paths.vertex_count() {
        let route = paths.route_to(center)?;
        rows.push((center, paths.distance(center)?, route));
    }

    output_by_format_result!(cli.format,
        json => {
            let times: Vec<_> = rows
                .iter()
                .map(|(center, distance, route)| {
                    json!({
                        "center": center,
                        "minutes": distance,
                        "route": route.as_ref().map(|r| &r.vertices),
                    })
                })
                .collect();
            print_json(&json!({
                "source": from,
                "network": network.origin,
                "queue": network.queue,
                "times": times,
                "stats": paths.stats(),
            }))
        },
        human => {
            if !cli.quiet {
                println!("Travel times from center {} ({}):", from, network.origin);
            }
            for (center, distance, route) in &rows {
                let path = route
                    .as_ref()
                    .map(|r| format_route(&r.vertices))
                    .unwrap_or_default();
                println!("  {:>3}  {:<12} {}", center, minutes_label(*distance), path);
            }
        }
    )
}

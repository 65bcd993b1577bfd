//! Subcommands

use clap::Subcommand;
use hydroroute_core::graph::VertexId;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the sample network definition to a file
    Init {
        /// Destination file
        #[arg(default_value = "network.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Shortest route between two centers
    Route {
        /// Source center
        from: VertexId,

        /// Destination center
        to: VertexId,
    },

    /// Travel times from one center to every center
    Times {
        /// Source center
        from: VertexId,
    },

    /// Outgoing pipes of a center, including duplicate slots
    Neighbors {
        /// Center id
        center: VertexId,
    },

    /// List every pipe with its travel time and availability
    Pipes,

    /// Run the solver from every center and name the best source
    Survey,
}

//! Per-run network: the definition plus this run's pipe changes

use hydroroute_core::config::NetworkConfig;
use hydroroute_core::error::Result;
use hydroroute_core::graph::{Graph, QueueKind, TracingObserver};

use crate::cli::Cli;

/// A graph ready for queries, with the queue the solver should use
pub struct Network {
    pub graph: Graph,
    pub queue: QueueKind,
    /// Where the definition came from, for display
    pub origin: String,
}

impl Network {
    /// Load the definition named by `--network` (or the sample) and apply
    /// `--add`, then `--disable`, then `--enable`.
    pub fn open(cli: &Cli) -> Result<Self> {
        let config = match &cli.network {
            Some(path) => NetworkConfig::load(path)?,
            None => NetworkConfig::sample(),
        };
        let origin = match &config.source_path {
            Some(path) => path.display().to_string(),
            None => "built-in sample".to_string(),
        };

        let mut graph = config.build_graph()?;
        graph.subscribe(TracingObserver);

        for pipe in &cli.add {
            graph.add_edge(pipe.from, pipe.to, pipe.minutes)?;
        }
        for pipe in &cli.disable {
            graph.set_availability(pipe.from, pipe.to, false)?;
        }
        for pipe in &cli.enable {
            graph.set_availability(pipe.from, pipe.to, true)?;
        }

        Ok(Self {
            graph,
            queue: cli.queue.unwrap_or(config.solver.queue),
            origin,
        })
    }
}

//! Network definition files for hydroroute
//!
//! A network file describes the centers and pipes for one run. Runtime
//! changes (enabling, disabling, adding pipes) are never written back.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{HydroError, Result};
use crate::graph::{Graph, SAMPLE_CENTERS, SAMPLE_PIPES};

pub use types::{NetworkConfig, PipeConfig, SolverConfig, NETWORK_FORMAT_VERSION};

impl NetworkConfig {
    /// Empty definition with `centers` centers and no pipes
    pub fn new(centers: usize) -> Self {
        Self {
            version: NETWORK_FORMAT_VERSION,
            centers,
            solver: SolverConfig::default(),
            pipes: Vec::new(),
            source_path: None,
        }
    }

    /// The built-in five-center network
    pub fn sample() -> Self {
        let mut config = Self::new(SAMPLE_CENTERS);
        config.pipes = SAMPLE_PIPES
            .iter()
            .map(|&(from, to, minutes)| PipeConfig {
                from,
                to,
                minutes,
                available: true,
            })
            .collect();
        config
    }

    /// Parse a definition from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: NetworkConfig = toml::from_str(content)?;
        if config.version != NETWORK_FORMAT_VERSION {
            return Err(HydroError::unsupported(
                "network format version",
                config.version,
                NETWORK_FORMAT_VERSION,
            ));
        }
        Ok(config)
    }

    /// Load a definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), centers = config.centers, pipes = config.pipes.len(), "network_loaded");
        Ok(config)
    }

    /// Save the definition to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check center count and pipe endpoints
    pub fn validate(&self) -> Result<()> {
        let path = self.source_path.as_deref();
        if self.centers == 0 {
            return Err(HydroError::invalid_network(
                path,
                "a network needs at least one center",
            ));
        }
        for (index, pipe) in self.pipes.iter().enumerate() {
            for center in [pipe.from, pipe.to] {
                if center >= self.centers {
                    return Err(HydroError::invalid_network(
                        path,
                        format!(
                            "pipe #{} ({} -> {}) references center {} but the network has {} centers",
                            index + 1,
                            pipe.from,
                            pipe.to,
                            center,
                            self.centers
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate and build the graph, adding pipes in file order
    pub fn build_graph(&self) -> Result<Graph> {
        self.validate()?;
        let mut graph = Graph::new(self.centers)?;
        for pipe in &self.pipes {
            graph.add_edge_with_availability(pipe.from, pipe.to, pipe.minutes, pipe.available)?;
        }
        Ok(graph)
    }
}

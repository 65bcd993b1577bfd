//! Network definition types

use crate::graph::{QueueKind, VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current network file format version
pub const NETWORK_FORMAT_VERSION: u32 = 1;

/// A pipe network definition, loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Number of water centers, ids `0..centers`
    pub centers: usize,

    /// Solver tuning
    #[serde(default)]
    pub solver: SolverConfig,

    /// Pipes in insertion order
    #[serde(default)]
    pub pipes: Vec<PipeConfig>,

    /// File this definition was read from
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Priority queue implementation
    #[serde(default)]
    pub queue: QueueKind,
}

/// A single directed pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeConfig {
    pub from: VertexId,
    pub to: VertexId,

    /// Travel time in minutes
    pub minutes: Weight,

    /// Whether the pipe starts enabled (default true)
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_version() -> u32 {
    NETWORK_FORMAT_VERSION
}

fn default_available() -> bool {
    true
}

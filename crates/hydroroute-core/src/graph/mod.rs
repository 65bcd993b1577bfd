//! Pipe network graph and shortest-path operations
//!
//! Provides the building blocks for routing water between centers:
//! - `Graph` with switchable pipes and mutation observers
//! - decrease-key priority queues
//! - Dijkstra shortest paths and route reconstruction

pub mod algos;
pub mod network;
pub mod observer;
pub mod queue;
pub mod types;

pub use algos::{
    reconstruct_path, shortest_paths, shortest_paths_using, shortest_paths_with, Route,
    ShortestPaths, SolverStats,
};
pub use network::{Graph, SAMPLE_CENTERS, SAMPLE_PIPES};
pub use observer::{EventLog, GraphEvent, GraphObserver, TracingObserver};
pub use queue::{IndexedHeap, MinQueue, QueueEntry, QueueKind, ScanQueue};
pub use types::{Distance, Edge, EdgeId, EdgeInfo, VertexId, Weight};

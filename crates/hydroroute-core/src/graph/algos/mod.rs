//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest travel times over available pipes
//! - `path`: route reconstruction from predecessor links

pub mod dijkstra;
pub mod path;

pub use dijkstra::{
    shortest_paths, shortest_paths_using, shortest_paths_with, ShortestPaths, SolverStats,
};
pub use path::{reconstruct_path, Route};

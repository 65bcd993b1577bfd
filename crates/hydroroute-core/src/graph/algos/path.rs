//! Path reconstruction from predecessor links

use crate::ensure_vertex;
use crate::error::{HydroError, Result};
use crate::graph::types::VertexId;
use serde::Serialize;

/// An ordered route with its total travel time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub vertices: Vec<VertexId>,
    pub minutes: u64,
}

impl Route {
    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Number of pipes traversed
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Walk predecessor links from `destination` back to a vertex with no
/// predecessor and return the sequence in source-to-destination order.
///
/// An unreached destination yields `[destination]`, the same as the source
/// itself; check the distance before trusting the route.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    destination: VertexId,
) -> Result<Vec<VertexId>> {
    let vertex_count = predecessors.len();
    ensure_vertex!(destination, vertex_count);

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = predecessors[current] {
        ensure_vertex!(previous, vertex_count);
        if path.len() >= vertex_count {
            return Err(HydroError::invalid_argument(format!(
                "predecessor links from {} form a cycle",
                destination
            )));
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    Ok(path)
}

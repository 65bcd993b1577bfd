//! Directed pipe network with switchable pipes

use super::observer::{GraphEvent, GraphObserver};
use super::types::{Edge, EdgeId, EdgeInfo, VertexId, Weight};
use crate::ensure_vertex;
use crate::error::{HydroError, Result};
use std::collections::HashMap;
use std::fmt;

/// Number of centers in the built-in sample network
pub const SAMPLE_CENTERS: usize = 5;

/// Pipes of the built-in sample network as `(from, to, minutes)`
pub const SAMPLE_PIPES: [(VertexId, VertexId, Weight); 10] = [
    (0, 1, 10),
    (0, 3, 5),
    (1, 2, 1),
    (1, 3, 2),
    (2, 4, 4),
    (3, 1, 3),
    (3, 2, 9),
    (3, 4, 2),
    (4, 0, 7),
    (4, 2, 6),
];

/// Directed, weighted graph whose edges can be enabled or disabled
///
/// Each ordered pair `(u, v)` owns exactly one [`Edge`] record. Adjacency
/// lists hold edge ids into that record list, one slot per `add_edge` call,
/// so re-adding a pair overwrites its weight and availability while the
/// neighbor shows up once more in `neighbors(u)`.
///
/// The default graph has zero centers; every vertex id is out of range for it.
#[derive(Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    edge_index: HashMap<(VertexId, VertexId), EdgeId>,
    adjacency: Vec<Vec<EdgeId>>,
    observers: Vec<Box<dyn GraphObserver>>,
}

impl Graph {
    /// Create a graph with `vertex_count` centers and no pipes
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(HydroError::invalid_argument(
                "a network needs at least one center",
            ));
        }
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
            edge_index: HashMap::new(),
            adjacency: vec![Vec::new(); vertex_count],
            observers: Vec::new(),
        })
    }

    /// The five-center sample network, all pipes available
    pub fn sample() -> Self {
        let mut graph = Self {
            vertex_count: SAMPLE_CENTERS,
            adjacency: vec![Vec::new(); SAMPLE_CENTERS],
            ..Default::default()
        };
        for (from, to, weight) in SAMPLE_PIPES {
            graph.upsert_edge(from, to, weight, true);
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct `(from, to)` pipes
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count
    }

    /// Register an observer notified after every successful mutation
    pub fn subscribe(&mut self, observer: impl GraphObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Outgoing neighbor ids of `vertex` in insertion order, duplicates included
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.outgoing(vertex)?.map(|edge| edge.to).collect())
    }

    /// Outgoing pipe records of `vertex`, one per adjacency slot
    pub fn outgoing(&self, vertex: VertexId) -> Result<impl Iterator<Item = &Edge> + '_> {
        ensure_vertex!(vertex, self.vertex_count);
        Ok(self.adjacency[vertex].iter().map(|&id| &self.edges[id]))
    }

    /// Weight and availability of `(from, to)`, or [`EdgeInfo::ABSENT`] if never added
    pub fn edge_info(&self, from: VertexId, to: VertexId) -> EdgeInfo {
        self.edge_index
            .get(&(from, to))
            .map(|&id| self.edges[id].info())
            .unwrap_or(EdgeInfo::ABSENT)
    }

    /// Strict lookup of the pipe `(from, to)`
    pub fn edge(&self, from: VertexId, to: VertexId) -> Result<&Edge> {
        self.edge_index
            .get(&(from, to))
            .map(|&id| &self.edges[id])
            .ok_or_else(|| HydroError::edge_not_found(from, to))
    }

    /// All distinct pipes in first-insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Add an available pipe, or overwrite an existing one
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.add_edge_with_availability(from, to, weight, true)
    }

    /// Add a pipe with an explicit availability, or overwrite an existing one
    pub fn add_edge_with_availability(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Weight,
        available: bool,
    ) -> Result<()> {
        for vertex in [from, to] {
            if !self.contains_vertex(vertex) {
                tracing::warn!(from, to, weight, vertex, "rejected pipe with unknown center");
                return Err(HydroError::out_of_range(vertex, self.vertex_count));
            }
        }

        let replaced = self.upsert_edge(from, to, weight, available);
        self.emit(GraphEvent::EdgeAdded {
            from,
            to,
            weight,
            available,
            replaced,
        });
        Ok(())
    }

    /// Enable or disable an existing pipe
    pub fn set_availability(&mut self, from: VertexId, to: VertexId, available: bool) -> Result<()> {
        let Some(&id) = self.edge_index.get(&(from, to)) else {
            tracing::warn!(from, to, available, "availability change for unknown pipe");
            return Err(HydroError::edge_not_found(from, to));
        };

        self.edges[id].available = available;
        self.emit(GraphEvent::AvailabilityChanged {
            from,
            to,
            available,
        });
        Ok(())
    }

    /// Write the edge record and append an adjacency slot.
    /// Returns true if the pair already existed.
    fn upsert_edge(&mut self, from: VertexId, to: VertexId, weight: Weight, available: bool) -> bool {
        let (id, replaced) = match self.edge_index.get(&(from, to)) {
            Some(&id) => {
                let edge = &mut self.edges[id];
                edge.weight = weight;
                edge.available = available;
                (id, true)
            }
            None => {
                let id = self.edges.len();
                self.edges.push(Edge {
                    from,
                    to,
                    weight,
                    available,
                });
                self.edge_index.insert((from, to), id);
                (id, false)
            }
        };
        self.adjacency[from].push(id);
        replaced
    }

    fn emit(&mut self, event: GraphEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count)
            .field("edges", &self.edges)
            .field("adjacency", &self.adjacency)
            .field("observers", &self.observers.len())
            .finish()
    }
}

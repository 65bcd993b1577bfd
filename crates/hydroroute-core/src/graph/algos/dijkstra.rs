use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::algos::path::{reconstruct_path, Route};
use crate::graph::queue::{IndexedHeap, MinQueue, QueueEntry, QueueKind, ScanQueue};
use crate::graph::types::{Distance, VertexId};
use crate::graph::Graph;
use crate::{log_solver_stats, trace_time};
use serde::Serialize;
use std::time::Instant;

/// Counters collected during one solver run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolverStats {
    /// Vertices whose distance became final
    pub settled: usize,
    /// Queue entries popped for an already settled vertex
    pub stale_entries: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Adjacency slots skipped because the pipe is disabled
    pub unavailable_skipped: usize,
}

/// Distances and predecessors from one source center
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
    #[serde(skip)]
    stats: SolverStats,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distance(&self, vertex: VertexId) -> Result<Distance> {
        ensure_vertex!(vertex, self.distances.len());
        Ok(self.distances[vertex])
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distances
            .get(vertex)
            .is_some_and(|distance| distance.is_finite())
    }

    /// Route from the source to `destination`, or `None` if unreachable
    pub fn route_to(&self, destination: VertexId) -> Result<Option<Route>> {
        let distance = self.distance(destination)?;
        let Some(minutes) = distance.finite() else {
            return Ok(None);
        };
        let vertices = reconstruct_path(&self.predecessors, destination)?;
        Ok(Some(Route { vertices, minutes }))
    }

    pub fn into_parts(self) -> (Vec<Distance>, Vec<Option<VertexId>>) {
        (self.distances, self.predecessors)
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState<Q> {
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
    settled: Vec<bool>,
    queue: Q,
    stats: SolverStats,
}

impl<Q: MinQueue> DijkstraState<Q> {
    fn new(vertex_count: usize) -> Self {
        Self {
            distances: vec![Distance::INFINITE; vertex_count],
            predecessors: vec![None; vertex_count],
            settled: vec![false; vertex_count],
            queue: Q::with_vertex_count(vertex_count),
            stats: SolverStats::default(),
        }
    }

    /// Mark `vertex` settled. Returns false if it already was.
    fn settle(&mut self, vertex: VertexId) -> bool {
        if self.settled[vertex] {
            self.stats.stale_entries += 1;
            return false;
        }
        self.settled[vertex] = true;
        self.stats.settled += 1;
        true
    }

    fn relax(&mut self, from: VertexId, to: VertexId, weight: u64) {
        if self.settled[to] {
            return;
        }
        let candidate = self.distances[from] + weight;
        if candidate < self.distances[to] {
            self.distances[to] = candidate;
            self.predecessors[to] = Some(from);
            self.queue.insert_or_decrease(to, candidate);
            self.stats.relaxations += 1;
        }
    }
}

/// Shortest travel times from `source` using the default indexed heap
pub fn shortest_paths(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    shortest_paths_using(graph, source, QueueKind::default())
}

/// Shortest travel times from `source` using the chosen queue implementation
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()))]
pub fn shortest_paths_using(
    graph: &Graph,
    source: VertexId,
    queue: QueueKind,
) -> Result<ShortestPaths> {
    match queue {
        QueueKind::Indexed => shortest_paths_with::<IndexedHeap>(graph, source),
        QueueKind::Scan => shortest_paths_with::<ScanQueue>(graph, source),
    }
}

/// Dijkstra over available pipes, generic over the queue
///
/// A zero-center graph yields empty vectors for any source.
pub fn shortest_paths_with<Q: MinQueue>(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    let start = Instant::now();
    let vertex_count = graph.vertex_count();

    if vertex_count == 0 {
        return Ok(ShortestPaths {
            source,
            distances: Vec::new(),
            predecessors: Vec::new(),
            stats: SolverStats::default(),
        });
    }
    ensure_vertex!(source, vertex_count);

    let mut state: DijkstraState<Q> = DijkstraState::new(vertex_count);
    state.distances[source] = Distance::ZERO;
    state.queue.insert(source, Distance::ZERO);

    while !state.queue.is_empty() {
        let QueueEntry {
            vertex: current, ..
        } = state.queue.extract_min()?;

        if !state.settle(current) {
            continue;
        }

        for edge in graph.outgoing(current)? {
            if !edge.available {
                state.stats.unavailable_skipped += 1;
                continue;
            }
            state.relax(current, edge.to, edge.weight);
        }
    }

    log_solver_stats!(state.stats, "shortest_paths");
    trace_time!(start, "shortest_paths", source = source);

    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
        stats: state.stats,
    })
}

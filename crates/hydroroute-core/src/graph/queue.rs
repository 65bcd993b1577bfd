//! Decrease-key min-priority queues over `(priority, vertex)` pairs
//!
//! Two implementations share the [`MinQueue`] trait:
//! - [`IndexedHeap`]: binary heap with a vertex -> position index, O(log n) decrease-key
//! - [`ScanQueue`]: ordered multiset with a linear scan for decrease-key
//!
//! Both extract the smallest pair by `(priority, vertex)` ordering, so equal
//! priorities come out by ascending vertex id.

mod indexed;
mod scan;

pub use indexed::IndexedHeap;
pub use scan::ScanQueue;

use super::types::{Distance, VertexId};
use crate::error::{HydroError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A queued vertex with its tentative distance
///
/// Field order matters: the derived ordering compares priority first, then vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueueEntry {
    pub priority: Distance,
    pub vertex: VertexId,
}

impl QueueEntry {
    pub fn new(vertex: VertexId, priority: Distance) -> Self {
        Self { priority, vertex }
    }
}

/// Min-priority queue with decrease-key
pub trait MinQueue {
    /// Create an empty queue sized for vertex ids in `0..vertex_count`
    fn with_vertex_count(vertex_count: usize) -> Self
    where
        Self: Sized;

    /// Add a `(priority, vertex)` pair
    ///
    /// Implementations may hold one entry per vertex instead of a multiset.
    /// Either way, a vertex inserted twice is first extracted at the smaller
    /// of its priorities.
    fn insert(&mut self, vertex: VertexId, priority: Distance);

    /// Remove and return the smallest pair
    fn extract_min(&mut self) -> Result<QueueEntry>;

    /// Drop the queued entry for `vertex` if any, then queue it at `priority`
    fn insert_or_decrease(&mut self, vertex: VertexId, priority: Distance);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Queue implementation used by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueKind {
    /// Index-augmented binary heap (default)
    #[default]
    Indexed,
    /// Ordered multiset with linear-scan decrease-key
    Scan,
}

impl FromStr for QueueKind {
    type Err = HydroError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "indexed" => Ok(QueueKind::Indexed),
            "scan" => Ok(QueueKind::Scan),
            other => Err(HydroError::unsupported("queue", other, "indexed, scan")),
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueKind::Indexed => write!(f, "indexed"),
            QueueKind::Scan => write!(f, "scan"),
        }
    }
}

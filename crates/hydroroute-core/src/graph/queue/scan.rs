use super::{MinQueue, QueueEntry};
use crate::error::{HydroError, Result};
use crate::graph::types::{Distance, VertexId};
use std::collections::BTreeMap;

/// Ordered multiset of `(priority, vertex)` pairs
///
/// `insert` never deduplicates. `insert_or_decrease` walks entries in order
/// and drops the first one for the vertex, which is O(n); fine for networks
/// of a few hundred centers.
#[derive(Debug, Default)]
pub struct ScanQueue {
    entries: BTreeMap<QueueEntry, usize>,
    len: usize,
}

impl ScanQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued entries for `vertex`
    #[cfg(test)]
    pub(crate) fn count_of(&self, vertex: VertexId) -> usize {
        self.entries
            .iter()
            .filter(|(entry, _)| entry.vertex == vertex)
            .map(|(_, &count)| count)
            .sum()
    }

    fn remove_one(&mut self, entry: QueueEntry) {
        if let Some(count) = self.entries.get_mut(&entry) {
            *count -= 1;
            if *count == 0 {
                self.entries.remove(&entry);
            }
            self.len -= 1;
        }
    }
}

impl MinQueue for ScanQueue {
    fn with_vertex_count(_vertex_count: usize) -> Self {
        Self::new()
    }

    fn insert(&mut self, vertex: VertexId, priority: Distance) {
        *self
            .entries
            .entry(QueueEntry::new(vertex, priority))
            .or_insert(0) += 1;
        self.len += 1;
    }

    fn extract_min(&mut self) -> Result<QueueEntry> {
        let Some((&min, _)) = self.entries.first_key_value() else {
            return Err(HydroError::EmptyQueue);
        };
        self.remove_one(min);
        Ok(min)
    }

    fn insert_or_decrease(&mut self, vertex: VertexId, priority: Distance) {
        let existing = self
            .entries
            .keys()
            .find(|entry| entry.vertex == vertex)
            .copied();
        if let Some(entry) = existing {
            self.remove_one(entry);
        }
        self.insert(vertex, priority);
    }

    fn len(&self) -> usize {
        self.len
    }
}

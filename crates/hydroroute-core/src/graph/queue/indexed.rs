use super::{MinQueue, QueueEntry};
use crate::error::{HydroError, Result};
use crate::graph::types::{Distance, VertexId};

/// Binary min-heap with a vertex -> heap position index
///
/// Holds at most one entry per vertex. `insert` on a vertex that is already
/// queued keeps the smaller of the two priorities, so the first extraction
/// of that vertex matches a multiset holding both pairs.
#[derive(Debug, Default)]
pub struct IndexedHeap {
    heap: Vec<QueueEntry>,
    positions: Vec<Option<usize>>,
}

impl IndexedHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current priority of `vertex`, if queued
    #[cfg(test)]
    pub(crate) fn priority_of(&self, vertex: VertexId) -> Option<Distance> {
        self.position(vertex).map(|pos| self.heap[pos].priority)
    }

    fn position(&self, vertex: VertexId) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    fn set_position(&mut self, vertex: VertexId, pos: Option<usize>) {
        if vertex >= self.positions.len() {
            self.positions.resize(vertex + 1, None);
        }
        self.positions[vertex] = pos;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        let (va, vb) = (self.heap[a].vertex, self.heap[b].vertex);
        self.set_position(va, Some(a));
        self.set_position(vb, Some(b));
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos] >= self.heap[parent] {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl MinQueue for IndexedHeap {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            heap: Vec::with_capacity(vertex_count),
            positions: vec![None; vertex_count],
        }
    }

    fn insert(&mut self, vertex: VertexId, priority: Distance) {
        if let Some(pos) = self.position(vertex) {
            if self.heap[pos].priority <= priority {
                return;
            }
        }
        self.insert_or_decrease(vertex, priority);
    }

    fn extract_min(&mut self) -> Result<QueueEntry> {
        if self.heap.is_empty() {
            return Err(HydroError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(min) = self.heap.pop() else {
            return Err(HydroError::EmptyQueue);
        };
        self.set_position(min.vertex, None);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn insert_or_decrease(&mut self, vertex: VertexId, priority: Distance) {
        match self.position(vertex) {
            Some(pos) => {
                let old = self.heap[pos].priority;
                self.heap[pos].priority = priority;
                if priority < old {
                    self.sift_up(pos);
                } else {
                    self.sift_down(pos);
                }
            }
            None => {
                let pos = self.heap.len();
                self.heap.push(QueueEntry::new(vertex, priority));
                self.set_position(vertex, Some(pos));
                self.sift_up(pos);
            }
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

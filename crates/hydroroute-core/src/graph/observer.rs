//! Mutation notifications for graphs
//!
//! A [`Graph`](super::Graph) notifies every subscribed observer after each
//! successful mutation. Observers never influence solver results.

use super::types::{VertexId, Weight};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// A completed mutation of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GraphEvent {
    /// A pipe was added, or an existing pipe was overwritten
    EdgeAdded {
        from: VertexId,
        to: VertexId,
        weight: Weight,
        available: bool,
        replaced: bool,
    },
    /// The availability flag of an existing pipe was set
    AvailabilityChanged {
        from: VertexId,
        to: VertexId,
        available: bool,
    },
}

/// Trait for receiving graph mutation events
pub trait GraphObserver {
    fn notify(&mut self, event: &GraphEvent);
}

/// Observer that reports each mutation through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl GraphObserver for TracingObserver {
    fn notify(&mut self, event: &GraphEvent) {
        match event {
            GraphEvent::EdgeAdded {
                from,
                to,
                weight,
                available,
                replaced,
            } => tracing::info!(from, to, weight, available, replaced, "pipe_added"),
            GraphEvent::AvailabilityChanged {
                from,
                to,
                available,
            } => tracing::info!(from, to, available, "pipe_availability_changed"),
        }
    }
}

/// Observer that records events in memory
///
/// Clones share the same log, so one handle can be subscribed while another
/// is kept for reading.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GraphEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GraphEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GraphObserver for EventLog {
    fn notify(&mut self, event: &GraphEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

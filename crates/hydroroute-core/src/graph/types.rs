use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Identifier of a water center, in `0..vertex_count`
pub type VertexId = usize;

/// Travel time through a single pipe, in minutes
pub type Weight = u64;

/// Index of an edge record inside a [`Graph`](super::Graph)
pub type EdgeId = usize;

/// Accumulated travel time from a source center
///
/// `Distance::INFINITE` marks unreachable centers. Addition saturates at the
/// sentinel so a finite weight added to an unreachable distance never wraps
/// into a small value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITE: Distance = Distance(u64::MAX);

    pub fn new(minutes: u64) -> Self {
        Distance(minutes)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        *self != Self::INFINITE
    }

    /// Finite value, or `None` for unreachable
    pub fn finite(&self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Add a pipe weight, saturating at [`Distance::INFINITE`]
    pub fn extend(self, weight: Weight) -> Self {
        if !self.is_finite() {
            return self;
        }
        Distance(self.0.saturating_add(weight))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl std::ops::Add<Weight> for Distance {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        self.extend(weight)
    }
}

impl From<u64> for Distance {
    fn from(minutes: u64) -> Self {
        Distance(minutes)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finite() {
            Some(minutes) => write!(f, "{}", minutes),
            None => write!(f, "unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}

/// A directed pipe between two centers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
    pub available: bool,
}

impl Edge {
    pub fn info(&self) -> EdgeInfo {
        EdgeInfo {
            weight: self.weight,
            available: self.available,
        }
    }
}

/// Weight and availability of a pipe as seen by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeInfo {
    pub weight: Weight,
    pub available: bool,
}

impl EdgeInfo {
    /// State reported for a pair that was never added
    pub const ABSENT: EdgeInfo = EdgeInfo {
        weight: 0,
        available: false,
    };
}

//! Hydroroute Core Library
//!
//! Shortest travel times between water-distribution centers connected by
//! pipes that can be switched on and off between queries.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

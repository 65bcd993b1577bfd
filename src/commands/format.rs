//! Shared output formatting helpers for commands

use hydroroute_core::error::Result;
use hydroroute_core::graph::{Distance, Edge};
use serde::Serialize;
use serde_json::json;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `enabled` or `disabled`
pub fn status_label(available: bool) -> &'static str {
    if available {
        "enabled"
    } else {
        "disabled"
    }
}

/// `12 min` or `unreachable`
pub fn minutes_label(distance: Distance) -> String {
    match distance.finite() {
        Some(minutes) => format!("{} min", minutes),
        None => distance.to_string(),
    }
}

/// JSON object for one pipe
pub fn pipe_json(edge: &Edge) -> serde_json::Value {
    json!({
        "from": edge.from,
        "to": edge.to,
        "minutes": edge.weight,
        "available": edge.available,
    })
}

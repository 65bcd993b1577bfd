//! Value parsers for CLI arguments

use std::str::FromStr;

use hydroroute_core::error::Result;
use hydroroute_core::format::OutputFormat;
use hydroroute_core::graph::{QueueKind, VertexId, Weight};
use hydroroute_core::{bail_invalid, bail_usage};

/// A pipe to add, written `FROM:TO:MINUTES`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeSpec {
    pub from: VertexId,
    pub to: VertexId,
    pub minutes: Weight,
}

/// An existing pipe, written `FROM:TO`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeRef {
    pub from: VertexId,
    pub to: VertexId,
}

fn number<T: FromStr>(context: &str, raw: &str) -> Result<T> {
    match raw.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) => bail_invalid!(context, raw),
    }
}

fn fields<'a>(raw: &'a str, shape: &str, expected: usize) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != expected {
        bail_usage!(format!("expected {}, got '{}'", shape, raw));
    }
    Ok(parts)
}

pub fn pipe_spec(raw: &str) -> Result<PipeSpec> {
    let parts = fields(raw, "FROM:TO:MINUTES", 3)?;
    Ok(PipeSpec {
        from: number("center", parts[0])?,
        to: number("center", parts[1])?,
        minutes: number("minutes", parts[2])?,
    })
}

pub fn pipe_ref(raw: &str) -> Result<PipeRef> {
    let parts = fields(raw, "FROM:TO", 2)?;
    Ok(PipeRef {
        from: number("center", parts[0])?,
        to: number("center", parts[1])?,
    })
}

/// Parse `FROM:TO:MINUTES` for clap
pub fn parse_pipe_spec(s: &str) -> std::result::Result<PipeSpec, String> {
    pipe_spec(s).map_err(|e| e.to_string())
}

/// Parse `FROM:TO` for clap
pub fn parse_pipe_ref(s: &str) -> std::result::Result<PipeRef, String> {
    pipe_ref(s).map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse queue kind from string
pub fn parse_queue_kind(s: &str) -> std::result::Result<QueueKind, String> {
    s.parse::<QueueKind>().map_err(|e| e.to_string())
}

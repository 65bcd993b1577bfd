//! `hydroroute survey` command - run the solver from every center
//!
//! The optimal source has the fewest unreachable centers, then the smallest
//! total travel time to the centers it reaches, then the lowest id.

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::format::{minutes_label, print_json};
use crate::commands::network::Network;
use crate::output_by_format_result;
use hydroroute_core::error::Result;
use hydroroute_core::graph::{shortest_paths_using, Distance, Graph, QueueKind, VertexId};

/// Solver results summarized for one source center
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub source: VertexId,
    pub times: Vec<Distance>,
    /// Sum over reachable centers
    pub total_minutes: u64,
    pub unreachable: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Survey {
    pub sources: Vec<SourceSummary>,
    pub optimal: Option<VertexId>,
}

impl Survey {
    pub fn optimal_summary(&self) -> Option<&SourceSummary> {
        self.optimal.and_then(|source| self.sources.get(source))
    }
}

/// Run single-source shortest paths once per center
pub fn survey(graph: &Graph, queue: QueueKind) -> Result<Survey> {
    let mut sources = Vec::with_capacity(graph.vertex_count());

    for source in 0..graph.vertex_count() {
        let paths = shortest_paths_using(graph, source, queue)?;
        let mut total_minutes: u64 = 0;
        let mut unreachable = 0;
        for distance in paths.distances() {
            match distance.finite() {
                Some(minutes) => total_minutes = total_minutes.saturating_add(minutes),
                None => unreachable += 1,
            }
        }
        sources.push(SourceSummary {
            source,
            times: paths.distances().to_vec(),
            total_minutes,
            unreachable,
        });
    }

    let optimal = sources
        .iter()
        .min_by_key(|s| (s.unreachable, s.total_minutes, s.source))
        .map(|s| s.source);

    tracing::debug!(centers = sources.len(), ?optimal, "survey_complete");
    Ok(Survey { sources, optimal })
}

/// Execute the survey command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let survey = survey(&network.graph, network.queue)?;

    output_by_format_result!(cli.format,
        json => print_json(&survey),
        human => {
            if !cli.quiet {
                println!(
                    "Survey of {} centers ({}):",
                    survey.sources.len(),
                    network.origin
                );
            }
            for summary in &survey.sources {
                let times: Vec<String> = summary
                    .times
                    .iter()
                    .map(|distance| minutes_label(*distance))
                    .collect();
                println!(
                    "  center {}: total {} min, {} unreachable  [{}]",
                    summary.source,
                    summary.total_minutes,
                    summary.unreachable,
                    times.join(", ")
                );
            }
            if let Some(best) = survey.optimal_summary() {
                println!(
                    "Optimal source: center {} ({} min total, {} unreachable)",
                    best.source, best.total_minutes, best.unreachable
                );
            }
        }
    )
}

//! Engine entry point
//!
//! Validate, enhance, snapshot, fan out the six generators over the shared
//! read-only view, then aggregate.

use crate::aggregate;
use crate::algo::{self, ThreatView, WeightScheme};
use crate::config::EngineConfig;
use crate::enhance;
use crate::graph::{validate_graph, GraphError, RawEdge, RawNode, ThreatGraph};
use crate::scenario::{self, ThreatPathScenario};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced to the caller of `generate_threat_paths`
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid input graph: {0}")]
    InvalidGraph(#[from] GraphError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Dataset shape produced by the external graph-loading collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

impl Dataset {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

type GeneratorFn = fn(&ThreatGraph, &ThreatView, &EngineConfig) -> Vec<ThreatPathScenario>;

/// Fixed generator order; aggregation ties preserve it
static GENERATORS: &[(&str, GeneratorFn)] = &[
    ("direct", scenario::direct::generate),
    ("multi_hop", scenario::multi_hop::generate),
    ("privilege_escalation", scenario::escalation::generate),
    ("lateral_movement", scenario::lateral::generate),
    ("multi_vector", scenario::multi_vector::generate),
    ("time_based", scenario::time_based::generate),
];

/// Discover adversary paths in the given asset graph and return the ranked
/// scenario list.
///
/// Malformed input (an edge referencing an unknown uid, duplicate uids)
/// fails fast before any algorithm runs. A generator finding no path for a
/// candidate pair silently skips it; an entirely unreachable target set just
/// contributes nothing.
pub fn generate_threat_paths(
    nodes: &[RawNode],
    edges: &[RawEdge],
    config: &EngineConfig,
) -> EngineResult<Vec<ThreatPathScenario>> {
    let config = config.clone().normalized();
    validate_graph(nodes, edges)?;

    let (threat_nodes, threat_edges) = enhance::enhance(nodes, edges, &config);
    let graph = ThreatGraph::new(threat_nodes, threat_edges);
    let view = algo::build_view(&graph, WeightScheme::Standard);

    // Every generator only reads the shared snapshot, so the fan-out is a
    // plain parallel map with a synchronous join
    let batches: Vec<Vec<ThreatPathScenario>> = GENERATORS
        .par_iter()
        .map(|(name, generate)| {
            let scenarios = generate(&graph, &view, &config);
            debug!(generator = *name, count = scenarios.len(), "generator finished");
            scenarios
        })
        .collect();

    let candidates: usize = batches.iter().map(Vec::len).sum();
    let result = aggregate::aggregate(batches.into_iter().flatten().collect(), &config);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        candidates,
        returned = result.len(),
        "threat path generation complete"
    );
    Ok(result)
}

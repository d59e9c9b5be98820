//! Immutable graph snapshot used by the scenario generators
//!
//! The engine validates raw input once, enriches it, then freezes the result
//! into a `ThreatGraph`. Generators and the scorer only read from this
//! snapshot, which is what makes the parallel fan-out safe.

use super::edge::{RawEdge, ThreatEdge};
use super::node::{RawNode, ThreatNode};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Errors raised by input validation before any algorithm runs
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node uid {0:?}")]
    DuplicateNode(String),

    #[error("edge references unknown source node {0:?}")]
    EdgeSourceMissing(String),

    #[error("edge references unknown target node {0:?}")]
    EdgeTargetMissing(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Fail fast on malformed input: duplicate uids, or edges referencing a uid
/// not present in the node set.
pub fn validate_graph(nodes: &[RawNode], edges: &[RawEdge]) -> GraphResult<()> {
    let mut uids: FxHashSet<&str> = FxHashSet::default();
    for node in nodes {
        if !uids.insert(node.uid.as_str()) {
            return Err(GraphError::DuplicateNode(node.uid.clone()));
        }
    }
    for edge in edges {
        if !uids.contains(edge.from.as_str()) {
            return Err(GraphError::EdgeSourceMissing(edge.from.clone()));
        }
        if !uids.contains(edge.to.as_str()) {
            return Err(GraphError::EdgeTargetMissing(edge.to.clone()));
        }
    }
    Ok(())
}

/// Read-only snapshot of the enriched graph
///
/// Nodes keep insertion order (IndexMap) so candidate slices and therefore
/// generator output are deterministic for a given input.
#[derive(Debug)]
pub struct ThreatGraph {
    nodes: IndexMap<String, ThreatNode>,
    edges: Vec<ThreatEdge>,
    /// (from, to) -> index of the first matching edge
    edge_lookup: FxHashMap<(String, String), usize>,
}

impl ThreatGraph {
    pub fn new(nodes: Vec<ThreatNode>, edges: Vec<ThreatEdge>) -> Self {
        let nodes: IndexMap<String, ThreatNode> =
            nodes.into_iter().map(|n| (n.uid.clone(), n)).collect();

        let mut edge_lookup = FxHashMap::default();
        for (idx, edge) in edges.iter().enumerate() {
            edge_lookup
                .entry((edge.from.clone(), edge.to.clone()))
                .or_insert(idx);
        }

        ThreatGraph { nodes, edges, edge_lookup }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, uid: &str) -> Option<&ThreatNode> {
        self.nodes.get(uid)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ThreatNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[ThreatEdge] {
        &self.edges
    }

    /// First edge from `from` to `to`, if any
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&ThreatEdge> {
        self.edge_lookup
            .get(&(from.to_string(), to.to_string()))
            .map(|&idx| &self.edges[idx])
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_lookup
            .contains_key(&(from.to_string(), to.to_string()))
    }
}

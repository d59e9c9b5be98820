//! Algorithm integration layer
//!
//! Path algorithms live in the `breachpath-algorithms` crate and work on a
//! dense, index-based view. This module builds that view from the threat
//! graph snapshot, applies the difficulty-derived edge weights, and maps
//! index paths back to node uids.

use crate::graph::ThreatGraph;
use breachpath_algorithms::{dijkstra, enumerate_paths, GraphView};
use rustc_hash::FxHashMap;

// Re-export algorithms
pub use breachpath_algorithms::PathResult;

/// Weight assigned to privilege-escalation edges by the escalation-aware
/// scheme. Below the Low difficulty weight, so escalation hops are preferred.
pub const ESCALATION_EDGE_WEIGHT: f64 = 0.5;

/// Edge weighting applied when building a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightScheme {
    /// Difficulty-derived weights: Low 1, Medium 2, High 3
    Standard,
    /// Standard, except privilege-escalation edges cost `ESCALATION_EDGE_WEIGHT`
    EscalationAware,
}

/// Dense topology view plus the uid mapping for one snapshot
pub struct ThreatView {
    view: GraphView,
    uids: Vec<String>,
    index_of: FxHashMap<String, usize>,
}

/// Build a weighted view from the snapshot for algorithm execution.
///
/// Node indices follow snapshot insertion order, so results are
/// deterministic for a given input.
pub fn build_view(graph: &ThreatGraph, scheme: WeightScheme) -> ThreatView {
    let uids: Vec<String> = graph.nodes().map(|n| n.uid.clone()).collect();
    let mut index_of = FxHashMap::default();
    for (idx, uid) in uids.iter().enumerate() {
        index_of.insert(uid.clone(), idx);
    }

    let node_count = uids.len();
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Vec<Vec<f64>> = vec![Vec::new(); node_count];

    for edge in graph.edges() {
        let (Some(&from_idx), Some(&to_idx)) =
            (index_of.get(&edge.from), index_of.get(&edge.to))
        else {
            continue;
        };

        let weight = match scheme {
            WeightScheme::EscalationAware if edge.is_privilege_escalation() => {
                ESCALATION_EDGE_WEIGHT
            }
            _ => edge.weight(),
        };

        outgoing[from_idx].push(to_idx);
        weights[from_idx].push(weight);
    }

    let view = GraphView::from_adjacency_list(node_count, outgoing, Some(weights));
    ThreatView { view, uids, index_of }
}

impl ThreatView {
    pub fn node_count(&self) -> usize {
        self.view.node_count
    }

    /// Least-cost path between two uids, or `None` when the target is
    /// unreachable (a normal outcome, not an error).
    pub fn shortest_path(&self, start: &str, target: &str) -> Option<Vec<String>> {
        let &start_idx = self.index_of.get(start)?;
        let &target_idx = self.index_of.get(target)?;
        let result = dijkstra(&self.view, start_idx, target_idx)?;
        Some(self.to_uids(&result.path))
    }

    /// Bounded breadth-first enumeration of paths from a uid.
    pub fn enumerate(&self, start: &str, max_hops: usize) -> Vec<Vec<String>> {
        let Some(&start_idx) = self.index_of.get(start) else {
            return Vec::new();
        };
        enumerate_paths(&self.view, start_idx, max_hops)
            .iter()
            .map(|path| self.to_uids(path))
            .collect()
    }

    fn to_uids(&self, path: &[usize]) -> Vec<String> {
        path.iter().map(|&idx| self.uids[idx].clone()).collect()
    }
}

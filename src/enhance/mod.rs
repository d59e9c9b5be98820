//! Graph enhancement
//!
//! Enriches raw nodes/edges with derived security attributes, optionally
//! injects synthetic infrastructure, and optionally marks a random sample of
//! nodes as suspected compromised. Returns new collections; caller-owned
//! input is never mutated.

pub mod attributes;
pub mod synthesis;

use crate::config::EngineConfig;
use crate::graph::types::NodeCategory;
use crate::graph::{RawEdge, RawNode, ThreatEdge, ThreatNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub use attributes::{enhance_edge, enhance_node, profile_for, TypeProfile};

/// Per-node probability used by the compromise simulation
pub const COMPROMISE_PROBABILITY: f64 = 0.15;

/// Enrich a raw graph into threat nodes/edges.
///
/// Synthesis and compromise simulation run only when enabled in `config`.
pub fn enhance(
    nodes: &[RawNode],
    edges: &[RawEdge],
    config: &EngineConfig,
) -> (Vec<ThreatNode>, Vec<ThreatEdge>) {
    let mut threat_nodes: Vec<ThreatNode> = nodes.iter().map(enhance_node).collect();
    let mut threat_edges: Vec<ThreatEdge> = edges.iter().map(enhance_edge).collect();

    if config.synthesize_infrastructure {
        synthesis::synthesize(&mut threat_nodes, &mut threat_edges);
    }

    if config.simulate_compromise {
        simulate_compromise(
            &mut threat_nodes,
            config.compromise_seed,
            COMPROMISE_PROBABILITY,
        );
    }

    debug!(
        nodes = threat_nodes.len(),
        edges = threat_edges.len(),
        "graph enhanced"
    );
    (threat_nodes, threat_edges)
}

/// Mark nodes as suspected compromised with the given per-node probability.
///
/// Cosmetic only: the marking feeds dashboards, not scoring. The RNG is
/// seeded so the same seed always marks the same nodes.
pub fn simulate_compromise(nodes: &mut [ThreatNode], seed: u64, probability: f64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for node in nodes.iter_mut() {
        // Threat actors and CVE intel nodes are not assets
        if node.category == NodeCategory::Threat {
            continue;
        }
        if rng.gen::<f64>() < probability {
            node.suspected_compromised = true;
            node.compromise_indicators
                .push("Anomalous outbound traffic".to_string());
            node.compromise_indicators
                .push("Off-hours authentication".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workstations(count: usize) -> Vec<ThreatNode> {
        (0..count)
            .map(|i| enhance_node(&RawNode::new(format!("ws-{i}"), "Workstation", "")))
            .collect()
    }

    #[test]
    fn test_enhance_does_not_mutate_input() {
        let raw_nodes = vec![RawNode::new("a", "Server", "A")];
        let raw_edges = vec![RawEdge::new("a", "a", "Network")];
        let config = EngineConfig::default();
        let (nodes, edges) = enhance(&raw_nodes, &raw_edges, &config);
        assert_eq!(nodes.len(), 1);
        assert_eq!(edges.len(), 1);
        assert_eq!(raw_nodes[0].properties.len(), 0);
    }

    #[test]
    fn test_synthesis_disabled_by_default() {
        let config = EngineConfig::default();
        let (nodes, _) = enhance(&[RawNode::new("a", "Server", "A")], &[], &config);
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_same_seed_marks_same_nodes() {
        let mut first = workstations(50);
        let mut second = workstations(50);
        simulate_compromise(&mut first, 7, COMPROMISE_PROBABILITY);
        simulate_compromise(&mut second, 7, COMPROMISE_PROBABILITY);
        let marked = |nodes: &[ThreatNode]| -> Vec<String> {
            nodes
                .iter()
                .filter(|n| n.suspected_compromised)
                .map(|n| n.uid.clone())
                .collect()
        };
        assert_eq!(marked(&first), marked(&second));
    }

    #[test]
    fn test_probability_bounds() {
        let mut none = workstations(20);
        simulate_compromise(&mut none, 1, 0.0);
        assert!(none.iter().all(|n| !n.suspected_compromised));

        let mut all = workstations(20);
        simulate_compromise(&mut all, 1, 1.0);
        assert!(all.iter().all(|n| n.suspected_compromised));
        assert!(all.iter().all(|n| !n.compromise_indicators.is_empty()));
    }

    #[test]
    fn test_threat_nodes_never_marked() {
        let mut nodes = vec![enhance_node(&RawNode::new("apt", "Threat Actor", "APT"))];
        simulate_compromise(&mut nodes, 1, 1.0);
        assert!(!nodes[0].suspected_compromised);
    }
}

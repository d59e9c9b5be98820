//! Privilege-escalation attack generation: user-level footholds to
//! administrative assets, searched over an escalation-weighted view

use super::assemble::{apply_risk_adjustment, assemble};
use super::{AttackType, ThreatPathScenario};
use crate::algo::{build_view, ThreatView, WeightScheme};
use crate::config::EngineConfig;
use crate::graph::{ThreatGraph, ThreatNode};
use tracing::debug;

const MAX_ENTRY_POINTS: usize = 5;
const MAX_TARGETS: usize = 5;
const ESCALATION_RISK_BONUS: f64 = 2.0;

/// Escalation targets: administrative privilege, or infrastructure where
/// administrative access is implied.
fn is_escalation_target(node: &ThreatNode) -> bool {
    node.is_privileged() || node.is_domain_controller() || node.type_is("Server")
}

pub fn generate(
    graph: &ThreatGraph,
    _view: &ThreatView,
    _config: &EngineConfig,
) -> Vec<ThreatPathScenario> {
    let entries: Vec<&str> = graph
        .nodes()
        .filter(|n| n.is_user_level())
        .map(|n| n.uid.as_str())
        .take(MAX_ENTRY_POINTS)
        .collect();
    let targets: Vec<&str> = graph
        .nodes()
        .filter(|n| is_escalation_target(n))
        .map(|n| n.uid.as_str())
        .take(MAX_TARGETS)
        .collect();

    // Escalation edges are cheap under this scheme, so found paths favor
    // privilege-escalation moves over plain network hops
    let escalation_view = build_view(graph, WeightScheme::EscalationAware);

    let mut scenarios = Vec::new();
    for entry in &entries {
        for target in &targets {
            if entry == target {
                continue;
            }
            let Some(path) = escalation_view.shortest_path(entry, target) else {
                continue;
            };
            let seq = scenarios.len() + 1;
            let mut scenario = assemble(graph, &path, AttackType::PrivilegeEscalation, seq);
            apply_risk_adjustment(&mut scenario, ESCALATION_RISK_BONUS);
            scenarios.push(scenario);
        }
    }
    debug!(scenarios = scenarios.len(), "escalation generation complete");
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{build_view, WeightScheme};
    use crate::enhance::attributes::{enhance_edge, enhance_node};
    use crate::graph::{RawEdge, RawNode};
    use crate::scenario::Severity;

    fn graph() -> ThreatGraph {
        let nodes = vec![
            enhance_node(&RawNode::new("alice", "User Account", "Alice")),
            enhance_node(&RawNode::new("admin", "Admin Account", "Admin")),
            enhance_node(&RawNode::new("dc", "Domain Controller", "DC")),
        ];
        let edges = vec![
            enhance_edge(&RawEdge::new("alice", "admin", "Privilege Escalation")),
            enhance_edge(&RawEdge::new("admin", "dc", "Admin Access")),
        ];
        ThreatGraph::new(nodes, edges)
    }

    #[test]
    fn test_user_to_admin_paths_found() {
        let graph = graph();
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());
        assert!(scenarios
            .iter()
            .any(|s| s.entry_point == "alice" && s.target_asset == "admin"));
        assert!(scenarios
            .iter()
            .any(|s| s.entry_point == "alice" && s.target_asset == "dc"));
    }

    #[test]
    fn test_risk_bonus_and_severity_recomputed() {
        let graph = graph();
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());
        for scenario in &scenarios {
            assert!((0.0..=10.0).contains(&scenario.risk_score));
            assert_eq!(
                scenario.severity,
                Severity::from_risk_score(scenario.risk_score)
            );
            assert!(scenario
                .mitre_tactics
                .contains(&"Privilege Escalation".to_string()));
        }
    }

    #[test]
    fn test_no_user_level_nodes_means_no_scenarios() {
        let nodes = vec![
            enhance_node(&RawNode::new("dc1", "Domain Controller", "DC1")),
            enhance_node(&RawNode::new("dc2", "Domain Controller", "DC2")),
        ];
        let edges = vec![enhance_edge(&RawEdge::new("dc1", "dc2", "Trust"))];
        let graph = ThreatGraph::new(nodes, edges);
        let view = build_view(&graph, WeightScheme::Standard);
        assert!(generate(&graph, &view, &EngineConfig::default()).is_empty());
    }
}

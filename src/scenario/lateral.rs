//! Lateral-movement attack generation: traversal within and across
//! network segments

use super::assemble::{apply_risk_adjustment, assemble};
use super::{AttackType, ThreatPathScenario};
use crate::algo::ThreatView;
use crate::config::EngineConfig;
use crate::graph::ThreatGraph;
use tracing::debug;

const MAX_SEGMENTS: usize = 3;
const MAX_MEMBERS_PER_SEGMENT: usize = 3;
const CROSS_SEGMENT_RISK_BONUS: f64 = 1.5;

/// Nodes grouped by network segment, in snapshot order
fn segment_groups(graph: &ThreatGraph) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for node in graph.nodes() {
        match groups
            .iter_mut()
            .find(|(segment, _)| *segment == node.network_segment)
        {
            Some((_, members)) => members.push(node.uid.clone()),
            None => groups.push((node.network_segment.clone(), vec![node.uid.clone()])),
        }
    }
    groups
}

pub fn generate(
    graph: &ThreatGraph,
    view: &ThreatView,
    _config: &EngineConfig,
) -> Vec<ThreatPathScenario> {
    let mut groups = segment_groups(graph);
    groups.truncate(MAX_SEGMENTS);
    for (_, members) in groups.iter_mut() {
        members.truncate(MAX_MEMBERS_PER_SEGMENT);
    }

    let mut scenarios = Vec::new();

    // Intra-segment movement between peers
    for (_, members) in &groups {
        for entry in members {
            for target in members {
                if entry == target {
                    continue;
                }
                let Some(path) = view.shortest_path(entry, target) else {
                    continue;
                };
                let seq = scenarios.len() + 1;
                scenarios.push(assemble(graph, &path, AttackType::LateralMovement, seq));
            }
        }
    }

    // Cross-segment movement between segment representatives carries the
    // segment-boundary risk bonus
    for (i, (_, members)) in groups.iter().enumerate() {
        let Some(entry) = members.first() else { continue };
        for (j, (_, other_members)) in groups.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(target) = other_members.first() else { continue };
            let Some(path) = view.shortest_path(entry, target) else {
                continue;
            };
            let seq = scenarios.len() + 1;
            let mut scenario = assemble(graph, &path, AttackType::LateralMovement, seq);
            apply_risk_adjustment(&mut scenario, CROSS_SEGMENT_RISK_BONUS);
            scenarios.push(scenario);
        }
    }

    debug!(
        segments = groups.len(),
        scenarios = scenarios.len(),
        "lateral movement generation complete"
    );
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{build_view, WeightScheme};
    use crate::enhance::attributes::{enhance_edge, enhance_node};
    use crate::graph::{RawEdge, RawNode};

    fn graph() -> ThreatGraph {
        // Two corporate workstations, one internal server
        let nodes = vec![
            enhance_node(&RawNode::new("ws-1", "Workstation", "WS1")),
            enhance_node(&RawNode::new("ws-2", "Workstation", "WS2")),
            enhance_node(&RawNode::new("srv", "Server", "Server")),
        ];
        let edges = vec![
            enhance_edge(&RawEdge::new("ws-1", "ws-2", "Lateral Movement")),
            enhance_edge(&RawEdge::new("ws-2", "ws-1", "Lateral Movement")),
            enhance_edge(&RawEdge::new("ws-1", "srv", "Network")),
        ];
        ThreatGraph::new(nodes, edges)
    }

    #[test]
    fn test_intra_segment_paths_found() {
        let graph = graph();
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());
        assert!(scenarios
            .iter()
            .any(|s| s.path == vec!["ws-1", "ws-2"]));
        assert!(scenarios
            .iter()
            .any(|s| s.path == vec!["ws-2", "ws-1"]));
    }

    #[test]
    fn test_cross_segment_paths_carry_bonus() {
        let graph = graph();
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());

        // ws-1 (Corporate) -> srv (Internal) is the cross-segment pair
        let cross: Vec<&ThreatPathScenario> = scenarios
            .iter()
            .filter(|s| s.path == vec!["ws-1", "srv"])
            .collect();
        assert!(!cross.is_empty());

        // The same path assembled without the bonus must score lower,
        // unless both already clamp at 10
        let baseline = assemble(
            &graph,
            &[String::from("ws-1"), String::from("srv")],
            AttackType::LateralMovement,
            1,
        );
        for scenario in cross {
            assert!(
                scenario.risk_score
                    >= (baseline.risk_score + CROSS_SEGMENT_RISK_BONUS).min(10.0) - 1e-9
            );
        }
    }

    #[test]
    fn test_disconnected_segments_are_skipped() {
        let nodes = vec![
            enhance_node(&RawNode::new("ws-1", "Workstation", "WS1")),
            enhance_node(&RawNode::new("srv", "Server", "Server")),
        ];
        let graph = ThreatGraph::new(nodes, Vec::new());
        let view = build_view(&graph, WeightScheme::Standard);
        assert!(generate(&graph, &view, &EngineConfig::default()).is_empty());
    }
}

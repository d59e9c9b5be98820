//! Direct attack generation: least-cost paths from exposed nodes to
//! high-value assets

use super::assemble::assemble;
use super::{AttackType, ThreatPathScenario};
use crate::algo::ThreatView;
use crate::config::EngineConfig;
use crate::graph::ThreatGraph;
use tracing::debug;

const MAX_ENTRY_POINTS: usize = 5;
const MAX_TARGETS: usize = 5;

fn push_unique(list: &mut Vec<String>, uid: &str) {
    if !list.iter().any(|existing| existing == uid) {
        list.push(uid.to_string());
    }
}

pub fn generate(
    graph: &ThreatGraph,
    view: &ThreatView,
    config: &EngineConfig,
) -> Vec<ThreatPathScenario> {
    let mut entries: Vec<String> = Vec::new();
    for node in graph.nodes() {
        if node.is_externally_facing() || node.is_vulnerable() {
            push_unique(&mut entries, &node.uid);
        }
    }
    if config.include_external_threats {
        for node in graph.nodes() {
            if node.is_workstation() || node.is_user_account() {
                push_unique(&mut entries, &node.uid);
            }
        }
    }
    if config.include_insider_threats {
        for node in graph.nodes() {
            if node.is_user_level() {
                push_unique(&mut entries, &node.uid);
            }
        }
    }
    entries.truncate(MAX_ENTRY_POINTS);

    // Force-included targets come first so the bound never evicts them
    let mut targets: Vec<String> = Vec::new();
    for uid in &config.target_specific_assets {
        if graph.node(uid).is_some() {
            push_unique(&mut targets, uid);
        }
    }
    for node in graph.nodes() {
        if node.is_high_value() {
            push_unique(&mut targets, &node.uid);
        }
    }
    targets.truncate(MAX_TARGETS.max(config.target_specific_assets.len()));

    let mut scenarios = Vec::new();
    for entry in &entries {
        for target in &targets {
            if entry == target {
                continue;
            }
            let Some(path) = view.shortest_path(entry, target) else {
                continue;
            };
            let seq = scenarios.len() + 1;
            scenarios.push(assemble(graph, &path, AttackType::Direct, seq));
        }
    }
    debug!(
        entries = entries.len(),
        targets = targets.len(),
        scenarios = scenarios.len(),
        "direct attack generation complete"
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
        let nodes = vec![
            enhance_node(&RawNode::new("web", "Web Server", "Web")),
            enhance_node(&RawNode::new("app", "Application Server", "App")),
            enhance_node(&RawNode::new("db", "Database", "DB")),
            enhance_node(&RawNode::new("island", "Database", "Unreachable DB")),
        ];
        let edges = vec![
            enhance_edge(&RawEdge::new("web", "app", "Network")),
            enhance_edge(&RawEdge::new("app", "db", "Network")),
        ];
        ThreatGraph::new(nodes, edges)
    }

    #[test]
    fn test_generates_path_to_reachable_target() {
        let graph = graph();
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());
        assert!(scenarios
            .iter()
            .any(|s| s.path == vec!["web", "app", "db"]));
    }

    #[test]
    fn test_unreachable_targets_are_skipped() {
        let graph = graph();
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());
        assert!(scenarios.iter().all(|s| s.target_asset != "island"));
    }

    #[test]
    fn test_target_specific_assets_are_included() {
        let nodes = vec![
            enhance_node(&RawNode::new("web", "Web Server", "Web")),
            enhance_node(&RawNode::new("printer", "Printer", "Old Printer")),
        ];
        let edges = vec![enhance_edge(&RawEdge::new("web", "printer", "Network"))];
        let graph = ThreatGraph::new(nodes, edges);
        let view = build_view(&graph, WeightScheme::Standard);

        let config = EngineConfig {
            target_specific_assets: vec!["printer".to_string()],
            ..EngineConfig::default()
        };
        let scenarios = generate(&graph, &view, &config);
        // Printer is Medium-value and would never qualify on its own
        assert!(scenarios.iter().any(|s| s.target_asset == "printer"));
    }

    #[test]
    fn test_insider_gate_adds_user_entries() {
        // An unknown type gets the default profile: user-level privilege,
        // no vulnerabilities, internal segment. Only the insider gate can
        // make it an entry point.
        let nodes = vec![
            enhance_node(&RawNode::new("contractor", "Contractor Account", "Contractor")),
            enhance_node(&RawNode::new("db", "Database", "DB")),
        ];
        let edges = vec![enhance_edge(&RawEdge::new("contractor", "db", "Data Access"))];
        let graph = ThreatGraph::new(nodes, edges);
        let view = build_view(&graph, WeightScheme::Standard);

        let baseline = generate(&graph, &view, &EngineConfig::default());
        assert!(baseline.iter().all(|s| s.entry_point != "contractor"));

        let gated = generate(
            &graph,
            &view,
            &EngineConfig {
                include_insider_threats: true,
                ..EngineConfig::default()
            },
        );
        assert!(gated.iter().any(|s| s.entry_point == "contractor"));
    }
}

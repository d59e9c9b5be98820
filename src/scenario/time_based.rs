//! Time-based attack generation: fast smash-and-grab runs and slow
//! low-and-slow campaigns

use super::assemble::assemble;
use super::{AttackType, DetectionDifficulty, ThreatPathScenario};
use crate::algo::ThreatView;
use crate::config::EngineConfig;
use crate::graph::ThreatGraph;
use tracing::debug;

const MAX_ENTRY_POINTS: usize = 3;
const MAX_PATHS_PER_ENTRY: usize = 3;
/// Fast attacks finish within this many hops
const FAST_MAX_HOPS: usize = 3;
/// Stealthy campaigns need at least this many hops
const STEALTH_MIN_HOPS: usize = 4;

pub fn generate(
    graph: &ThreatGraph,
    view: &ThreatView,
    config: &EngineConfig,
) -> Vec<ThreatPathScenario> {
    let mut scenarios = Vec::new();

    // Fast variant: vulnerable entry, short path, detected late but not never
    let fast_entries: Vec<&str> = graph
        .nodes()
        .filter(|n| n.is_vulnerable())
        .map(|n| n.uid.as_str())
        .take(MAX_ENTRY_POINTS)
        .collect();
    for entry in fast_entries {
        let mut kept = 0;
        for path in view.enumerate(entry, config.max_path_length()) {
            if kept >= MAX_PATHS_PER_ENTRY {
                break;
            }
            if path.len() - 1 > FAST_MAX_HOPS {
                continue;
            }
            kept += 1;
            let seq = scenarios.len() + 1;
            let mut scenario = assemble(graph, &path, AttackType::TimeBased, seq);
            scenario.estimated_dwell_time = "Under 24 hours".to_string();
            scenario.detection_difficulty = DetectionDifficulty::Hard;
            scenarios.push(scenario);
        }
    }

    // Stealthy variant: poorly controlled entry, long path, patient dwell
    let stealth_entries: Vec<&str> = graph
        .nodes()
        .filter(|n| n.security_controls.len() <= 1)
        .map(|n| n.uid.as_str())
        .take(MAX_ENTRY_POINTS)
        .collect();
    for entry in stealth_entries {
        let mut kept = 0;
        for path in view.enumerate(entry, config.max_path_length()) {
            if kept >= MAX_PATHS_PER_ENTRY {
                break;
            }
            if path.len() - 1 < STEALTH_MIN_HOPS {
                continue;
            }
            kept += 1;
            let seq = scenarios.len() + 1;
            let mut scenario = assemble(graph, &path, AttackType::TimeBased, seq);
            scenario.estimated_dwell_time = "3-12 months".to_string();
            scenario.detection_difficulty = DetectionDifficulty::VeryHard;
            scenarios.push(scenario);
        }
    }

    debug!(scenarios = scenarios.len(), "time-based generation complete");
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{build_view, WeightScheme};
    use crate::enhance::attributes::{enhance_edge, enhance_node};
    use crate::graph::{RawEdge, RawNode};

    fn chain(types: &[&str]) -> ThreatGraph {
        let nodes: Vec<_> = types
            .iter()
            .enumerate()
            .map(|(i, t)| enhance_node(&RawNode::new(format!("n{i}"), *t, format!("N{i}"))))
            .collect();
        let edges = (0..types.len() - 1)
            .map(|i| enhance_edge(&RawEdge::new(format!("n{i}"), format!("n{}", i + 1), "Network")))
            .collect();
        ThreatGraph::new(nodes, edges)
    }

    #[test]
    fn test_fast_variant_overrides() {
        // Web server entry is vulnerable; everything is within 3 hops
        let graph = chain(&["Web Server", "Switch", "Switch"]);
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());

        let fast: Vec<_> = scenarios
            .iter()
            .filter(|s| s.estimated_dwell_time == "Under 24 hours")
            .collect();
        assert!(!fast.is_empty());
        for scenario in fast {
            assert!(scenario.path.len() - 1 <= FAST_MAX_HOPS);
            assert_eq!(scenario.detection_difficulty, DetectionDifficulty::Hard);
        }
    }

    #[test]
    fn test_stealth_variant_needs_long_paths() {
        // Switches have at most one control; the chain is 5 hops long
        let graph = chain(&["Switch", "Switch", "Switch", "Switch", "Switch", "Switch"]);
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());

        let stealthy: Vec<_> = scenarios
            .iter()
            .filter(|s| s.estimated_dwell_time == "3-12 months")
            .collect();
        assert!(!stealthy.is_empty());
        for scenario in stealthy {
            assert!(scenario.path.len() - 1 >= STEALTH_MIN_HOPS);
            assert_eq!(scenario.detection_difficulty, DetectionDifficulty::VeryHard);
        }
    }

    #[test]
    fn test_short_graph_yields_no_stealth_scenarios() {
        let graph = chain(&["Switch", "Switch"]);
        let view = build_view(&graph, WeightScheme::Standard);
        let scenarios = generate(&graph, &view, &EngineConfig::default());
        assert!(scenarios
            .iter()
            .all(|s| s.estimated_dwell_time != "3-12 months"));
    }
}

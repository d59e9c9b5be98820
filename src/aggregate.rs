//! Scenario aggregation
//!
//! Merges all generators' outputs into the final ranked list: filter by the
//! risk threshold, stable-sort descending by risk score (ties keep emission
//! order), truncate to the configured cap.

use crate::config::EngineConfig;
use crate::scenario::ThreatPathScenario;
use std::cmp::Ordering;

pub fn aggregate(
    mut scenarios: Vec<ThreatPathScenario>,
    config: &EngineConfig,
) -> Vec<ThreatPathScenario> {
    scenarios.retain(|s| s.risk_score >= config.risk_threshold);
    scenarios.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(Ordering::Equal)
    });
    scenarios.truncate(config.max_paths());
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::attributes::{enhance_edge, enhance_node};
    use crate::graph::{RawEdge, RawNode, ThreatGraph};
    use crate::scenario::assemble::assemble;
    use crate::scenario::AttackType;

    fn scenario_with_risk(id: &str, risk: f64) -> ThreatPathScenario {
        let graph = ThreatGraph::new(
            vec![
                enhance_node(&RawNode::new("a", "Server", "A")),
                enhance_node(&RawNode::new("b", "Server", "B")),
            ],
            vec![enhance_edge(&RawEdge::new("a", "b", "Network"))],
        );
        let mut scenario = assemble(
            &graph,
            &[String::from("a"), String::from("b")],
            AttackType::Direct,
            1,
        );
        scenario.id = id.to_string();
        scenario.risk_score = risk;
        scenario
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let scenarios = vec![
            scenario_with_risk("low", 3.0),
            scenario_with_risk("first-eight", 8.0),
            scenario_with_risk("second-eight", 8.0),
            scenario_with_risk("top", 9.5),
        ];
        let result = aggregate(scenarios, &EngineConfig::default());
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "first-eight", "second-eight", "low"]);
    }

    #[test]
    fn test_threshold_filters() {
        let scenarios = vec![
            scenario_with_risk("keep", 7.0),
            scenario_with_risk("drop", 4.0),
        ];
        let config = EngineConfig {
            risk_threshold: 5.0,
            ..EngineConfig::default()
        };
        let result = aggregate(scenarios, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "keep");
    }

    #[test]
    fn test_impossible_threshold_empties_output() {
        let scenarios = vec![scenario_with_risk("s", 10.0)];
        let config = EngineConfig {
            risk_threshold: 11.0,
            ..EngineConfig::default()
        };
        assert!(aggregate(scenarios, &config).is_empty());
    }

    #[test]
    fn test_truncation_keeps_top_scores() {
        let scenarios = (0..30)
            .map(|i| scenario_with_risk(&format!("s{i}"), i as f64 / 3.0))
            .collect();
        let result = aggregate(scenarios, &EngineConfig::default());
        assert_eq!(result.len(), 20);
        assert_eq!(result[0].id, "s29");
    }
}

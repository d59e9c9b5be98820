//! Multi-vector attack generation: phishing and supply-chain entry vectors
//! converging on data stores

use super::assemble::{apply_risk_adjustment, assemble};
use super::{AttackType, AttackerProfile, ThreatPathScenario};
use crate::algo::ThreatView;
use crate::config::EngineConfig;
use crate::graph::{ThreatGraph, ThreatNode};
use tracing::debug;

const MAX_ENTRY_POINTS: usize = 3;
const MAX_TARGETS: usize = 3;
const MULTI_VECTOR_RISK_BONUS: f64 = 1.0;

fn is_phishing_entry(node: &ThreatNode) -> bool {
    node.is_workstation() || node.is_user_account()
}

fn is_supply_chain_entry(node: &ThreatNode) -> bool {
    let node_type = node.node_type.to_ascii_lowercase();
    node_type.contains("software") || node_type.contains("vendor") || node_type.contains("update server")
}

fn is_vector_target(node: &ThreatNode) -> bool {
    node.is_data_store() || node.asset_value == crate::graph::types::Rating::Critical
}

pub fn generate(
    graph: &ThreatGraph,
    view: &ThreatView,
    _config: &EngineConfig,
) -> Vec<ThreatPathScenario> {
    let phishing: Vec<&str> = graph
        .nodes()
        .filter(|n| is_phishing_entry(n))
        .map(|n| n.uid.as_str())
        .take(MAX_ENTRY_POINTS)
        .collect();
    let supply_chain: Vec<&str> = graph
        .nodes()
        .filter(|n| is_supply_chain_entry(n))
        .map(|n| n.uid.as_str())
        .take(MAX_ENTRY_POINTS)
        .collect();
    let targets: Vec<&str> = graph
        .nodes()
        .filter(|n| is_vector_target(n))
        .map(|n| n.uid.as_str())
        .take(MAX_TARGETS)
        .collect();

    let mut scenarios = Vec::new();
    for entries in [&phishing, &supply_chain] {
        for entry in entries {
            for target in &targets {
                if entry == target {
                    continue;
                }
                let Some(path) = view.shortest_path(entry, target) else {
                    continue;
                };
                let seq = scenarios.len() + 1;
                let mut scenario = assemble(graph, &path, AttackType::MultiVector, seq);
                apply_risk_adjustment(&mut scenario, MULTI_VECTOR_RISK_BONUS);
                // Coordinated multi-vector campaigns are attributed to
                // nation-state operators
                scenario.attacker_profile = AttackerProfile::nation_state();
                scenarios.push(scenario);
            }
        }
    }
    debug!(
        phishing = phishing.len(),
        supply_chain = supply_chain.len(),
        scenarios = scenarios.len(),
        "multi-vector generation complete"
    );
    scenarios
}

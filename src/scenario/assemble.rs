//! Scenario scoring and assembly
//!
//! Pure functions of the path, the graph snapshot and fixed lookup tables.
//! Severity and detection difficulty are always derived from their numeric
//! inputs, never assigned directly.

use super::{
    AttackType, AttackerProfile, BusinessImpact, DetectionDifficulty, PathStep, ScenarioStatus,
    Severity, ThreatPathScenario, TimelineStage,
};
use crate::graph::types::Rating;
use crate::graph::{ThreatGraph, ThreatNode};

/// Mid-path action labels, cycled by step index
static ACTION_VOCABULARY: &[&str] = &[
    "Exploit Vulnerability",
    "Harvest Credentials",
    "Move Laterally",
    "Escalate Privileges",
    "Establish Persistence",
];

/// MITRE technique labels, cycled by step index
static TECHNIQUE_VOCABULARY: &[(&str, &str)] = &[
    ("T1190", "Exploit Public-Facing Application"),
    ("T1078", "Valid Accounts"),
    ("T1021", "Remote Services"),
    ("T1068", "Exploitation for Privilege Escalation"),
    ("T1053", "Scheduled Task/Job"),
];

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Risk formula: short paths to valuable, inherently risky assets score
/// highest. Clamped to [0, 10] and rounded to one decimal.
fn risk_score(path: &[String], avg_node_risk: f64, target_value: Rating) -> f64 {
    let length_bonus = (5.0 - path.len() as f64).max(0.0);
    let target_bonus = match target_value {
        Rating::Critical => 2.0,
        Rating::High => 1.0,
        _ => 0.0,
    };
    round1((5.0 + length_bonus + avg_node_risk / 2.0 + target_bonus).clamp(0.0, 10.0))
}

/// Likelihood grows with the fraction of path nodes carrying known
/// vulnerabilities, capped at 0.95.
fn likelihood(nodes: &[Option<&ThreatNode>]) -> f64 {
    let vulnerable = nodes
        .iter()
        .filter(|n| n.map_or(false, |n| n.is_vulnerable()))
        .count();
    let fraction = vulnerable as f64 / nodes.len().max(1) as f64;
    (0.5 + fraction * 0.3).min(0.95)
}

/// Impact maps the target asset value through a fixed table.
fn impact(target_value: Rating) -> f64 {
    match target_value {
        Rating::Critical => 10.0,
        Rating::High => 8.0,
        Rating::Medium => 6.0,
        Rating::Low => 4.0,
    }
}

/// Per-step detection probability: baseline plus control coverage, with a
/// bump for domain controllers and critical assets. Capped at 0.9.
fn detection_probability(node: Option<&ThreatNode>) -> f64 {
    let Some(node) = node else { return 0.3 };
    let mut probability = 0.3 + 0.2 * node.security_controls.len() as f64;
    if node.is_domain_controller() || node.criticality == Rating::Critical {
        probability += 0.3;
    }
    probability.min(0.9)
}

fn path_details(
    path: &[String],
    nodes: &[Option<&ThreatNode>],
    attack_type: AttackType,
) -> Vec<PathStep> {
    let last = path.len() - 1;
    path.iter()
        .enumerate()
        .map(|(i, uid)| {
            let action = if i == 0 {
                "Initial Access".to_string()
            } else if i == last {
                "Target Compromise".to_string()
            } else {
                ACTION_VOCABULARY[(i - 1) % ACTION_VOCABULARY.len()].to_string()
            };
            let (technique_id, technique_name) =
                TECHNIQUE_VOCABULARY[i % TECHNIQUE_VOCABULARY.len()];
            PathStep {
                node: uid.clone(),
                action,
                mitre_technique: format!("{} {}", technique_id, technique_name),
                time_estimate: attack_type.step_time_estimate().to_string(),
                detection_probability: detection_probability(nodes[i]),
            }
        })
        .collect()
}

/// Tactic accumulation: every scenario opens with Initial Access; the rest
/// depend on path shape and strategy.
fn mitre_tactics(path_len: usize, attack_type: AttackType) -> Vec<String> {
    let mut tactics = vec!["Initial Access".to_string()];
    if path_len > 2 {
        tactics.push("Lateral Movement".to_string());
    }
    if attack_type.is_escalation() {
        tactics.push("Privilege Escalation".to_string());
    }
    if path_len > 3 {
        tactics.push("Persistence".to_string());
    }
    if attack_type.is_data_oriented() {
        tactics.push("Exfiltration".to_string());
    }
    tactics
}

fn timeline(
    path: &[String],
    attack_type: AttackType,
    entry_name: &str,
    target_name: &str,
) -> Vec<TimelineStage> {
    let mut stages = vec![TimelineStage {
        stage: "Initial Access".to_string(),
        description: format!("Attacker gains a foothold on {}", entry_name),
        timeframe: "0-24 hours".to_string(),
        indicators: vec![
            "Suspicious inbound connections".to_string(),
            "Unexpected process execution".to_string(),
        ],
    }];

    if path.len() > 2 {
        stages.push(TimelineStage {
            stage: "Lateral Movement".to_string(),
            description: format!(
                "Attacker pivots across {} intermediate systems",
                path.len() - 2
            ),
            timeframe: "1-7 days".to_string(),
            indicators: vec![
                "Unusual internal authentication".to_string(),
                "Remote service creation".to_string(),
            ],
        });
    }

    if attack_type.is_escalation() {
        stages.push(TimelineStage {
            stage: "Privilege Escalation".to_string(),
            description: "Attacker elevates from user-level to administrative access".to_string(),
            timeframe: "2-5 days".to_string(),
            indicators: vec![
                "New privileged group membership".to_string(),
                "Credential dumping artifacts".to_string(),
            ],
        });
    }

    stages.push(TimelineStage {
        stage: "Objective Execution".to_string(),
        description: format!("Attacker compromises {}", target_name),
        timeframe: "1-2 weeks".to_string(),
        indicators: vec![
            "Bulk data access".to_string(),
            "Unexpected configuration changes".to_string(),
        ],
    });

    stages
}

/// Business impact is a fixed lookup by target asset value.
fn business_impact(target_value: Rating) -> BusinessImpact {
    match target_value {
        Rating::Critical => BusinessImpact {
            confidentiality: Rating::High,
            integrity: Rating::High,
            availability: Rating::High,
            financial: "$1,000,000+".to_string(),
            reputational: "Severe long-term damage to brand and customer trust".to_string(),
        },
        Rating::High => BusinessImpact {
            confidentiality: Rating::High,
            integrity: Rating::Medium,
            availability: Rating::Medium,
            financial: "$250,000 - $1,000,000".to_string(),
            reputational: "Significant erosion of customer trust".to_string(),
        },
        Rating::Medium => BusinessImpact {
            confidentiality: Rating::Medium,
            integrity: Rating::Medium,
            availability: Rating::Low,
            financial: "$50,000 - $250,000".to_string(),
            reputational: "Moderate reputational exposure".to_string(),
        },
        Rating::Low => BusinessImpact {
            confidentiality: Rating::Low,
            integrity: Rating::Low,
            availability: Rating::Low,
            financial: "Under $50,000".to_string(),
            reputational: "Limited reputational exposure".to_string(),
        },
    }
}

/// Prerequisites are collected from the edges along the path, deduplicated
/// in order; a path with no annotated edges still requires a foothold.
fn prerequisites(graph: &ThreatGraph, path: &[String], entry_name: &str) -> Vec<String> {
    let mut collected: Vec<String> = Vec::new();
    for pair in path.windows(2) {
        if let Some(edge) = graph.edge_between(&pair[0], &pair[1]) {
            for prerequisite in &edge.prerequisites {
                if !collected.contains(prerequisite) {
                    collected.push(prerequisite.clone());
                }
            }
        }
    }
    if collected.is_empty() {
        collected.push(format!("Initial foothold on {}", entry_name));
    }
    collected
}

/// Build the full scenario record for one path.
///
/// `seq` numbers the scenario within its generator run and feeds the id.
pub fn assemble(
    graph: &ThreatGraph,
    path: &[String],
    attack_type: AttackType,
    seq: usize,
) -> ThreatPathScenario {
    debug_assert!(path.len() >= 2, "scenario paths have at least two nodes");

    let nodes: Vec<Option<&ThreatNode>> = path.iter().map(|uid| graph.node(uid)).collect();
    let entry = &path[0];
    let target = &path[path.len() - 1];
    let entry_name = nodes[0].map_or(entry.as_str(), |n| n.showname.as_str());
    let target_name = nodes[nodes.len() - 1].map_or(target.as_str(), |n| n.showname.as_str());
    let target_value = nodes[nodes.len() - 1].map_or(Rating::Medium, |n| n.asset_value);

    let avg_node_risk = nodes
        .iter()
        .map(|n| n.map_or(5.0, |n| n.risk_score))
        .sum::<f64>()
        / path.len() as f64;
    let avg_controls = nodes
        .iter()
        .map(|n| n.map_or(0.0, |n| n.security_controls.len() as f64))
        .sum::<f64>()
        / path.len() as f64;

    let risk = risk_score(path, avg_node_risk, target_value);
    let details = path_details(path, &nodes, attack_type);
    let mut techniques: Vec<String> = Vec::new();
    for step in &details {
        if !techniques.contains(&step.mitre_technique) {
            techniques.push(step.mitre_technique.clone());
        }
    }

    ThreatPathScenario {
        id: format!("{}-{:03}", attack_type.slug(), seq),
        name: format!("{}: {} to {}", attack_type.label(), entry_name, target_name),
        description: format!(
            "{} path from {} to {} across {} nodes",
            attack_type.label(),
            entry_name,
            target_name,
            path.len()
        ),
        scenario: attack_type.label().to_string(),
        attacker_profile: AttackerProfile::for_attack(attack_type),
        path: path.to_vec(),
        risk_score: risk,
        severity: Severity::from_risk_score(risk),
        likelihood: likelihood(&nodes),
        impact: impact(target_value),
        mitre_tactics: mitre_tactics(path.len(), attack_type),
        mitre_techniques: techniques,
        entry_point: entry.clone(),
        target_asset: target.clone(),
        estimated_dwell_time: attack_type.dwell_time().to_string(),
        detection_difficulty: DetectionDifficulty::from_control_coverage(avg_controls, path.len()),
        timeline: timeline(path, attack_type, entry_name, target_name),
        prerequisites: prerequisites(graph, path, entry_name),
        business_impact: business_impact(target_value),
        status: ScenarioStatus::Active,
        path_details: details,
        generated_at: chrono::Utc::now().timestamp_millis(),
    }
}

/// Re-score a scenario after a generator-specific adjustment; severity is
/// re-derived so it stays a pure function of the final risk score.
pub fn apply_risk_adjustment(scenario: &mut ThreatPathScenario, delta: f64) {
    scenario.risk_score = round1((scenario.risk_score + delta).clamp(0.0, 10.0));
    scenario.severity = Severity::from_risk_score(scenario.risk_score);
}

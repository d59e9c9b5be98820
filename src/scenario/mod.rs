//! Threat path scenarios
//!
//! A scenario is one plausible adversary path from an entry point to a
//! target asset, with quantitative risk metrics and a MITRE-style narrative
//! attached. Six generator strategies produce candidates; the assembler
//! computes the metrics; the aggregator merges, filters and ranks.

pub mod assemble;
pub mod direct;
pub mod escalation;
pub mod lateral;
pub mod multi_hop;
pub mod multi_vector;
pub mod time_based;

use crate::graph::types::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attack strategy behind a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    #[serde(rename = "Direct Attack")]
    Direct,
    #[serde(rename = "Multi-Hop Attack")]
    MultiHop,
    #[serde(rename = "Privilege Escalation")]
    PrivilegeEscalation,
    #[serde(rename = "Lateral Movement")]
    LateralMovement,
    #[serde(rename = "Multi-Vector Attack")]
    MultiVector,
    #[serde(rename = "Time-Based Attack")]
    TimeBased,
}

impl AttackType {
    pub fn label(&self) -> &'static str {
        match self {
            AttackType::Direct => "Direct Attack",
            AttackType::MultiHop => "Multi-Hop Attack",
            AttackType::PrivilegeEscalation => "Privilege Escalation",
            AttackType::LateralMovement => "Lateral Movement",
            AttackType::MultiVector => "Multi-Vector Attack",
            AttackType::TimeBased => "Time-Based Attack",
        }
    }

    /// Short id prefix for scenarios of this type
    pub fn slug(&self) -> &'static str {
        match self {
            AttackType::Direct => "direct",
            AttackType::MultiHop => "multihop",
            AttackType::PrivilegeEscalation => "privesc",
            AttackType::LateralMovement => "lateral",
            AttackType::MultiVector => "multivector",
            AttackType::TimeBased => "timebased",
        }
    }

    /// Whether the strategy centers on gaining higher privilege
    pub fn is_escalation(&self) -> bool {
        matches!(self, AttackType::PrivilegeEscalation)
    }

    /// Whether the strategy's objective is data theft
    pub fn is_data_oriented(&self) -> bool {
        matches!(self, AttackType::MultiVector)
    }

    /// Typical attacker persistence window for this strategy
    pub fn dwell_time(&self) -> &'static str {
        match self {
            AttackType::Direct => "1-7 days",
            AttackType::MultiHop => "1-4 weeks",
            AttackType::PrivilegeEscalation => "1-2 weeks",
            AttackType::LateralMovement => "2-6 weeks",
            AttackType::MultiVector => "1-3 months",
            AttackType::TimeBased => "Varies",
        }
    }

    /// Per-step time estimate band for this strategy
    pub fn step_time_estimate(&self) -> &'static str {
        match self {
            AttackType::Direct => "1-4 hours",
            AttackType::MultiHop => "4-24 hours",
            AttackType::PrivilegeEscalation => "2-8 hours",
            AttackType::LateralMovement => "1-3 days",
            AttackType::MultiVector => "4-12 hours",
            AttackType::TimeBased => "Hours to weeks",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scenario severity, derived from the risk score and never assigned
/// independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Pure threshold mapping: >=8 Critical, >=6 High, >=4 Medium, else Low
    pub fn from_risk_score(score: f64) -> Self {
        if score >= 8.0 {
            Severity::Critical
        } else if score >= 6.0 {
            Severity::High
        } else if score >= 4.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How hard defenders will find the scenario to detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionDifficulty {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl DetectionDifficulty {
    /// Derive from the average security-control count per path node; sparse
    /// coverage falls back on path length.
    pub fn from_control_coverage(avg_controls: f64, path_len: usize) -> Self {
        if avg_controls >= 3.0 {
            DetectionDifficulty::VeryEasy
        } else if avg_controls >= 2.0 {
            DetectionDifficulty::Easy
        } else if avg_controls >= 1.0 {
            DetectionDifficulty::Medium
        } else if path_len <= 3 {
            DetectionDifficulty::Hard
        } else {
            DetectionDifficulty::VeryHard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionDifficulty::VeryEasy => "Very Easy",
            DetectionDifficulty::Easy => "Easy",
            DetectionDifficulty::Medium => "Medium",
            DetectionDifficulty::Hard => "Hard",
            DetectionDifficulty::VeryHard => "Very Hard",
        }
    }
}

impl fmt::Display for DetectionDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review lifecycle of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioStatus {
    Active,
    Mitigated,
    Accepted,
    #[serde(rename = "Under Review")]
    UnderReview,
}

/// Who is assumed to run the attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackerProfile {
    pub actor_type: String,
    pub sophistication: String,
    pub motivation: Vec<String>,
    pub capabilities: Vec<String>,
}

impl AttackerProfile {
    fn build(
        actor_type: &str,
        sophistication: &str,
        motivation: &[&str],
        capabilities: &[&str],
    ) -> Self {
        AttackerProfile {
            actor_type: actor_type.to_string(),
            sophistication: sophistication.to_string(),
            motivation: motivation.iter().map(|s| s.to_string()).collect(),
            capabilities: capabilities.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Default profile for an attack strategy
    pub fn for_attack(attack_type: AttackType) -> Self {
        match attack_type {
            AttackType::Direct => Self::build(
                "Cybercriminal",
                "Intermediate",
                &["Financial gain"],
                &["Public exploit kits", "Credential stuffing"],
            ),
            AttackType::MultiHop => Self::build(
                "Organized Crime Group",
                "Advanced",
                &["Financial gain", "Data theft"],
                &["Custom tooling", "Living-off-the-land techniques"],
            ),
            AttackType::PrivilegeEscalation => Self::build(
                "External Operator",
                "Advanced",
                &["Privilege abuse", "Data theft"],
                &["Credential dumping", "Kerberos abuse"],
            ),
            AttackType::LateralMovement => Self::build(
                "Ransomware Affiliate",
                "Intermediate",
                &["Extortion"],
                &["SMB exploitation", "Remote administration tools"],
            ),
            AttackType::MultiVector => Self::build(
                "APT Group",
                "Advanced",
                &["Espionage", "Data theft"],
                &["Spear phishing", "Supply-chain tampering"],
            ),
            AttackType::TimeBased => Self::build(
                "Patient Adversary",
                "Advanced",
                &["Espionage"],
                &["Low-and-slow tradecraft", "Custom implants"],
            ),
        }
    }

    /// High-sophistication profile used when a strategy is attributed to a
    /// nation-state actor
    pub fn nation_state() -> Self {
        Self::build(
            "Nation-State APT",
            "Advanced Persistent",
            &["Espionage", "Strategic advantage"],
            &["Zero-day exploits", "Custom malware", "Supply-chain access"],
        )
    }
}

/// One step of a scenario path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    /// Node uid this step lands on
    pub node: String,
    pub action: String,
    pub mitre_technique: String,
    pub time_estimate: String,
    /// 0-1 chance defenders notice this step
    pub detection_probability: f64,
}

/// One stage of the scenario timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStage {
    pub stage: String,
    pub description: String,
    pub timeframe: String,
    pub indicators: Vec<String>,
}

/// Business consequence of the target asset being compromised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessImpact {
    pub confidentiality: Rating,
    pub integrity: Rating,
    pub availability: Rating,
    pub financial: String,
    pub reputational: String,
}

/// A fully assembled threat path scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatPathScenario {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Attack strategy label
    pub scenario: String,
    pub attacker_profile: AttackerProfile,
    /// Ordered node uids; every consecutive pair is backed by an edge
    pub path: Vec<String>,
    pub path_details: Vec<PathStep>,
    /// 0-10, one decimal
    pub risk_score: f64,
    pub severity: Severity,
    /// 0-1
    pub likelihood: f64,
    /// 0-10
    pub impact: f64,
    pub mitre_tactics: Vec<String>,
    pub mitre_techniques: Vec<String>,
    pub entry_point: String,
    pub target_asset: String,
    pub estimated_dwell_time: String,
    pub detection_difficulty: DetectionDifficulty,
    pub timeline: Vec<TimelineStage>,
    pub prerequisites: Vec<String>,
    pub business_impact: BusinessImpact,
    pub status: ScenarioStatus,
    /// Unix milliseconds
    pub generated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_risk_score(10.0), Severity::Critical);
        assert_eq!(Severity::from_risk_score(8.0), Severity::Critical);
        assert_eq!(Severity::from_risk_score(7.9), Severity::High);
        assert_eq!(Severity::from_risk_score(6.0), Severity::High);
        assert_eq!(Severity::from_risk_score(5.9), Severity::Medium);
        assert_eq!(Severity::from_risk_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_risk_score(3.9), Severity::Low);
        assert_eq!(Severity::from_risk_score(0.0), Severity::Low);
    }

    #[test]
    fn test_detection_difficulty_bands() {
        assert_eq!(
            DetectionDifficulty::from_control_coverage(3.0, 2),
            DetectionDifficulty::VeryEasy
        );
        assert_eq!(
            DetectionDifficulty::from_control_coverage(2.5, 2),
            DetectionDifficulty::Easy
        );
        assert_eq!(
            DetectionDifficulty::from_control_coverage(1.0, 2),
            DetectionDifficulty::Medium
        );
        assert_eq!(
            DetectionDifficulty::from_control_coverage(0.5, 3),
            DetectionDifficulty::Hard
        );
        assert_eq!(
            DetectionDifficulty::from_control_coverage(0.5, 4),
            DetectionDifficulty::VeryHard
        );
    }

    #[test]
    fn test_attack_type_labels_round_trip() {
        for attack_type in [
            AttackType::Direct,
            AttackType::MultiHop,
            AttackType::PrivilegeEscalation,
            AttackType::LateralMovement,
            AttackType::MultiVector,
            AttackType::TimeBased,
        ] {
            let json = serde_json::to_string(&attack_type).unwrap();
            assert_eq!(json, format!("\"{}\"", attack_type.label()));
        }
    }

    #[test]
    fn test_nation_state_profile_is_advanced() {
        let profile = AttackerProfile::nation_state();
        assert_eq!(profile.actor_type, "Nation-State APT");
        assert!(profile.capabilities.iter().any(|c| c.contains("Zero-day")));
    }
}

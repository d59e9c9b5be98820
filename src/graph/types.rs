//! Core enumerations for the security asset graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad functional category derived for every node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeCategory {
    Infrastructure,
    Identity,
    Data,
    Application,
    Network,
    Security,
    Threat,
    Compliance,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Infrastructure => "Infrastructure",
            NodeCategory::Identity => "Identity",
            NodeCategory::Data => "Data",
            NodeCategory::Application => "Application",
            NodeCategory::Network => "Network",
            NodeCategory::Security => "Security",
            NodeCategory::Threat => "Threat",
            NodeCategory::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Four-level rating used for both criticality and asset value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Critical,
    High,
    Medium,
    Low,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Critical => "Critical",
            Rating::High => "High",
            Rating::Medium => "Medium",
            Rating::Low => "Low",
        }
    }

    /// Parse a rating from dataset property text; unknown values fall back
    /// to Medium.
    pub fn parse_or_medium(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Rating::Critical,
            "high" => Rating::High,
            "low" => Rating::Low,
            _ => Rating::Medium,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How closely a node is watched by security tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitoringLevel {
    High,
    Medium,
    Low,
    Minimal,
}

impl MonitoringLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitoringLevel::High => "High",
            MonitoringLevel::Medium => "Medium",
            MonitoringLevel::Low => "Low",
            MonitoringLevel::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for MonitoringLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Traversal difficulty of an edge; drives path weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDifficulty {
    Low,
    Medium,
    High,
}

impl EdgeDifficulty {
    /// Path weight used by the shortest-path finder
    pub fn weight(&self) -> f64 {
        match self {
            EdgeDifficulty::Low => 1.0,
            EdgeDifficulty::Medium => 2.0,
            EdgeDifficulty::High => 3.0,
        }
    }

    /// Parse from dataset property text; unknown values fall back to Medium.
    pub fn parse_or_medium(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "low" => EdgeDifficulty::Low,
            "high" => EdgeDifficulty::High,
            _ => EdgeDifficulty::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeDifficulty::Low => "Low",
            EdgeDifficulty::Medium => "Medium",
            EdgeDifficulty::High => "High",
        }
    }
}

impl fmt::Display for EdgeDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relationship category derived for every edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeCategory {
    Network,
    Access,
    Trust,
    Exploit,
    #[serde(rename = "Lateral Movement")]
    LateralMovement,
    #[serde(rename = "Data Flow")]
    DataFlow,
    Compliance,
}

impl EdgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeCategory::Network => "Network",
            EdgeCategory::Access => "Access",
            EdgeCategory::Trust => "Trust",
            EdgeCategory::Exploit => "Exploit",
            EdgeCategory::LateralMovement => "Lateral Movement",
            EdgeCategory::DataFlow => "Data Flow",
            EdgeCategory::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for EdgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse risk label attached to edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_weights() {
        assert_eq!(EdgeDifficulty::Low.weight(), 1.0);
        assert_eq!(EdgeDifficulty::Medium.weight(), 2.0);
        assert_eq!(EdgeDifficulty::High.weight(), 3.0);
    }

    #[test]
    fn test_difficulty_parse_fallback() {
        assert_eq!(EdgeDifficulty::parse_or_medium("low"), EdgeDifficulty::Low);
        assert_eq!(EdgeDifficulty::parse_or_medium("HIGH"), EdgeDifficulty::High);
        assert_eq!(
            EdgeDifficulty::parse_or_medium("impossible"),
            EdgeDifficulty::Medium
        );
    }

    #[test]
    fn test_rating_parse_fallback() {
        assert_eq!(Rating::parse_or_medium("Critical"), Rating::Critical);
        assert_eq!(Rating::parse_or_medium("nonsense"), Rating::Medium);
    }

    #[test]
    fn test_edge_category_display() {
        assert_eq!(EdgeCategory::LateralMovement.as_str(), "Lateral Movement");
        assert_eq!(EdgeCategory::DataFlow.as_str(), "Data Flow");
    }
}

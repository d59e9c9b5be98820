//! Edge types for the security asset graph
//!
//! Edges are directed. `RawEdge` is the dataset shape; `ThreatEdge` carries
//! the derived relationship category, traversal difficulty and exploit
//! metadata attached by the enhancer.

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeCategory, EdgeDifficulty, RiskLevel};
use serde::{Deserialize, Serialize};

/// A directed edge as supplied by the external dataset loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEdge {
    /// Source node uid (edge goes FROM this node)
    pub from: String,

    /// Target node uid (edge goes TO this node)
    pub to: String,

    /// Relationship type, e.g. "Network", "Privilege Escalation"
    #[serde(rename = "type", default)]
    pub edge_type: String,

    /// Open key/value property bag
    #[serde(default)]
    pub properties: PropertyMap,
}

impl RawEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, edge_type: impl Into<String>) -> Self {
        RawEdge {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style property setter, used heavily in tests and synthesis
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// An edge enriched with derived traversal attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatEdge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub properties: PropertyMap,

    pub category: EdgeCategory,
    pub difficulty: EdgeDifficulty,
    pub exploit_methods: Vec<String>,
    pub prerequisites: Vec<String>,
    pub encrypted: bool,
    pub monitored: bool,
    pub risk_level: RiskLevel,
}

impl ThreatEdge {
    /// Path weight used by the shortest-path finder
    pub fn weight(&self) -> f64 {
        self.difficulty.weight()
    }

    /// Whether this edge models a privilege-escalation move; the
    /// escalation-aware path finder re-weights these.
    pub fn is_privilege_escalation(&self) -> bool {
        self.edge_type.to_ascii_lowercase().contains("escalat")
            || self
                .exploit_methods
                .iter()
                .any(|m| m.to_ascii_lowercase().contains("escalat"))
    }
}

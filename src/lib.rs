//! Breachpath — attack-path discovery and risk-scoring engine
//!
//! Given a security asset graph (hosts, accounts, services, network
//! segments, threat actors, vulnerabilities), the engine synthesizes
//! realistic adversary paths from entry points to high-value targets and
//! attaches quantitative risk/likelihood/impact/detection metrics plus a
//! MITRE-style narrative to each.
//!
//! # Architecture
//!
//! - `graph`: the asset-graph data model, from raw input nodes/edges to the
//!   immutable enriched snapshot generators read from
//! - `enhance`: derives security attributes via type lookup tables and
//!   optionally injects synthetic infrastructure
//! - `algo`: adapter over the `breachpath-algorithms` crate (Dijkstra,
//!   bounded path enumeration) with difficulty-derived edge weights
//! - `scenario`: six generator strategies plus the scorer/assembler
//! - `aggregate`: merge, filter, rank and cap the final scenario list
//!
//! The engine is stateless and single-pass: the graph is supplied fresh on
//! each invocation, scenarios are computed and returned, and nothing is
//! mutated afterward.
//!
//! # Example
//!
//! ```rust
//! use breachpath::graph::{RawEdge, RawNode};
//! use breachpath::{generate_threat_paths, EngineConfig};
//!
//! let nodes = vec![
//!     RawNode::new("web", "Web Server", "Public Web Server"),
//!     RawNode::new("db", "Database", "Customer Database"),
//! ];
//! let edges = vec![RawEdge::new("web", "db", "Network")];
//!
//! let scenarios = generate_threat_paths(&nodes, &edges, &EngineConfig::default()).unwrap();
//! assert!(!scenarios.is_empty());
//! assert!(scenarios[0].risk_score <= 10.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod algo;
pub mod config;
pub mod engine;
pub mod enhance;
pub mod graph;
pub mod scenario;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::{generate_threat_paths, Dataset, EngineError, EngineResult};
pub use enhance::enhance;
pub use graph::{
    GraphError, GraphResult, PropertyMap, PropertyValue, RawEdge, RawNode, ThreatEdge,
    ThreatGraph, ThreatNode,
};
pub use scenario::{
    AttackType, AttackerProfile, BusinessImpact, DetectionDifficulty, PathStep, ScenarioStatus,
    Severity, ThreatPathScenario, TimelineStage,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.4.0");
    }
}

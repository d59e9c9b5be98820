//! Security asset graph data model
//!
//! Raw nodes/edges as supplied by the dataset loader, enriched threat
//! nodes/edges as produced by the enhancer, and the immutable snapshot the
//! scenario generators read from.

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

pub use edge::{RawEdge, ThreatEdge};
pub use node::{RawNode, ThreatNode};
pub use property::{PropertyMap, PropertyValue};
pub use store::{validate_graph, GraphError, GraphResult, ThreatGraph};
pub use types::{EdgeCategory, EdgeDifficulty, MonitoringLevel, NodeCategory, Rating, RiskLevel};

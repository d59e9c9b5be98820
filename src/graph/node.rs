//! Node types for the security asset graph
//!
//! `RawNode` is the shape supplied by the dataset-loading collaborator;
//! `ThreatNode` is the enriched form produced by the enhancer with derived
//! security attributes attached.

use super::property::{PropertyMap, PropertyValue};
use super::types::{MonitoringLevel, NodeCategory, Rating};
use serde::{Deserialize, Serialize};

/// A node as supplied by the external dataset loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNode {
    /// Unique key of this node
    pub uid: String,

    /// Categorical asset type, e.g. "Server", "Domain Controller"
    #[serde(rename = "type")]
    pub node_type: String,

    /// Display label
    #[serde(default)]
    pub showname: String,

    /// Open key/value property bag
    #[serde(default)]
    pub properties: PropertyMap,
}

impl RawNode {
    pub fn new(uid: impl Into<String>, node_type: impl Into<String>, showname: impl Into<String>) -> Self {
        RawNode {
            uid: uid.into(),
            node_type: node_type.into(),
            showname: showname.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style property setter, used heavily in tests and synthesis
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A node enriched with derived security attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatNode {
    pub uid: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub showname: String,
    pub properties: PropertyMap,

    pub category: NodeCategory,
    pub criticality: Rating,
    pub asset_value: Rating,
    pub vulnerabilities: Vec<String>,
    pub privileges: Vec<String>,
    pub network_segment: String,
    pub security_controls: Vec<String>,
    /// 0-10 inherent risk of this asset type
    pub risk_score: f64,
    pub monitoring_level: MonitoringLevel,
    pub business_function: String,
    pub data_classification: String,
    pub backup_status: String,
    pub patch_level: String,
    pub encryption_status: String,
    pub compromise_indicators: Vec<String>,
    pub suspected_compromised: bool,
}

impl ThreatNode {
    /// Get a property value from the original property bag
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Case-insensitive type check
    pub fn type_is(&self, node_type: &str) -> bool {
        self.node_type.eq_ignore_ascii_case(node_type)
    }

    /// Nodes an attacker can reach from outside the perimeter
    pub fn is_externally_facing(&self) -> bool {
        if self
            .get_property("externally_facing")
            .and_then(PropertyValue::as_boolean)
            .unwrap_or(false)
        {
            return true;
        }
        self.network_segment.eq_ignore_ascii_case("DMZ")
            || self.network_segment.eq_ignore_ascii_case("External")
    }

    /// Nodes carrying at least one known vulnerability
    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }

    /// Critical/High asset value
    pub fn is_high_value(&self) -> bool {
        matches!(self.asset_value, Rating::Critical | Rating::High)
    }

    /// Case-insensitive privilege membership check
    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.privileges
            .iter()
            .any(|p| p.eq_ignore_ascii_case(privilege))
    }

    /// Holds Admin, Domain Admin or System privilege
    pub fn is_privileged(&self) -> bool {
        self.has_privilege("Admin")
            || self.has_privilege("Domain Admin")
            || self.has_privilege("System")
    }

    /// Holds User-level privilege and nothing stronger
    pub fn is_user_level(&self) -> bool {
        self.has_privilege("User") && !self.is_privileged()
    }

    pub fn is_domain_controller(&self) -> bool {
        self.type_is("Domain Controller")
    }

    pub fn is_workstation(&self) -> bool {
        self.type_is("Workstation")
    }

    pub fn is_user_account(&self) -> bool {
        self.type_is("User Account")
    }

    /// Database-class asset (databases and file servers hold the data)
    pub fn is_data_store(&self) -> bool {
        self.type_is("Database") || self.type_is("File Server")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::attributes::enhance_node;

    #[test]
    fn test_raw_node_deserialization() {
        let raw: RawNode = serde_json::from_str(
            r#"{"uid": "srv-1", "type": "Server", "showname": "App Server", "properties": {"os": "Linux"}}"#,
        )
        .unwrap();
        assert_eq!(raw.uid, "srv-1");
        assert_eq!(raw.node_type, "Server");
        assert_eq!(raw.properties.get("os").unwrap().as_string(), Some("Linux"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let raw: RawNode = serde_json::from_str(r#"{"uid": "n1", "type": "Server"}"#).unwrap();
        assert_eq!(raw.showname, "");
        assert!(raw.properties.is_empty());
    }

    #[test]
    fn test_externally_facing_via_property() {
        let raw = RawNode::new("ws-1", "Workstation", "WS").with_property("externally_facing", true);
        let node = enhance_node(&raw);
        assert!(node.is_externally_facing());
    }

    #[test]
    fn test_privilege_checks() {
        let user = enhance_node(&RawNode::new("u1", "User Account", "Alice"));
        assert!(user.is_user_level());
        assert!(!user.is_privileged());

        let admin = enhance_node(&RawNode::new("a1", "Admin Account", "Admin"));
        assert!(admin.is_privileged());
        assert!(!admin.is_user_level());
    }
}

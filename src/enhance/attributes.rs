//! Type-to-attribute derivation tables
//!
//! Every security attribute the engine scores against is derived from the
//! node/edge type through flat keyed tables with a conservative default
//! fallback. Keeping the mapping as data makes it auditable and testable in
//! isolation.

use crate::graph::types::{
    EdgeCategory, EdgeDifficulty, MonitoringLevel, NodeCategory, Rating, RiskLevel,
};
use crate::graph::{PropertyValue, RawEdge, RawNode, ThreatEdge, ThreatNode};

/// Derived security attributes for one node type
pub struct TypeProfile {
    pub category: NodeCategory,
    pub criticality: Rating,
    pub asset_value: Rating,
    pub risk_score: f64,
    pub network_segment: &'static str,
    pub privileges: &'static [&'static str],
    pub vulnerabilities: &'static [&'static str],
    pub security_controls: &'static [&'static str],
    pub monitoring_level: MonitoringLevel,
    pub business_function: &'static str,
    pub data_classification: &'static str,
    pub backup_status: &'static str,
    pub patch_level: &'static str,
    pub encryption_status: &'static str,
}

/// Conservative fallback for unknown node types
pub const DEFAULT_PROFILE: TypeProfile = TypeProfile {
    category: NodeCategory::Infrastructure,
    criticality: Rating::Medium,
    asset_value: Rating::Medium,
    risk_score: 5.0,
    network_segment: "Internal",
    privileges: &["User"],
    vulnerabilities: &[],
    security_controls: &[],
    monitoring_level: MonitoringLevel::Medium,
    business_function: "General Computing",
    data_classification: "Internal",
    backup_status: "Weekly",
    patch_level: "Current minus one",
    encryption_status: "None",
};

static TYPE_PROFILES: &[(&str, TypeProfile)] = &[
    (
        "Server",
        TypeProfile {
            category: NodeCategory::Infrastructure,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 7.0,
            network_segment: "Internal",
            privileges: &["Service"],
            vulnerabilities: &["Unpatched Services"],
            security_controls: &["Host Firewall", "EDR Agent"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Core Services",
            data_classification: "Internal",
            backup_status: "Daily",
            patch_level: "Current minus one",
            encryption_status: "At rest",
        },
    ),
    (
        "Web Server",
        TypeProfile {
            category: NodeCategory::Application,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 7.5,
            network_segment: "DMZ",
            privileges: &["Service"],
            vulnerabilities: &["Log4j Exposure", "Outdated TLS"],
            security_controls: &["WAF", "Host Firewall"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Public Web Presence",
            data_classification: "Public",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "In transit",
        },
    ),
    (
        "Application Server",
        TypeProfile {
            category: NodeCategory::Application,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 7.0,
            network_segment: "Internal",
            privileges: &["Service"],
            vulnerabilities: &["Log4j Exposure"],
            security_controls: &["Host Firewall", "EDR Agent"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Line-of-Business Applications",
            data_classification: "Internal",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "In transit",
        },
    ),
    (
        "Application",
        TypeProfile {
            category: NodeCategory::Application,
            criticality: Rating::Medium,
            asset_value: Rating::Medium,
            risk_score: 5.0,
            network_segment: "Internal",
            privileges: &["Service"],
            vulnerabilities: &[],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Line-of-Business Applications",
            data_classification: "Internal",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "None",
        },
    ),
    (
        "Database",
        TypeProfile {
            category: NodeCategory::Data,
            criticality: Rating::Critical,
            asset_value: Rating::Critical,
            risk_score: 8.0,
            network_segment: "Internal",
            privileges: &["Service"],
            vulnerabilities: &["SQL Injection Exposure"],
            security_controls: &["Encryption At Rest", "Access Control", "Audit Logging"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Data Persistence",
            data_classification: "Confidential",
            backup_status: "Hourly",
            patch_level: "Current",
            encryption_status: "At rest",
        },
    ),
    (
        "File Server",
        TypeProfile {
            category: NodeCategory::Data,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 6.5,
            network_segment: "Internal",
            privileges: &["Service"],
            vulnerabilities: &["SMB Signing Disabled"],
            security_controls: &["Access Control"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Document Storage",
            data_classification: "Confidential",
            backup_status: "Daily",
            patch_level: "Current minus one",
            encryption_status: "None",
        },
    ),
    (
        "Workstation",
        TypeProfile {
            category: NodeCategory::Infrastructure,
            criticality: Rating::Medium,
            asset_value: Rating::Medium,
            risk_score: 5.0,
            network_segment: "Corporate",
            privileges: &["User"],
            vulnerabilities: &["Phishing Susceptibility", "Unpatched Software"],
            security_controls: &["EDR Agent"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "End-User Computing",
            data_classification: "Internal",
            backup_status: "None",
            patch_level: "Current minus one",
            encryption_status: "Disk",
        },
    ),
    (
        "User Account",
        TypeProfile {
            category: NodeCategory::Identity,
            criticality: Rating::Medium,
            asset_value: Rating::Medium,
            risk_score: 4.0,
            network_segment: "Corporate",
            privileges: &["User"],
            vulnerabilities: &["Weak Password", "Password Reuse"],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Low,
            business_function: "Workforce Identity",
            data_classification: "Internal",
            backup_status: "None",
            patch_level: "N/A",
            encryption_status: "N/A",
        },
    ),
    (
        "Admin Account",
        TypeProfile {
            category: NodeCategory::Identity,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 7.5,
            network_segment: "Corporate",
            privileges: &["User", "Admin"],
            vulnerabilities: &["Credential Theft Target"],
            security_controls: &["MFA"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Privileged Identity",
            data_classification: "Restricted",
            backup_status: "None",
            patch_level: "N/A",
            encryption_status: "N/A",
        },
    ),
    (
        "Service Account",
        TypeProfile {
            category: NodeCategory::Identity,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 6.0,
            network_segment: "Internal",
            privileges: &["Service"],
            vulnerabilities: &["Static Credentials", "Kerberoastable SPN"],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Low,
            business_function: "Application Identity",
            data_classification: "Restricted",
            backup_status: "None",
            patch_level: "N/A",
            encryption_status: "N/A",
        },
    ),
    (
        "Domain Controller",
        TypeProfile {
            category: NodeCategory::Identity,
            criticality: Rating::Critical,
            asset_value: Rating::Critical,
            risk_score: 9.0,
            network_segment: "Management",
            privileges: &["System"],
            vulnerabilities: &["Zerologon Exposure"],
            security_controls: &["EDR Agent", "SIEM Forwarding", "Tiered Administration"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Directory Services",
            data_classification: "Restricted",
            backup_status: "Hourly",
            patch_level: "Current",
            encryption_status: "At rest",
        },
    ),
    (
        "Domain Admin Account",
        TypeProfile {
            category: NodeCategory::Identity,
            criticality: Rating::Critical,
            asset_value: Rating::Critical,
            risk_score: 9.0,
            network_segment: "Management",
            privileges: &["User", "Admin", "Domain Admin"],
            vulnerabilities: &["Credential Theft Target"],
            security_controls: &["MFA", "PAW Enforcement"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Privileged Identity",
            data_classification: "Restricted",
            backup_status: "None",
            patch_level: "N/A",
            encryption_status: "N/A",
        },
    ),
    (
        "Firewall",
        TypeProfile {
            category: NodeCategory::Network,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 6.0,
            network_segment: "DMZ",
            privileges: &["System"],
            vulnerabilities: &[],
            security_controls: &["Config Backup", "Change Control"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Perimeter Defense",
            data_classification: "Internal",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "N/A",
        },
    ),
    (
        "Router",
        TypeProfile {
            category: NodeCategory::Network,
            criticality: Rating::High,
            asset_value: Rating::Medium,
            risk_score: 5.5,
            network_segment: "Internal",
            privileges: &["System"],
            vulnerabilities: &["SNMP Default Community"],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Network Transport",
            data_classification: "Internal",
            backup_status: "Weekly",
            patch_level: "Current minus one",
            encryption_status: "N/A",
        },
    ),
    (
        "Switch",
        TypeProfile {
            category: NodeCategory::Network,
            criticality: Rating::Medium,
            asset_value: Rating::Medium,
            risk_score: 5.0,
            network_segment: "Internal",
            privileges: &["System"],
            vulnerabilities: &[],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Low,
            business_function: "Network Transport",
            data_classification: "Internal",
            backup_status: "Weekly",
            patch_level: "Current minus one",
            encryption_status: "N/A",
        },
    ),
    (
        "VPN Gateway",
        TypeProfile {
            category: NodeCategory::Network,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 7.0,
            network_segment: "DMZ",
            privileges: &["Service"],
            vulnerabilities: &["Unpatched VPN Appliance"],
            security_controls: &["MFA"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Remote Access",
            data_classification: "Internal",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "In transit",
        },
    ),
    (
        "Email Server",
        TypeProfile {
            category: NodeCategory::Application,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 7.0,
            network_segment: "DMZ",
            privileges: &["Service"],
            vulnerabilities: &["ProxyShell Exposure"],
            security_controls: &["Spam Filtering"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Messaging",
            data_classification: "Internal",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "In transit",
        },
    ),
    (
        "Backup Server",
        TypeProfile {
            category: NodeCategory::Infrastructure,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 6.5,
            network_segment: "Management",
            privileges: &["Service"],
            vulnerabilities: &[],
            security_controls: &["Immutable Storage", "Access Control"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Business Continuity",
            data_classification: "Confidential",
            backup_status: "Hourly",
            patch_level: "Current",
            encryption_status: "At rest",
        },
    ),
    (
        "SIEM",
        TypeProfile {
            category: NodeCategory::Security,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 6.0,
            network_segment: "Management",
            privileges: &["Service"],
            vulnerabilities: &[],
            security_controls: &["Access Control", "Audit Logging"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Security Monitoring",
            data_classification: "Restricted",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "At rest",
        },
    ),
    (
        "EDR Platform",
        TypeProfile {
            category: NodeCategory::Security,
            criticality: Rating::High,
            asset_value: Rating::High,
            risk_score: 6.0,
            network_segment: "Management",
            privileges: &["Service"],
            vulnerabilities: &[],
            security_controls: &["Access Control"],
            monitoring_level: MonitoringLevel::High,
            business_function: "Endpoint Defense",
            data_classification: "Restricted",
            backup_status: "Daily",
            patch_level: "Current",
            encryption_status: "In transit",
        },
    ),
    (
        "Vulnerability Scanner",
        TypeProfile {
            category: NodeCategory::Security,
            criticality: Rating::Medium,
            asset_value: Rating::Medium,
            risk_score: 5.0,
            network_segment: "Management",
            privileges: &["Service"],
            vulnerabilities: &[],
            security_controls: &["Access Control"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Security Assessment",
            data_classification: "Internal",
            backup_status: "Weekly",
            patch_level: "Current",
            encryption_status: "N/A",
        },
    ),
    (
        "Cloud Instance",
        TypeProfile {
            category: NodeCategory::Infrastructure,
            criticality: Rating::Medium,
            asset_value: Rating::Medium,
            risk_score: 5.5,
            network_segment: "Cloud",
            privileges: &["Service"],
            vulnerabilities: &["Exposed Management Port"],
            security_controls: &["Cloud Security Groups"],
            monitoring_level: MonitoringLevel::Medium,
            business_function: "Elastic Compute",
            data_classification: "Internal",
            backup_status: "Snapshot",
            patch_level: "Current",
            encryption_status: "At rest",
        },
    ),
    (
        "Threat Actor",
        TypeProfile {
            category: NodeCategory::Threat,
            criticality: Rating::Low,
            asset_value: Rating::Low,
            risk_score: 9.5,
            network_segment: "External",
            privileges: &[],
            vulnerabilities: &[],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Minimal,
            business_function: "N/A",
            data_classification: "N/A",
            backup_status: "None",
            patch_level: "N/A",
            encryption_status: "N/A",
        },
    ),
    (
        "Vulnerability",
        TypeProfile {
            category: NodeCategory::Threat,
            criticality: Rating::Low,
            asset_value: Rating::Low,
            risk_score: 8.5,
            network_segment: "External",
            privileges: &[],
            vulnerabilities: &[],
            security_controls: &[],
            monitoring_level: MonitoringLevel::Minimal,
            business_function: "N/A",
            data_classification: "N/A",
            backup_status: "None",
            patch_level: "N/A",
            encryption_status: "N/A",
        },
    ),
];

/// Look up the profile for a node type, falling back to the conservative
/// default for unknown types.
pub fn profile_for(node_type: &str) -> &'static TypeProfile {
    TYPE_PROFILES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(node_type))
        .map(|(_, profile)| profile)
        .unwrap_or(&DEFAULT_PROFILE)
}

/// Derived relationship attributes for one edge type
pub struct EdgeProfile {
    pub category: EdgeCategory,
    pub difficulty: EdgeDifficulty,
    pub exploit_methods: &'static [&'static str],
    pub prerequisites: &'static [&'static str],
    pub encrypted: bool,
    pub monitored: bool,
    pub risk_level: RiskLevel,
}

pub const DEFAULT_EDGE_PROFILE: EdgeProfile = EdgeProfile {
    category: EdgeCategory::Network,
    difficulty: EdgeDifficulty::Medium,
    exploit_methods: &[],
    prerequisites: &[],
    encrypted: false,
    monitored: false,
    risk_level: RiskLevel::Medium,
};

static EDGE_PROFILES: &[(&str, EdgeProfile)] = &[
    (
        "Network",
        EdgeProfile {
            category: EdgeCategory::Network,
            difficulty: EdgeDifficulty::Medium,
            exploit_methods: &["Network Pivoting"],
            prerequisites: &[],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::Medium,
        },
    ),
    (
        "Access",
        EdgeProfile {
            category: EdgeCategory::Access,
            difficulty: EdgeDifficulty::Low,
            exploit_methods: &["Credential Abuse"],
            prerequisites: &["Valid credentials"],
            encrypted: false,
            monitored: true,
            risk_level: RiskLevel::Medium,
        },
    ),
    (
        "Admin Access",
        EdgeProfile {
            category: EdgeCategory::Access,
            difficulty: EdgeDifficulty::Low,
            exploit_methods: &["Credential Abuse"],
            prerequisites: &["Admin credentials"],
            encrypted: false,
            monitored: true,
            risk_level: RiskLevel::High,
        },
    ),
    (
        "Trust",
        EdgeProfile {
            category: EdgeCategory::Trust,
            difficulty: EdgeDifficulty::Low,
            exploit_methods: &["Trust Exploitation"],
            prerequisites: &[],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::Medium,
        },
    ),
    (
        "Exploit",
        EdgeProfile {
            category: EdgeCategory::Exploit,
            difficulty: EdgeDifficulty::Medium,
            exploit_methods: &["Remote Exploitation"],
            prerequisites: &["Exploitable service"],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::High,
        },
    ),
    (
        "Targets",
        EdgeProfile {
            category: EdgeCategory::Exploit,
            difficulty: EdgeDifficulty::Medium,
            exploit_methods: &["Initial Access Tradecraft"],
            prerequisites: &[],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::High,
        },
    ),
    (
        "Affects",
        EdgeProfile {
            category: EdgeCategory::Exploit,
            difficulty: EdgeDifficulty::Low,
            exploit_methods: &["Vulnerability Exploitation"],
            prerequisites: &[],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::High,
        },
    ),
    (
        "Lateral Movement",
        EdgeProfile {
            category: EdgeCategory::LateralMovement,
            difficulty: EdgeDifficulty::Medium,
            exploit_methods: &["Pass-the-Hash", "Remote Services"],
            prerequisites: &["Foothold on source"],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::High,
        },
    ),
    (
        "Privilege Escalation",
        EdgeProfile {
            category: EdgeCategory::Exploit,
            difficulty: EdgeDifficulty::Medium,
            exploit_methods: &["Privilege Escalation"],
            prerequisites: &["User-level foothold"],
            encrypted: false,
            monitored: false,
            risk_level: RiskLevel::High,
        },
    ),
    (
        "Data Access",
        EdgeProfile {
            category: EdgeCategory::DataFlow,
            difficulty: EdgeDifficulty::Low,
            exploit_methods: &["Data Staging"],
            prerequisites: &["Application-level access"],
            encrypted: true,
            monitored: false,
            risk_level: RiskLevel::Medium,
        },
    ),
    (
        "Data Flow",
        EdgeProfile {
            category: EdgeCategory::DataFlow,
            difficulty: EdgeDifficulty::Low,
            exploit_methods: &[],
            prerequisites: &[],
            encrypted: true,
            monitored: false,
            risk_level: RiskLevel::Medium,
        },
    ),
    (
        "Monitors",
        EdgeProfile {
            category: EdgeCategory::Compliance,
            difficulty: EdgeDifficulty::High,
            exploit_methods: &[],
            prerequisites: &[],
            encrypted: true,
            monitored: true,
            risk_level: RiskLevel::Low,
        },
    ),
    (
        "Protects",
        EdgeProfile {
            category: EdgeCategory::Compliance,
            difficulty: EdgeDifficulty::High,
            exploit_methods: &[],
            prerequisites: &[],
            encrypted: true,
            monitored: true,
            risk_level: RiskLevel::Low,
        },
    ),
];

/// Look up the profile for an edge type, falling back to a plain network
/// relationship for unknown types.
pub fn edge_profile_for(edge_type: &str) -> &'static EdgeProfile {
    EDGE_PROFILES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(edge_type))
        .map(|(_, profile)| profile)
        .unwrap_or(&DEFAULT_EDGE_PROFILE)
}

fn to_string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Derive a `ThreatNode` from a raw node.
///
/// Table values can be overridden per node through the property bag:
/// `criticality`, `asset_value`, `network_segment`, `risk_score`.
pub fn enhance_node(raw: &RawNode) -> ThreatNode {
    let profile = profile_for(&raw.node_type);

    let criticality = raw
        .properties
        .get("criticality")
        .and_then(PropertyValue::as_string)
        .map(Rating::parse_or_medium)
        .unwrap_or(profile.criticality);

    let asset_value = raw
        .properties
        .get("asset_value")
        .and_then(PropertyValue::as_string)
        .map(Rating::parse_or_medium)
        .unwrap_or(profile.asset_value);

    let network_segment = raw
        .properties
        .get("network_segment")
        .and_then(PropertyValue::as_string)
        .unwrap_or(profile.network_segment)
        .to_string();

    let risk_score = raw
        .properties
        .get("risk_score")
        .and_then(PropertyValue::as_float)
        .unwrap_or(profile.risk_score)
        .clamp(0.0, 10.0);

    ThreatNode {
        uid: raw.uid.clone(),
        node_type: raw.node_type.clone(),
        showname: if raw.showname.is_empty() {
            raw.uid.clone()
        } else {
            raw.showname.clone()
        },
        properties: raw.properties.clone(),
        category: profile.category,
        criticality,
        asset_value,
        vulnerabilities: to_string_vec(profile.vulnerabilities),
        privileges: to_string_vec(profile.privileges),
        network_segment,
        security_controls: to_string_vec(profile.security_controls),
        risk_score,
        monitoring_level: profile.monitoring_level,
        business_function: profile.business_function.to_string(),
        data_classification: profile.data_classification.to_string(),
        backup_status: profile.backup_status.to_string(),
        patch_level: profile.patch_level.to_string(),
        encryption_status: profile.encryption_status.to_string(),
        compromise_indicators: Vec::new(),
        suspected_compromised: false,
    }
}

/// Derive a `ThreatEdge` from a raw edge.
///
/// Table values can be overridden per edge through the property bag:
/// `difficulty`, `encrypted`, `monitored`.
pub fn enhance_edge(raw: &RawEdge) -> ThreatEdge {
    let profile = edge_profile_for(&raw.edge_type);

    let difficulty = raw
        .properties
        .get("difficulty")
        .and_then(PropertyValue::as_string)
        .map(EdgeDifficulty::parse_or_medium)
        .unwrap_or(profile.difficulty);

    let encrypted = raw
        .properties
        .get("encrypted")
        .and_then(PropertyValue::as_boolean)
        .unwrap_or(profile.encrypted);

    let monitored = raw
        .properties
        .get("monitored")
        .and_then(PropertyValue::as_boolean)
        .unwrap_or(profile.monitored);

    ThreatEdge {
        from: raw.from.clone(),
        to: raw.to.clone(),
        edge_type: raw.edge_type.clone(),
        properties: raw.properties.clone(),
        category: profile.category,
        difficulty,
        exploit_methods: to_string_vec(profile.exploit_methods),
        prerequisites: to_string_vec(profile.prerequisites),
        encrypted,
        monitored,
        risk_level: profile.risk_level,
    }
}

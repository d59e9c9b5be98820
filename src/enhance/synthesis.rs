//! Synthetic infrastructure injection
//!
//! When enabled, the enhancer extends the real graph with a fixed catalog of
//! infrastructure, identity, security-tooling, data and threat nodes, then
//! wires them to the graph with rule-based connection generators. Every rule
//! bounds its fan-out with an explicit small slice so synthesis stays linear
//! in graph size.

use super::attributes::{enhance_edge, enhance_node};
use crate::graph::types::NodeCategory;
use crate::graph::{RawEdge, RawNode, ThreatEdge, ThreatNode};
use rustc_hash::FxHashSet;
use tracing::debug;

const MAX_TARGETS_PER_ACTOR: usize = 3;
const MAX_AFFECTED_PER_VULN: usize = 5;
const MAX_MONITORED_ASSETS: usize = 10;
const MAX_DATA_SOURCES: usize = 3;
const MAX_DATA_STORES: usize = 3;
const MAX_ADJACENT_PER_SEGMENT: usize = 4;
const MAX_ESCALATION_SOURCES: usize = 3;
const MAX_ESCALATION_TARGETS: usize = 2;

/// (uid, type, showname)
type CatalogEntry = (&'static str, &'static str, &'static str);

static CORE_INFRASTRUCTURE: &[CatalogEntry] = &[
    ("synth-inet-gw", "Router", "Internet Gateway"),
    ("synth-dmz-fw", "Firewall", "DMZ Firewall"),
    ("synth-core-router", "Router", "Core Router"),
    ("synth-core-switch", "Switch", "Core Switch"),
    ("synth-internal-fw", "Firewall", "Internal Firewall"),
    ("synth-web-01", "Web Server", "Public Web Server"),
    ("synth-app-01", "Application Server", "ERP Application Server"),
    ("synth-db-01", "Database", "Customer Database"),
    ("synth-file-01", "File Server", "Corporate File Server"),
    ("synth-dc-01", "Domain Controller", "Primary Domain Controller"),
    ("synth-backup-01", "Backup Server", "Backup Server"),
    ("synth-mail-01", "Email Server", "Mail Gateway"),
    ("synth-vpn-01", "VPN Gateway", "VPN Concentrator"),
];

static IDENTITY: &[CatalogEntry] = &[
    ("synth-ws-01", "Workstation", "Finance Workstation"),
    ("synth-ws-02", "Workstation", "Engineering Workstation"),
    ("synth-ws-03", "Workstation", "Operations Workstation"),
    ("synth-user-alice", "User Account", "Alice (Finance)"),
    ("synth-user-bob", "User Account", "Bob (Engineering)"),
    ("synth-helpdesk", "Admin Account", "Helpdesk Operator"),
    ("synth-svc-backup", "Service Account", "svc-backup"),
    ("synth-domain-admin", "Domain Admin Account", "Domain Admin"),
];

static SECURITY_TOOLING: &[CatalogEntry] = &[
    ("synth-siem", "SIEM", "Central SIEM"),
    ("synth-edr", "EDR Platform", "EDR Console"),
    ("synth-scanner", "Vulnerability Scanner", "Vulnerability Scanner"),
];

static DATA_ASSETS: &[CatalogEntry] = &[
    ("synth-db-fin", "Database", "Financial Database"),
    ("synth-share-hr", "File Server", "HR File Share"),
    ("synth-repo", "Application", "Source Code Repository"),
];

static THREAT_ACTORS: &[CatalogEntry] = &[
    ("synth-apt", "Threat Actor", "External APT Group"),
    ("synth-ransom", "Threat Actor", "Ransomware Operator"),
    ("synth-insider", "Threat Actor", "Disgruntled Insider"),
    ("synth-skiddie", "Threat Actor", "Opportunistic Scanner"),
];

static VULN_INTEL: &[CatalogEntry] = &[
    ("synth-cve-log4j", "Vulnerability", "Log4j RCE (CVE-2021-44228)"),
    ("synth-cve-proxyshell", "Vulnerability", "ProxyShell (CVE-2021-34473)"),
    ("synth-cve-eternalblue", "Vulnerability", "EternalBlue (CVE-2017-0144)"),
    ("synth-cve-zerologon", "Vulnerability", "Zerologon (CVE-2020-1472)"),
];

/// Vulnerability identifier keyword -> affected node types
static VULN_AFFECTS: &[(&str, &[&str])] = &[
    ("log4j", &["Web Server", "Application Server"]),
    ("proxyshell", &["Email Server"]),
    ("eternalblue", &["Workstation", "File Server", "Server"]),
    ("zerologon", &["Domain Controller"]),
];

/// Host types that participate in same-segment lateral adjacency
static LATERAL_HOST_TYPES: &[&str] = &[
    "Workstation",
    "Server",
    "Application Server",
    "Web Server",
    "File Server",
    "Database",
];

struct EdgeSink {
    edges: Vec<ThreatEdge>,
    seen: FxHashSet<(String, String, String)>,
    uids: FxHashSet<String>,
}

impl EdgeSink {
    fn new(nodes: &[ThreatNode], existing: &[ThreatEdge]) -> Self {
        let uids = nodes.iter().map(|n| n.uid.clone()).collect();
        let seen = existing
            .iter()
            .map(|e| (e.from.clone(), e.to.clone(), e.edge_type.clone()))
            .collect();
        EdgeSink { edges: Vec::new(), seen, uids }
    }

    fn add(&mut self, from: &str, to: &str, edge_type: &str) {
        if from == to || !self.uids.contains(from) || !self.uids.contains(to) {
            return;
        }
        let key = (from.to_string(), to.to_string(), edge_type.to_string());
        if self.seen.insert(key) {
            self.edges
                .push(enhance_edge(&RawEdge::new(from, to, edge_type)));
        }
    }
}

/// Inject the synthetic catalogs and wire them (and the real graph) with the
/// rule-based connection generators. Appends to the given collections.
pub fn synthesize(nodes: &mut Vec<ThreatNode>, edges: &mut Vec<ThreatEdge>) {
    let before_nodes = nodes.len();
    let before_edges = edges.len();

    let existing: FxHashSet<String> = nodes.iter().map(|n| n.uid.clone()).collect();
    for catalog in [
        CORE_INFRASTRUCTURE,
        IDENTITY,
        SECURITY_TOOLING,
        DATA_ASSETS,
        THREAT_ACTORS,
        VULN_INTEL,
    ] {
        for (uid, node_type, showname) in catalog {
            if !existing.contains(*uid) {
                nodes.push(enhance_node(&RawNode::new(*uid, *node_type, *showname)));
            }
        }
    }

    let mut sink = EdgeSink::new(nodes, edges);
    connect_core_topology(&mut sink);
    connect_identity(nodes, &mut sink);
    connect_threat_actors(nodes, &mut sink);
    connect_vulnerabilities(nodes, &mut sink);
    connect_monitoring(nodes, &mut sink);
    connect_data_access(nodes, &mut sink);
    connect_adjacency(nodes, &mut sink);
    edges.extend(sink.edges);

    debug!(
        synthesized_nodes = nodes.len() - before_nodes,
        synthesized_edges = edges.len() - before_edges,
        "synthetic infrastructure injected"
    );
}

/// Perimeter-to-core network chain plus segment attachments
fn connect_core_topology(sink: &mut EdgeSink) {
    let chain = [
        ("synth-inet-gw", "synth-dmz-fw"),
        ("synth-dmz-fw", "synth-core-router"),
        ("synth-core-router", "synth-core-switch"),
        ("synth-core-switch", "synth-internal-fw"),
    ];
    for (from, to) in chain {
        sink.add(from, to, "Network");
    }

    for dmz_host in ["synth-web-01", "synth-mail-01", "synth-vpn-01"] {
        sink.add("synth-dmz-fw", dmz_host, "Network");
    }
    for internal_host in [
        "synth-app-01",
        "synth-db-01",
        "synth-file-01",
        "synth-dc-01",
        "synth-backup-01",
    ] {
        sink.add("synth-internal-fw", internal_host, "Network");
    }
    for workstation in ["synth-ws-01", "synth-ws-02", "synth-ws-03"] {
        sink.add("synth-core-switch", workstation, "Network");
    }

    // Three-tier application path
    sink.add("synth-web-01", "synth-app-01", "Network");
    sink.add("synth-app-01", "synth-db-01", "Network");
}

/// Identity trust and administrative-access edges
fn connect_identity(nodes: &[ThreatNode], sink: &mut EdgeSink) {
    let users = uids_where(nodes, |n| n.is_user_account());
    let workstations = uids_where(nodes, |n| n.is_workstation());
    let admins = uids_where(nodes, |n| n.type_is("Admin Account"));
    let domain_admins = uids_where(nodes, |n| n.type_is("Domain Admin Account"));
    let domain_controllers = uids_where(nodes, |n| n.is_domain_controller());
    let service_accounts = uids_where(nodes, |n| n.type_is("Service Account"));
    let backup_servers = uids_where(nodes, |n| n.type_is("Backup Server"));

    for (user, workstation) in users.iter().zip(workstations.iter()).take(3) {
        sink.add(user, workstation, "Access");
    }
    for admin in admins.iter().take(1) {
        for workstation in workstations.iter().take(3) {
            sink.add(admin, workstation, "Admin Access");
        }
    }
    for domain_admin in domain_admins.iter().take(2) {
        for dc in domain_controllers.iter().take(2) {
            sink.add(domain_admin, dc, "Admin Access");
        }
    }
    for service_account in service_accounts.iter().take(2) {
        for backup in backup_servers.iter().take(2) {
            sink.add(service_account, backup, "Access");
        }
    }
}

/// Threat actors target externally-facing systems
fn connect_threat_actors(nodes: &[ThreatNode], sink: &mut EdgeSink) {
    let actors = uids_where(nodes, |n| n.type_is("Threat Actor"));
    let exposed = uids_where(nodes, |n| {
        n.category != NodeCategory::Threat && n.is_externally_facing()
    });

    for actor in &actors {
        for target in exposed.iter().take(MAX_TARGETS_PER_ACTOR) {
            sink.add(actor, target, "Targets");
        }
    }
}

/// Vulnerability nodes affect systems keyed by identifier substring
fn connect_vulnerabilities(nodes: &[ThreatNode], sink: &mut EdgeSink) {
    let vulns: Vec<(String, String)> = nodes
        .iter()
        .filter(|n| n.type_is("Vulnerability"))
        .map(|n| {
            let key = format!("{} {}", n.showname, n.uid).to_ascii_lowercase();
            (n.uid.clone(), key)
        })
        .collect();

    for (vuln_uid, key) in &vulns {
        for (keyword, affected_types) in VULN_AFFECTS {
            if !key.contains(*keyword) {
                continue;
            }
            let affected = uids_where(nodes, |n| {
                affected_types.iter().any(|&t| n.type_is(t))
            });
            for target in affected.iter().take(MAX_AFFECTED_PER_VULN) {
                sink.add(vuln_uid, target, "Affects");
            }
        }
    }
}

/// Monitoring/protection coverage from security tooling to a bounded
/// sample of assets
fn connect_monitoring(nodes: &[ThreatNode], sink: &mut EdgeSink) {
    let assets = uids_where(nodes, |n| {
        !matches!(n.category, NodeCategory::Security | NodeCategory::Threat)
    });

    for siem in uids_where(nodes, |n| n.type_is("SIEM")) {
        for asset in assets.iter().take(MAX_MONITORED_ASSETS) {
            sink.add(&siem, asset, "Monitors");
        }
    }
    for edr in uids_where(nodes, |n| n.type_is("EDR Platform")) {
        for asset in assets.iter().take(MAX_MONITORED_ASSETS) {
            sink.add(&edr, asset, "Protects");
        }
    }
}

/// Applications and users read from databases and file shares
fn connect_data_access(nodes: &[ThreatNode], sink: &mut EdgeSink) {
    let apps = uids_where(nodes, |n| {
        n.type_is("Application") || n.type_is("Application Server") || n.type_is("Web Server")
    });
    let users = uids_where(nodes, |n| n.is_user_account());
    let stores = uids_where(nodes, |n| n.is_data_store());

    for app in apps.iter().take(MAX_DATA_SOURCES) {
        for store in stores.iter().take(MAX_DATA_STORES) {
            sink.add(app, store, "Data Access");
        }
    }
    for user in users.iter().take(MAX_DATA_SOURCES) {
        for store in stores.iter().take(MAX_DATA_STORES) {
            sink.add(user, store, "Data Access");
        }
    }
}

/// Same-segment lateral-movement adjacency between hosts, and
/// privilege-escalation adjacency from low-privilege to admin accounts
fn connect_adjacency(nodes: &[ThreatNode], sink: &mut EdgeSink) {
    let mut segments: Vec<(&str, Vec<&str>)> = Vec::new();
    for node in nodes {
        if !LATERAL_HOST_TYPES.iter().any(|&t| node.type_is(t)) {
            continue;
        }
        match segments
            .iter_mut()
            .find(|(segment, _)| *segment == node.network_segment.as_str())
        {
            Some((_, members)) => members.push(node.uid.as_str()),
            None => segments.push((node.network_segment.as_str(), vec![node.uid.as_str()])),
        }
    }

    for (_, members) in &segments {
        let bounded = &members[..members.len().min(MAX_ADJACENT_PER_SEGMENT)];
        for &a in bounded {
            for &b in bounded {
                if a != b {
                    sink.add(a, b, "Lateral Movement");
                }
            }
        }
    }

    let low_privilege = uids_where(nodes, |n| {
        n.category == NodeCategory::Identity && n.is_user_level()
    });
    let privileged = uids_where(nodes, |n| {
        n.category == NodeCategory::Identity && n.is_privileged()
    });
    for source in low_privilege.iter().take(MAX_ESCALATION_SOURCES) {
        for target in privileged.iter().take(MAX_ESCALATION_TARGETS) {
            sink.add(source, target, "Privilege Escalation");
        }
    }
}

fn uids_where(nodes: &[ThreatNode], predicate: impl Fn(&ThreatNode) -> bool) -> Vec<String> {
    nodes
        .iter()
        .filter(|n| predicate(n))
        .map(|n| n.uid.clone())
        .collect()
}

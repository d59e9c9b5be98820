//! Path primitives driven through the domain layer: difficulty-derived
//! weights, escalation-aware re-weighting, enumeration invariants

use breachpath::algo::{build_view, WeightScheme};
use breachpath::enhance::attributes::{enhance_edge, enhance_node};
use breachpath::graph::{RawEdge, RawNode, ThreatGraph};
use std::collections::HashSet;

fn server_graph(uids: &[&str], edges: Vec<RawEdge>) -> ThreatGraph {
    let nodes = uids
        .iter()
        .map(|uid| enhance_node(&RawNode::new(*uid, "Server", *uid)))
        .collect();
    ThreatGraph::new(nodes, edges.iter().map(enhance_edge).collect())
}

fn network_edge(from: &str, to: &str, difficulty: &str) -> RawEdge {
    RawEdge::new(from, to, "Network").with_property("difficulty", difficulty)
}

/// Brute-force enumeration of every simple path between two nodes.
fn all_simple_paths(graph: &ThreatGraph, start: &str, target: &str) -> Vec<Vec<String>> {
    fn walk(
        graph: &ThreatGraph,
        current: &str,
        target: &str,
        path: &mut Vec<String>,
        out: &mut Vec<Vec<String>>,
    ) {
        if current == target {
            out.push(path.clone());
            return;
        }
        for edge in graph.edges() {
            if edge.from == current && !path.iter().any(|uid| *uid == edge.to) {
                path.push(edge.to.clone());
                walk(graph, &edge.to, target, path, out);
                path.pop();
            }
        }
    }

    let mut out = Vec::new();
    let mut path = vec![start.to_string()];
    walk(graph, start, target, &mut path, &mut out);
    out
}

fn path_weight(graph: &ThreatGraph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| graph.edge_between(&pair[0], &pair[1]).unwrap().weight())
        .sum()
}

#[test]
fn shortest_path_matches_brute_force_minimum() {
    // a -> b (Low) -> d (Low) beats a -> d (High) and a -> c (High) -> d (Low)
    let graph = server_graph(
        &["a", "b", "c", "d", "e"],
        vec![
            network_edge("a", "b", "Low"),
            network_edge("b", "d", "Low"),
            network_edge("a", "c", "High"),
            network_edge("c", "d", "Low"),
            network_edge("a", "d", "High"),
            network_edge("b", "c", "Medium"),
            network_edge("d", "e", "Medium"),
        ],
    );
    let view = build_view(&graph, WeightScheme::Standard);

    for target in ["b", "c", "d", "e"] {
        let found = view.shortest_path("a", target).unwrap();
        let found_weight = path_weight(&graph, &found);
        let best = all_simple_paths(&graph, "a", target)
            .iter()
            .map(|p| path_weight(&graph, p))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(
            found_weight, best,
            "path to {} costs {} but the optimum is {}",
            target, found_weight, best
        );
    }
}

#[test]
fn escalation_scheme_leaves_plain_edges_untouched() {
    // No escalation edges anywhere: both schemes must agree
    let graph = server_graph(
        &["a", "b", "c"],
        vec![
            network_edge("a", "b", "Low"),
            network_edge("b", "c", "Low"),
            network_edge("a", "c", "High"),
        ],
    );
    let standard = build_view(&graph, WeightScheme::Standard);
    let escalation = build_view(&graph, WeightScheme::EscalationAware);
    assert_eq!(
        standard.shortest_path("a", "c"),
        escalation.shortest_path("a", "c")
    );
}

#[test]
fn enumeration_respects_hop_bound_and_never_repeats_nodes() {
    // Cycle plus a branch; enumeration must terminate and stay simple
    let graph = server_graph(
        &["a", "b", "c", "d"],
        vec![
            RawEdge::new("a", "b", "Network"),
            RawEdge::new("b", "c", "Network"),
            RawEdge::new("c", "a", "Network"),
            RawEdge::new("b", "d", "Network"),
        ],
    );
    let view = build_view(&graph, WeightScheme::Standard);

    let paths = view.enumerate("a", 2);
    assert!(!paths.is_empty());
    for path in &paths {
        assert!(path.len() >= 2, "trivial path {:?}", path);
        assert!(path.len() - 1 <= 2, "over the hop bound: {:?}", path);
        let unique: HashSet<&String> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "repeated node in {:?}", path);
    }
}

#[test]
fn enumeration_expands_each_node_once() {
    // Diamond: d is reachable through b and c, but only the first route
    // to expand d survives the walk
    let graph = server_graph(
        &["a", "b", "c", "d"],
        vec![
            RawEdge::new("a", "b", "Network"),
            RawEdge::new("a", "c", "Network"),
            RawEdge::new("b", "d", "Network"),
            RawEdge::new("c", "d", "Network"),
        ],
    );
    let view = build_view(&graph, WeightScheme::Standard);

    let paths = view.enumerate("a", 6);
    let routes_to_d: Vec<&Vec<String>> = paths
        .iter()
        .filter(|p| p.last().map(String::as_str) == Some("d"))
        .collect();
    assert_eq!(routes_to_d.len(), 1);
}

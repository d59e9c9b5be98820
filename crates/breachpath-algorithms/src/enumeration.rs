//! Bounded breadth-first path enumeration

use super::common::GraphView;
use std::collections::VecDeque;

/// Enumerate simple paths from `start`, breadth-first, up to `max_hops` edges.
///
/// Two visited checks apply:
/// - a partial path never revisits a node it already contains, so every
///   returned path is duplicate-free;
/// - a node expanded once is never expanded again for the rest of the walk,
///   so alternative routes through an already-expanded node are not emitted.
///   The enumeration therefore yields a tree of paths rooted at `start`,
///   not the full set of simple paths.
///
/// Single-node (trivial) paths are excluded from the output.
pub fn enumerate_paths(view: &GraphView, start: usize, max_hops: usize) -> Vec<Vec<usize>> {
    let mut results = Vec::new();
    if start >= view.node_count || max_hops == 0 {
        return results;
    }

    let mut expanded = vec![false; view.node_count];
    expanded[start] = true;

    let mut frontier: VecDeque<Vec<usize>> = VecDeque::new();
    frontier.push_back(vec![start]);

    while let Some(path) = frontier.pop_front() {
        if path.len() > 1 {
            results.push(path.clone());
        }

        // Hop count is edges, not nodes
        if path.len() - 1 >= max_hops {
            continue;
        }

        let last = path[path.len() - 1];
        for &next in view.successors(last) {
            if path.contains(&next) || expanded[next] {
                continue;
            }
            expanded[next] = true;

            let mut extended = path.clone();
            extended.push(next);
            frontier.push_back(extended);
        }
    }

    results
}

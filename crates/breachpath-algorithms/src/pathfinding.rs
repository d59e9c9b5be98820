//! Weighted single-source single-target shortest path

use super::common::GraphView;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Result of a pathfinding run
#[derive(Debug, Clone)]
pub struct PathResult {
    pub source: usize,
    pub target: usize,
    pub path: Vec<usize>,
    pub cost: f64,
}

/// State for the Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm over a weighted directed view.
///
/// Uses edge weights from the view if available, otherwise assumes 1.0.
/// Returns `None` when the target is unreachable; among equal-cost paths
/// the returned one is arbitrary but always weight-optimal.
pub fn dijkstra(view: &GraphView, source: usize, target: usize) -> Option<PathResult> {
    if source >= view.node_count || target >= view.node_count {
        return None;
    }

    let mut dist = HashMap::new();
    let mut parent: HashMap<usize, usize> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(State { cost: 0.0, node_idx: source });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if node_idx == target {
            // Reconstruct path
            let mut path = vec![target];
            let mut curr = target;
            while let Some(&prev) = parent.get(&curr) {
                path.push(prev);
                curr = prev;
            }
            path.reverse();
            return Some(PathResult { source, target, path, cost });
        }

        if cost > *dist.get(&node_idx).unwrap_or(&f64::INFINITY) {
            continue;
        }

        let edges = view.successors(node_idx);
        let weights = view.edge_weights(node_idx);

        for (i, &next_idx) in edges.iter().enumerate() {
            let weight = weights.map_or(1.0, |w| w[i]);
            if weight < 0.0 {
                continue;
            }

            let next_cost = cost + weight;
            if next_cost < *dist.get(&next_idx).unwrap_or(&f64::INFINITY) {
                dist.insert(next_idx, next_cost);
                parent.insert(next_idx, node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        // 0 -> 1 (10.0), 1 -> 2 (5.0), 0 -> 2 (50.0)
        let view = GraphView::from_adjacency_list(
            3,
            vec![vec![1, 2], vec![2], vec![]],
            Some(vec![vec![10.0, 50.0], vec![5.0], vec![]]),
        );

        let result = dijkstra(&view, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 15.0);
    }

    #[test]
    fn test_dijkstra_direct_when_cheaper() {
        // 0 -> 1 (10.0), 1 -> 2 (5.0), 0 -> 2 (2.0)
        let view = GraphView::from_adjacency_list(
            3,
            vec![vec![1, 2], vec![2], vec![]],
            Some(vec![vec![10.0, 2.0], vec![5.0], vec![]]),
        );

        let result = dijkstra(&view, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 2]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        // 0 -> 1, 2 isolated
        let view = GraphView::from_adjacency_list(3, vec![vec![1], vec![], vec![]], None);
        assert!(dijkstra(&view, 0, 2).is_none());
    }

    #[test]
    fn test_dijkstra_source_is_target() {
        let view = GraphView::from_adjacency_list(2, vec![vec![1], vec![]], None);
        let result = dijkstra(&view, 0, 0).unwrap();
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_dijkstra_unweighted_counts_hops() {
        // 0 -> 1 -> 2 -> 3
        let view =
            GraphView::from_adjacency_list(4, vec![vec![1], vec![2], vec![3], vec![]], None);
        let result = dijkstra(&view, 0, 3).unwrap();
        assert_eq!(result.path, vec![0, 1, 2, 3]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_dijkstra_out_of_range_indices() {
        let view = GraphView::from_adjacency_list(2, vec![vec![1], vec![]], None);
        assert!(dijkstra(&view, 0, 7).is_none());
        assert!(dijkstra(&view, 7, 0).is_none());
    }
}

//! Shortest paths over an adjacency-map graph (Dijkstra).
//!
//! Example graph (inner maps hold edge costs):
//!
//! ```text
//! a: {w: 14, x: 7, y: 9}
//! b: {w: 9, z: 6}
//! w: {a: 14, b: 9, y: 2}
//! x: {a: 7, y: 10, z: 15}
//! y: {a: 9, w: 2, x: 10, z: 11}
//! z: {b: 6, x: 15, y: 11}
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use rayon::prelude::*;
use tracing::debug;

/// Node id → neighbor id → edge cost. Costs must be non-negative.
pub type Graph<N> = HashMap<N, HashMap<N, f64>>;

#[derive(Debug, Clone, PartialEq)]
pub enum PathResult<N> {
    Found { cost: f64, path: Vec<N> },
    NotFound,
}

impl<N> PathResult<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    pub fn cost(&self) -> Option<f64> {
        match self {
            PathResult::Found { cost, .. } => Some(*cost),
            PathResult::NotFound => None,
        }
    }

    pub fn path(&self) -> Option<&[N]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound => None,
        }
    }
}

// Heap entry: reversed ordering so BinaryHeap pops the cheapest, then the
// smallest node id.
struct Candidate<N> {
    cost: f64,
    node: N,
}

impl<N: Ord> Ord for Candidate<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for Candidate<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for Candidate<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Candidate<N> {}

/// Find the cheapest path from `start` to `end`.
///
/// Nodes are settled in increasing order of accumulated cost and never
/// expanded twice. Which of several equal-cost paths is returned is not
/// specified.
pub fn find_shortest_path<N>(graph: &Graph<N>, start: &N, end: &N) -> PathResult<N>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut best: HashMap<N, f64> = HashMap::new();
    let mut predecessor: HashMap<N, N> = HashMap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut queue = BinaryHeap::new();

    best.insert(start.clone(), 0.0);
    queue.push(Candidate {
        cost: 0.0,
        node: start.clone(),
    });

    while let Some(Candidate { cost, node }) = queue.pop() {
        if !settled.insert(node.clone()) {
            continue;
        }

        if &node == end {
            return PathResult::Found {
                cost,
                path: walk_back(&predecessor, node),
            };
        }

        let Some(neighbors) = graph.get(&node) else {
            continue;
        };

        for (neighbor, edge_cost) in neighbors {
            if settled.contains(neighbor) {
                continue;
            }
            let candidate_cost = cost + edge_cost;
            let improves = best
                .get(neighbor)
                .is_none_or(|known| candidate_cost < *known);
            if improves {
                best.insert(neighbor.clone(), candidate_cost);
                predecessor.insert(neighbor.clone(), node.clone());
                queue.push(Candidate {
                    cost: candidate_cost,
                    node: neighbor.clone(),
                });
            }
        }
    }

    debug!(settled = settled.len(), "search exhausted without reaching target");
    PathResult::NotFound
}

/// Answer a batch of `(start, end)` queries in parallel.
///
/// Results are returned in query order.
pub fn find_shortest_paths<N>(graph: &Graph<N>, pairs: &[(N, N)]) -> Vec<PathResult<N>>
where
    N: Clone + Eq + Hash + Ord + Send + Sync,
{
    pairs
        .par_iter()
        .map(|(start, end)| find_shortest_path(graph, start, end))
        .collect()
}

fn walk_back<N>(predecessor: &HashMap<N, N>, end: N) -> Vec<N>
where
    N: Clone + Eq + Hash,
{
    let mut path = vec![end];
    while let Some(prev) = path.last().and_then(|node| predecessor.get(node)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(&'static str, &'static str, f64)]) -> Graph<&'static str> {
        let mut graph: Graph<&'static str> = HashMap::new();
        for &(from, to, cost) in edges {
            graph.entry(from).or_default().insert(to, cost);
        }
        graph
    }

    #[test]
    fn test_direct_edge() {
        let graph = graph_of(&[("a", "b", 3.0)]);
        let result = find_shortest_path(&graph, &"a", &"b");
        assert_eq!(
            result,
            PathResult::Found {
                cost: 3.0,
                path: vec!["a", "b"]
            }
        );
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let graph = graph_of(&[("a", "c", 10.0), ("a", "b", 2.0), ("b", "c", 3.0)]);
        let result = find_shortest_path(&graph, &"a", &"c");
        assert_eq!(result.cost(), Some(5.0));
        assert_eq!(result.path(), Some(&["a", "b", "c"][..]));
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let graph = graph_of(&[("a", "b", 1.0)]);
        assert_eq!(find_shortest_path(&graph, &"b", &"a"), PathResult::NotFound);
    }

    #[test]
    fn test_target_without_outgoing_edges() {
        // "z" never appears as a key.
        let graph = graph_of(&[("a", "z", 4.0)]);
        assert_eq!(find_shortest_path(&graph, &"a", &"z").cost(), Some(4.0));
    }

    #[test]
    fn test_start_missing_from_graph() {
        let graph = graph_of(&[("a", "b", 1.0)]);
        assert_eq!(find_shortest_path(&graph, &"q", &"b"), PathResult::NotFound);
    }

    #[test]
    fn test_zero_cost_edges() {
        let graph = graph_of(&[("a", "b", 0.0), ("b", "c", 0.0)]);
        let result = find_shortest_path(&graph, &"a", &"c");
        assert_eq!(result.cost(), Some(0.0));
        assert_eq!(result.path().map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_candidate_ordering_pops_cheapest_then_smallest() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate { cost: 2.0, node: 1 });
        heap.push(Candidate { cost: 1.0, node: 9 });
        heap.push(Candidate { cost: 1.0, node: 4 });
        let order: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|c| c.node)).collect();
        assert_eq!(order, vec![4, 9, 1]);
    }
}

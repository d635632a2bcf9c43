//! Sample network data shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use mhn_network::graph::Graph;
use mhn_network::traits::{ItinSegment, MeasuredSegment, TimedSegment};

// ============================================================================
// Graphs
// ============================================================================

/// Six-node undirected graph. Shortest a -> b is a, y, w, b at cost 20.
pub fn six_node_graph() -> Graph<&'static str> {
    let edges = [
        ("a", "w", 14.0),
        ("a", "x", 7.0),
        ("a", "y", 9.0),
        ("b", "w", 9.0),
        ("b", "z", 6.0),
        ("w", "y", 2.0),
        ("x", "y", 10.0),
        ("x", "z", 15.0),
        ("y", "z", 11.0),
    ];
    undirected(&edges)
}

/// Two components: {a, b} and {c, d}.
pub fn split_graph() -> Graph<&'static str> {
    undirected(&[("a", "b", 1.0), ("c", "d", 1.0)])
}

pub fn undirected(edges: &[(&'static str, &'static str, f64)]) -> Graph<&'static str> {
    let mut graph: Graph<&'static str> = HashMap::new();
    for &(from, to, cost) in edges {
        graph.entry(from).or_default().insert(to, cost);
        graph.entry(to).or_default().insert(from, cost);
    }
    graph
}

/// Sum the edge costs along `path`, panicking if an edge is missing.
pub fn path_cost<N>(graph: &Graph<N>, path: &[N]) -> f64
where
    N: std::hash::Hash + Eq + std::fmt::Debug,
{
    path.windows(2)
        .map(|pair| {
            *graph
                .get(&pair[0])
                .and_then(|neighbors| neighbors.get(&pair[1]))
                .unwrap_or_else(|| panic!("no edge {:?} -> {:?}", pair[0], pair[1]))
        })
        .sum()
}

// ============================================================================
// Itinerary segments with numeric ids
// ============================================================================

/// Segment keyed by numeric route and link ids.
#[derive(Clone, Debug, PartialEq)]
pub struct TestSegment {
    pub route: u32,
    pub order: u32,
    pub link: u64,
    pub measures: (f64, f64),
    pub dep: i64,
    pub arr: i64,
    pub minutes: f64,
}

impl TestSegment {
    pub fn new(route: u32, order: u32, link: u64) -> Self {
        Self {
            route,
            order,
            link,
            measures: (-1.0, -1.0),
            dep: 0,
            arr: 0,
            minutes: 0.0,
        }
    }

    pub fn times(mut self, dep: i64, arr: i64, minutes: f64) -> Self {
        self.dep = dep;
        self.arr = arr;
        self.minutes = minutes;
        self
    }
}

impl ItinSegment for TestSegment {
    type RouteId = u32;
    type LinkId = u64;

    fn route_id(&self) -> &u32 {
        &self.route
    }

    fn itin_order(&self) -> u32 {
        self.order
    }

    fn link_id(&self) -> &u64 {
        &self.link
    }
}

impl MeasuredSegment for TestSegment {
    fn measures(&self) -> (f64, f64) {
        self.measures
    }

    fn set_measures(&mut self, from_measure: f64, to_measure: f64) {
        self.measures = (from_measure, to_measure);
    }
}

impl TimedSegment for TestSegment {
    fn departure_time(&self) -> i64 {
        self.dep
    }

    fn arrival_time(&self) -> i64 {
        self.arr
    }

    fn line_serv_time(&self) -> f64 {
        self.minutes
    }

    fn set_times(&mut self, departure_time: i64, arrival_time: i64, line_serv_time: f64) {
        self.dep = departure_time;
        self.arr = arrival_time;
        self.minutes = line_serv_time;
    }
}

/// Link lengths keyed by link id.
pub fn link_miles(entries: &[(u64, f64)]) -> HashMap<u64, f64> {
    entries.iter().copied().collect()
}

//! Shortest-path search over weighted, undirected graphs addressed by index.
//!
//! The graph contract is deliberately minimal: nodes and edges are dense
//! `usize` ids and the only query is the edge fan-out of a node. That keeps
//! the solver independent of how the caller stores orbits and manoeuvres.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One traversable edge as seen from a particular node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef {
    /// Edge id, stable across the graph.
    pub edge: usize,
    /// Node on the other end of the edge.
    pub other: usize,
    /// Non-negative traversal cost.
    pub weight: f64,
}

/// A graph that Dijkstra's algorithm can run over.
pub trait CostGraph {
    /// Number of nodes; node ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Every edge incident on `node`.
    fn edges_from(&self, node: usize) -> Vec<EdgeRef>;
}

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Sum of the true edge weights along the path (routing bias excluded).
    pub total_weight: f64,
    /// Visited nodes in order, starting at the search origin.
    pub nodes: Vec<usize>,
    /// Traversed edges in order; one fewer entry than `nodes`.
    pub edges: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: f64,
    node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the cheapest entry first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path from `start` to `target` with Dijkstra's algorithm.
///
/// `edge_bias` is a virtual cost added per traversed edge while comparing
/// candidate routes. It steers the search towards paths with fewer legs when
/// several routes are otherwise equal, but never shows up in the returned
/// `total_weight`.
///
/// Returns `None` when `target` cannot be reached from `start`, or when
/// either id is out of range.
pub fn shortest_path(
    graph: &dyn CostGraph,
    start: usize,
    target: usize,
    edge_bias: f64,
) -> Option<Path> {
    let n = graph.node_count();
    if start >= n || target >= n {
        return None;
    }
    if start == target {
        return Some(Path {
            total_weight: 0.0,
            nodes: vec![start],
            edges: Vec::new(),
        });
    }

    let mut best = vec![f64::INFINITY; n];
    let mut discovered_through: Vec<Option<(usize, usize)>> = vec![None; n]; // (edge, previous node)
    let mut settled = vec![false; n];
    let mut queue = BinaryHeap::new();

    best[start] = 0.0;
    queue.push(QueueEntry {
        cost: 0.0,
        node: start,
    });

    while let Some(QueueEntry { cost, node }) = queue.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if node == target {
            break;
        }
        for edge in graph.edges_from(node) {
            if settled[edge.other] {
                continue;
            }
            let candidate = cost + edge.weight + edge_bias;
            if candidate < best[edge.other] {
                best[edge.other] = candidate;
                discovered_through[edge.other] = Some((edge.edge, node));
                queue.push(QueueEntry {
                    cost: candidate,
                    node: edge.other,
                });
            }
        }
    }

    if !settled[target] {
        return None;
    }

    // Walk back from the target, then flip into forward order.
    let mut nodes = vec![target];
    let mut edges = Vec::new();
    let mut cursor = target;
    while cursor != start {
        let (edge, previous) = discovered_through[cursor]?;
        edges.push(edge);
        nodes.push(previous);
        cursor = previous;
    }
    nodes.reverse();
    edges.reverse();

    let total_weight = {
        // Re-sum true weights so the bias never leaks into the reported cost.
        let mut total = 0.0;
        for window in nodes.windows(2).zip(&edges) {
            let (pair, &edge_id) = window;
            let from = pair[0];
            total += graph
                .edges_from(from)
                .into_iter()
                .find(|e| e.edge == edge_id)
                .map(|e| e.weight)
                .unwrap_or(0.0);
        }
        total
    };

    Some(Path {
        total_weight,
        nodes,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::{CostGraph, EdgeRef, shortest_path};

    /// Adjacency-list fixture: undirected edges as (a, b, weight).
    struct Fixture {
        nodes: usize,
        edges: Vec<(usize, usize, f64)>,
    }

    impl CostGraph for Fixture {
        fn node_count(&self) -> usize {
            self.nodes
        }

        fn edges_from(&self, node: usize) -> Vec<EdgeRef> {
            self.edges
                .iter()
                .enumerate()
                .filter_map(|(id, &(a, b, weight))| {
                    if a == node {
                        Some(EdgeRef {
                            edge: id,
                            other: b,
                            weight,
                        })
                    } else if b == node {
                        Some(EdgeRef {
                            edge: id,
                            other: a,
                            weight,
                        })
                    } else {
                        None
                    }
                })
                .collect()
        }
    }

    #[test]
    fn finds_the_cheaper_of_two_routes() {
        let graph = Fixture {
            nodes: 4,
            edges: vec![(0, 1, 1.0), (1, 3, 1.0), (0, 2, 5.0), (2, 3, 5.0)],
        };
        let path = shortest_path(&graph, 0, 3, 0.0).expect("path exists");
        assert!((path.total_weight - 2.0).abs() < 1e-12);
        assert_eq!(path.nodes, vec![0, 1, 3]);
        assert_eq!(path.edges, vec![0, 1]);
    }

    #[test]
    fn edge_bias_prefers_fewer_legs_but_reports_true_weight() {
        // 0->3 directly costs 2.0; 0->1->2->3 also costs 2.0 in three legs.
        let graph = Fixture {
            nodes: 4,
            edges: vec![
                (0, 3, 2.0),
                (0, 1, 1.0),
                (1, 2, 0.5),
                (2, 3, 0.5),
            ],
        };
        let path = shortest_path(&graph, 0, 3, 5.0).expect("path exists");
        assert_eq!(path.edges, vec![0], "bias should pick the single-leg route");
        assert!((path.total_weight - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unreachable_target_yields_none() {
        let graph = Fixture {
            nodes: 3,
            edges: vec![(0, 1, 1.0)],
        };
        assert!(shortest_path(&graph, 0, 2, 0.0).is_none());
    }

    #[test]
    fn start_equals_target_is_an_empty_path() {
        let graph = Fixture {
            nodes: 2,
            edges: vec![(0, 1, 1.0)],
        };
        let path = shortest_path(&graph, 1, 1, 0.0).expect("trivial path");
        assert_eq!(path.nodes, vec![1]);
        assert!(path.edges.is_empty());
        assert_eq!(path.total_weight, 0.0);
    }
}

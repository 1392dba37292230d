//! Small example graphs.

use crate::graph::{Cost, CostMatrix, Node, NO_EDGE};
use crate::heuristic::Heuristic;

/// Edges of the weighted sample graph, listed in one direction.
pub const WEIGHTED_EDGES: [(Node, Node, Cost); 10] = [
    (0, 1, 2.0),
    (0, 2, 4.0),
    (1, 2, 1.0),
    (1, 3, 7.0),
    (2, 4, 3.0),
    (3, 4, 2.0),
    (3, 5, 1.0),
    (4, 5, 5.0),
    (4, 6, 2.0),
    (5, 6, 3.0),
];

/// A symmetric, weighted graph of seven nodes.
pub fn weighted() -> CostMatrix {
    let inf = NO_EDGE;
    CostMatrix::new(vec![
        vec![0.0, 2.0, 4.0, inf, inf, inf, inf],
        vec![2.0, 0.0, 1.0, 7.0, inf, inf, inf],
        vec![4.0, 1.0, 0.0, inf, 3.0, inf, inf],
        vec![inf, 7.0, inf, 0.0, 2.0, 1.0, inf],
        vec![inf, inf, 3.0, 2.0, 0.0, 5.0, 2.0],
        vec![inf, inf, inf, 1.0, 5.0, 0.0, 3.0],
        vec![inf, inf, inf, inf, 2.0, 3.0, 0.0],
    ])
    .expect("sample graph is square and non-negative")
}

/// Admissible estimates of the distance to node 6 in [weighted].
pub fn heuristic() -> Heuristic {
    Heuristic::new(vec![7.0, 6.0, 5.0, 3.0, 2.0, 1.0, 0.0])
        .expect("sample heuristic is non-negative")
}

/// An unweighted graph of seven nodes:
///
/// ```text
/// 0 -- 1 -- 3
/// |    |    |
/// 2 -- 4 -- 5 -- 6
/// ```
pub fn unweighted() -> CostMatrix {
    CostMatrix::from_adjacency(&[
        vec![0, 1, 1, 0, 0, 0, 0],
        vec![1, 0, 0, 1, 1, 0, 0],
        vec![1, 0, 0, 0, 1, 0, 0],
        vec![0, 1, 0, 0, 0, 1, 0],
        vec![0, 1, 1, 0, 0, 1, 0],
        vec![0, 0, 0, 1, 1, 0, 1],
        vec![0, 0, 0, 0, 0, 1, 0],
    ])
    .expect("sample graph is square")
}

/// A chain `0 -- 1 -- 2` and an isolated node 3.
pub fn disconnected() -> CostMatrix {
    CostMatrix::from_edges(4, &[(0, 1, 1.0), (1, 2, 1.0)], true)
        .expect("sample edges are within the graph")
}

//! Graph model: dense cost tables, adjacency, and paths.

mod matrix;
mod path;
mod traits;

pub use matrix::CostMatrix;
pub use path::GraphPath;
pub(crate) use path::write_nodes;
pub use traits::{Graphable, Neighbors};

/// Nodes are identified by their index in the graph.
pub type Node = usize;

/// Edge, path and heuristic costs.
pub type Cost = f64;

/// Sentinel cost marking the absence of an edge.
pub const NO_EDGE: Cost = std::f64::INFINITY;

#[cfg(test)]
mod tests {

    use super::*;
    use crate::samples;
    use crate::SearchError;

    #[test]
    fn neighbors_skip_diagonal_and_missing_edges() {
        let graph = samples::weighted();
        let neighbors: Vec<(Node, Cost)> = graph.neighbors(4).collect();
        assert_eq!(neighbors, vec![(2, 3.0), (3, 2.0), (5, 5.0), (6, 2.0)]);

        assert_eq!(graph.cost(0, 1), Some(2.0));
        assert_eq!(graph.cost(0, 3), None);
        assert_eq!(graph.cost(0, 7), None);
    }

    #[test]
    fn self_loops_are_not_neighbors() {
        let graph = CostMatrix::new(vec![vec![1.0, 2.0], vec![NO_EDGE, 3.0]]).unwrap();
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![(1, 2.0)]);
        assert_eq!(graph.neighbors(1).count(), 0);
    }

    #[test]
    fn matrix_must_be_square() {
        let err = CostMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        match err {
            SearchError::NotSquare { row, found, size } => {
                assert_eq!((row, found, size), (1, 1, 2));
            }
            e => panic!("Unexpected error: {}", e),
        }
    }

    #[test]
    fn negative_and_nan_costs_are_rejected() {
        assert!(matches!(
            CostMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]),
            Err(SearchError::InvalidCost { from: 0, to: 1, .. })
        ));
        assert!(matches!(
            CostMatrix::new(vec![vec![0.0, 1.0], vec![std::f64::NAN, 0.0]]),
            Err(SearchError::InvalidCost { from: 1, to: 0, .. })
        ));
    }

    #[test]
    fn edges_build_the_same_matrix() {
        let edges = samples::WEIGHTED_EDGES;
        let graph = CostMatrix::from_edges(7, &edges, true).unwrap();
        assert_eq!(graph, samples::weighted());
        assert_eq!(graph.total_cost(), 2.0 * 30.0);
    }

    #[test]
    fn directed_edges() {
        let graph = CostMatrix::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)], false).unwrap();
        assert_eq!(graph.cost(0, 1), Some(1.0));
        assert_eq!(graph.cost(1, 0), None);
    }

    #[test]
    fn duplicate_edges_keep_the_cheaper_cost() {
        let graph = CostMatrix::from_edges(2, &[(0, 1, 5.0), (0, 1, 3.0)], true).unwrap();
        assert_eq!(graph.cost(1, 0), Some(3.0));
    }

    #[test]
    fn edges_outside_the_graph() {
        assert!(matches!(
            CostMatrix::from_edges(2, &[(0, 2, 1.0)], true),
            Err(SearchError::InvalidNodeIndex { node: 2, size: 2 })
        ));
    }

    #[test]
    fn adjacency_is_unit_cost() {
        let graph = samples::unweighted();
        assert_eq!(graph.cost(0, 1), Some(1.0));
        assert_eq!(graph.cost(0, 3), None);
        assert_eq!(graph.neighbors(5).map(|(n, _)| n).collect::<Vec<_>>(), vec![3, 4, 6]);
    }

    #[test]
    fn path_push_and_pop() {
        let mut path = GraphPath::new(0);
        path.push(1, 0.1);
        path.push(2, 0.2);
        assert_eq!(path.len(), 2);
        assert_eq!(path.destination(), 2);
        assert_eq!(path.penultimate(), Some(1));

        assert_eq!(path.pop(), Some(2));
        assert_eq!(path.cost(), 0.1);
        assert_eq!(path.pop(), Some(1));
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.pop(), None);
        assert_eq!(path.origin(), 0);
    }

    #[test]
    fn path_step_copies() {
        let path = GraphPath::new(3);
        let next = path.step(4, 2.0);
        assert_eq!(path.nodes(), &[3]);
        assert_eq!(next.nodes(), &[3, 4]);
        assert_eq!(next.cost(), 2.0);
    }

    #[test]
    fn path_weight_from_graph() {
        let graph = samples::weighted();
        let mut path = GraphPath::new(0);
        for &(node, cost) in &[(1, 2.0), (2, 1.0), (4, 3.0), (6, 2.0)] {
            path.push(node, cost);
        }
        assert_eq!(path.weigh(&graph), Some(8.0));
        assert_eq!(format!("{}", path), "0 -> 1 -> 2 -> 4 -> 6");

        let broken = GraphPath::new(0).step(6, 1.0);
        assert_eq!(broken.weigh(&graph), None);
    }
}

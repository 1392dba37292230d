//! Per-node estimates of the remaining cost to a goal.

use crate::errors::{Result, SearchError};
use crate::graph::{Cost, Graphable, Node};

/// A table of estimates, one per node, of the cost to reach the goal.
///
/// For A* and IDA* to return optimal paths, the table must be admissible:
/// no estimate may exceed the true remaining cost. That is the caller's
/// responsibility; only the shape and sign of the estimates are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Heuristic {
    estimates: Vec<Cost>,
}

impl Heuristic {
    pub fn new(estimates: Vec<Cost>) -> Result<Self> {
        for (node, &estimate) in estimates.iter().enumerate() {
            if !estimate.is_finite() || estimate < 0.0 {
                return Err(SearchError::InvalidHeuristic { node, estimate });
            }
        }
        Ok(Self { estimates })
    }

    /// The trivial heuristic, which turns A* into Dijkstra's algorithm.
    pub fn zero(size: usize) -> Self {
        Self {
            estimates: vec![0.0; size],
        }
    }

    pub fn estimate(&self, node: Node) -> Cost {
        self.estimates[node]
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Ensure there is exactly one estimate per node of the graph.
    pub fn check<G>(&self, graph: &G) -> Result<()>
    where
        G: Graphable + ?Sized,
    {
        if self.len() == graph.len() {
            Ok(())
        } else {
            Err(SearchError::HeuristicSize {
                expected: graph.len(),
                found: self.len(),
            })
        }
    }
}

use std::time;
use thiserror::Error;

use crate::graph::{Cost, Node};

/// Error produced when a search cannot be run or is cut short.
///
/// Failing to find a path is not an error: searches report that
/// through their return value.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Node {node} is not in a graph of {size} nodes")]
    InvalidNodeIndex { node: Node, size: usize },

    #[error("Row {row} has {found} entries, expected {size}")]
    NotSquare {
        row: usize,
        found: usize,
        size: usize,
    },

    #[error("Invalid cost {cost} for edge {from} -> {to}")]
    InvalidCost { from: Node, to: Node, cost: Cost },

    #[error("Invalid heuristic estimate {estimate} for node {node}")]
    InvalidHeuristic { node: Node, estimate: Cost },

    #[error("Heuristic has {found} estimates but the graph has {expected} nodes")]
    HeuristicSize { expected: usize, found: usize },

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),

    #[error("Search cancelled after {0} steps")]
    Cancelled(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;

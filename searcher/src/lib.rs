//! Bounded-cost search over graphs given as dense cost matrices.
//!
//! Three strategies share one problem model, finding a path from a start
//! node to a goal node:
//!
//! - [astar]: best-first search ordered by `f = g + h`.
//! - [idastar]: depth-first search under a growing f-cost threshold.
//! - [iddfs]: depth-first search under a growing depth limit.
//!
//! Graphs implement [Graphable]; [CostMatrix] is the dense implementation.
//! Each search may report its steps to a [Recorder] such as [Trace].
//!
//! The best-first engine behind [astar] is generic: implement
//! [SearchCandidate], [SearchState] and [SearchHeuristic] and hand the
//! origin to [astar::build].

pub mod algorithm;
mod errors;
pub mod graph;
mod heuristic;
pub mod samples;
pub mod trace;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use heuristic::Heuristic;
pub use traits::SearchCandidate;
pub use traits::SearchHeuristic;
pub use traits::SearchState;

pub use algorithm::astar;
pub use algorithm::idastar;
pub use algorithm::iddfs;
pub use algorithm::{Cancellation, Outcome, SearchOptions};
pub use graph::{Cost, CostMatrix, GraphPath, Graphable, Node, NO_EDGE};
pub use trace::{Disposition, NoTrace, Recorder, Trace};

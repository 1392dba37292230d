//! Diagnostics describing how a search explored the graph.
//!
//! Searches report each step to a [Recorder] handed in by the caller.
//! [Trace] keeps everything, grouped by outer iteration; [NoTrace]
//! keeps nothing.

use std::fmt;

use crate::graph::{write_nodes, Cost, Node};

/// What happened to a path when the search reached it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The path was within bounds, and its children were examined.
    Explored,

    /// The path was cut off by the current bound, or was a stale entry.
    Pruned,

    /// The path ends at the goal.
    GoalReached,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Explored => write!(f, "EXPLORED"),
            Disposition::Pruned => write!(f, "PRUNED"),
            Disposition::GoalReached => write!(f, "GOAL_REACHED"),
        }
    }
}

/// A single step of a search.
///
/// `value` is the f-cost for A* and IDA*, and the depth for IDDFS.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub path: Vec<Node>,
    pub value: Cost,
    pub disposition: Disposition,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.path)?;
        write!(f, " ({}) - {}", self.value, self.disposition)
    }
}

/// Every step taken under a single bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    /// The cost threshold or depth limit in force.
    pub bound: Cost,
    pub events: Vec<TraceEvent>,
}

/// Receives the steps of a search as it runs.
pub trait Recorder {
    /// Start a new outer iteration under the given bound.
    fn begin(&mut self, bound: Cost);

    fn record(&mut self, path: &[Node], value: Cost, disposition: Disposition);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Recorder for NoTrace {
    fn begin(&mut self, _bound: Cost) {}

    fn record(&mut self, _path: &[Node], _value: Cost, _disposition: Disposition) {}
}

/// Keeps every event, grouped by iteration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trace {
    iterations: Vec<Iteration>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    pub fn last(&self) -> Option<&Iteration> {
        self.iterations.last()
    }

    /// The bound used by each iteration, in order.
    pub fn bounds(&self) -> Vec<Cost> {
        self.iterations.iter().map(|i| i.bound).collect()
    }

    /// All events, across every iteration.
    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.iterations.iter().flat_map(|i| i.events.iter())
    }
}

impl Recorder for Trace {
    fn begin(&mut self, bound: Cost) {
        self.iterations.push(Iteration {
            bound,
            events: Vec::new(),
        });
    }

    fn record(&mut self, path: &[Node], value: Cost, disposition: Disposition) {
        if self.iterations.is_empty() {
            self.begin(std::f64::INFINITY);
        }
        if let Some(iteration) = self.iterations.last_mut() {
            iteration.events.push(TraceEvent {
                path: path.to_vec(),
                value,
                disposition,
            });
        }
    }
}

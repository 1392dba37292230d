//! Closed sets, to avoid expanding already finalized states.

use std::collections::HashSet;
use std::default::Default;

use crate::traits::{SearchCandidate, SearchState};

/// Defines the behavior required of a search cache.
pub trait Cache: Default {
    type Candidate: SearchCandidate;

    /// Admit a candidate for expansion. Returns false when the
    /// candidate should be discarded instead.
    fn check(&mut self, candidate: &Self::Candidate) -> bool;

    /// Has this candidate's state already been admitted?
    fn contains(&self, candidate: &Self::Candidate) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Admits each state exactly once.
///
/// When the frontier is ordered by a consistent heuristic, the first time
/// a state is popped it has been reached by its cheapest path, so later
/// arrivals at the same state are stale.
#[derive(Debug)]
pub struct ClosedSet<S>
where
    S: SearchState,
{
    closed: HashSet<S::State>,
}

impl<S> Default for ClosedSet<S>
where
    S: SearchState,
{
    fn default() -> Self {
        ClosedSet {
            closed: HashSet::default(),
        }
    }
}

impl<S> Cache for ClosedSet<S>
where
    S: SearchState,
{
    type Candidate = S;

    fn check(&mut self, candidate: &Self::Candidate) -> bool {
        self.closed.insert(candidate.state())
    }

    fn contains(&self, candidate: &Self::Candidate) -> bool {
        self.closed.contains(&candidate.state())
    }

    fn len(&self) -> usize {
        self.closed.len()
    }
}

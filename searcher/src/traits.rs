use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// Searches are "complete" when they are ready to be
/// returned to the user. Best-first searches return the
/// first complete candidate they pop from their frontier.
pub trait SearchCandidate: Debug + Sized {
    /// Indicates that this candidate should be considered
    /// complete, and causes the search algorithm to stop.
    fn is_complete(&self) -> bool;

    /// Produces additional candidates to examine in this
    /// search. Candidates need not be complete.
    fn children(&self) -> Vec<Self>;
}

/// An interface for searching when a heuristic can be provided.
///
/// The heuristic is the estimated total cost of any complete
/// candidate descended from this one: the cost so far plus an
/// admissible estimate of the cost remaining.
pub trait SearchHeuristic: SearchCandidate {
    type Heuristic: Debug + PartialOrd + Copy;

    fn heuristic(&self) -> Self::Heuristic;
}

/// Identifies the position a candidate has reached, so that
/// a closed set can refuse to expand the same position twice.
pub trait SearchState: SearchCandidate {
    type State: Debug + Eq + Hash;

    fn state(&self) -> Self::State;
}

//! A* best-first search.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt;

use super::cache::ClosedSet;
use super::{check_endpoints, Outcome, SearchAlgorithm, SearchOptions, SearchQueue};
use crate::errors::Result;
use crate::graph::{Cost, GraphPath, Graphable, Node};
use crate::heuristic::Heuristic;
use crate::trace::{NoTrace, Recorder};
use crate::traits::{SearchCandidate, SearchHeuristic, SearchState};

/// Frontier entry. Lower estimates pop first, and among equal estimates
/// the entry pushed first wins.
#[derive(Debug)]
struct Entry<S>
where
    S: SearchHeuristic,
{
    estimate: S::Heuristic,
    sequence: usize,
    candidate: S,
}

impl<S> PartialEq for Entry<S>
where
    S: SearchHeuristic,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Entry<S> where S: SearchHeuristic {}

impl<S> Ord for Entry<S>
where
    S: SearchHeuristic,
{
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .partial_cmp(&self.estimate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<S> PartialOrd for Entry<S>
where
    S: SearchHeuristic,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue ordered by heuristic, ties broken by insertion order.
#[derive(Debug)]
pub struct AStarQueue<S>
where
    S: SearchHeuristic,
{
    queue: BinaryHeap<Entry<S>>,
    sequence: usize,
}

impl<S> Default for AStarQueue<S>
where
    S: SearchHeuristic,
{
    fn default() -> Self {
        AStarQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<S> SearchQueue for AStarQueue<S>
where
    S: SearchHeuristic,
{
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|e| e.candidate)
    }

    fn push(&mut self, item: Self::Candidate) {
        self.sequence += 1;
        self.queue.push(Entry {
            estimate: item.heuristic(),
            sequence: self.sequence,
            candidate: item,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<S> = SearchAlgorithm<S, AStarQueue<S>, ClosedSet<S>>;

/// Build an A* searcher starting from the given candidate.
pub fn build<S>(origin: S) -> AStarSearcher<S>
where
    S: SearchHeuristic + SearchState,
{
    SearchAlgorithm::new(origin)
}

/// Holds a path through a cost matrix while A* runs.
struct PathCandidate<'m, G: ?Sized> {
    path: GraphPath,
    goal: Node,
    graph: &'m G,
    heuristic: &'m Heuristic,
}

impl<'m, G: ?Sized> Clone for PathCandidate<'m, G> {
    fn clone(&self) -> Self {
        PathCandidate {
            path: self.path.clone(),
            goal: self.goal,
            graph: self.graph,
            heuristic: self.heuristic,
        }
    }
}

impl<'m, G: ?Sized> fmt::Debug for PathCandidate<'m, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathCandidate")
            .field("path", &self.path)
            .field("goal", &self.goal)
            .finish()
    }
}

impl<'m, G> PathCandidate<'m, G>
where
    G: Graphable + ?Sized,
{
    fn start(origin: Node, goal: Node, graph: &'m G, heuristic: &'m Heuristic) -> Self {
        Self {
            path: GraphPath::new(origin),
            goal,
            graph,
            heuristic,
        }
    }

    fn step(&self, node: Node, cost: Cost) -> Self {
        Self {
            path: self.path.step(node, cost),
            goal: self.goal,
            graph: self.graph,
            heuristic: self.heuristic,
        }
    }
}

impl<'m, G> SearchCandidate for PathCandidate<'m, G>
where
    G: Graphable + ?Sized,
{
    fn is_complete(&self) -> bool {
        self.path.destination() == self.goal
    }

    fn children(&self) -> Vec<Self> {
        self.graph
            .neighbors(self.path.destination())
            .map(|(node, cost)| self.step(node, cost))
            .collect()
    }
}

impl<'m, G> SearchHeuristic for PathCandidate<'m, G>
where
    G: Graphable + ?Sized,
{
    type Heuristic = Cost;

    fn heuristic(&self) -> Self::Heuristic {
        self.path.cost() + self.heuristic.estimate(self.path.destination())
    }
}

impl<'m, G> SearchState for PathCandidate<'m, G>
where
    G: Graphable + ?Sized,
{
    type State = Node;

    fn state(&self) -> Self::State {
        self.path.destination()
    }
}

/// Find the cheapest path from `start` to `goal` with A*.
///
/// The path is optimal when the heuristic is consistent. Each node is
/// expanded at most once.
pub fn search<G>(graph: &G, start: Node, goal: Node, heuristic: &Heuristic) -> Result<Outcome>
where
    G: Graphable + ?Sized,
{
    search_with(
        graph,
        start,
        goal,
        heuristic,
        &SearchOptions::default(),
        &mut NoTrace,
    )
}

/// A* with explicit options, reporting every pop to `recorder`.
///
/// A* runs as a single iteration with an infinite bound. Each event's
/// value is the f-cost of the popped entry; stale entries are recorded
/// as pruned.
pub fn search_with<G, R>(
    graph: &G,
    start: Node,
    goal: Node,
    heuristic: &Heuristic,
    options: &SearchOptions,
    recorder: &mut R,
) -> Result<Outcome>
where
    G: Graphable + ?Sized,
    R: Recorder + ?Sized,
{
    check_endpoints(graph, start, goal)?;
    heuristic.check(graph)?;

    log::debug!("A* from {} to {}", start, goal);
    recorder.begin(std::f64::INFINITY);

    let origin = PathCandidate::start(start, goal, graph, heuristic);
    let found = build(origin)
        .with_options(options.clone())
        .run_with(|candidate, disposition| {
            recorder.record(candidate.path.nodes(), candidate.heuristic(), disposition)
        })?;

    Ok(found.map_or_else(Outcome::no_path, |c| Outcome::found(c.path)))
}

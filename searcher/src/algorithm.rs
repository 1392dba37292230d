//! Provides the building blocks for search algorithms

use std::default::Default;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::graph::{Cost, GraphPath, Graphable, Node};
use crate::trace::Disposition;
use crate::traits::SearchCandidate;

pub mod astar;
pub mod cache;
pub mod idastar;
pub mod iddfs;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A flag shared between a running search and whoever may want to stop it.
#[derive(Debug, Clone, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Knobs shared by every search algorithm.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum number of expansion steps.
    pub limit: Option<usize>,

    /// Maximum wall-clock time for the whole search.
    pub timeout: Option<Duration>,

    pub cancel: Option<Cancellation>,

    /// Log progress every this many steps.
    pub verbose: Option<usize>,

    /// IDA* gives up rather than raise its threshold above this cost.
    pub ceiling: Option<Cost>,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, cancel: Cancellation) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn with_verbose(mut self, every: usize) -> Self {
        self.verbose = Some(every);
        self
    }

    pub fn with_ceiling(mut self, ceiling: Cost) -> Self {
        self.ceiling = Some(ceiling);
        self
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Enforces the limits in [SearchOptions] as a search runs.
#[derive(Debug)]
pub(crate) struct Budget {
    steps: usize,
    counter: Option<StepLimit>,
    started: Instant,
    timeout: Option<Duration>,
    cancel: Option<Cancellation>,
    verbose: Option<usize>,
}

impl Budget {
    pub(crate) fn new(options: &SearchOptions) -> Self {
        Self {
            steps: 0,
            counter: options.limit.map(StepLimit::new),
            started: Instant::now(),
            timeout: options.timeout,
            cancel: options.cancel.clone(),
            verbose: options.verbose,
        }
    }

    /// Account for one expansion step.
    ///
    /// Returns true when the caller should log its progress.
    pub(crate) fn step(&mut self) -> Result<bool> {
        self.steps += 1;

        if let Some(counter) = self.counter.as_mut() {
            counter.increment()?;
        }

        if self.cancel.as_ref().map_or(false, |c| c.is_cancelled()) {
            return Err(SearchError::Cancelled(self.steps));
        }

        if let Some(timeout) = self.timeout {
            let elapsed = self.started.elapsed();
            if elapsed > timeout {
                return Err(SearchError::TimeLimitExhausted(elapsed));
            }
        }

        Ok(self.verbose.map_or(false, |n| n > 0 && self.steps % n == 0))
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps
    }
}

/// The result of a cost-optimal search: a path and its cost, or no
/// path and an infinite cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub path: Option<GraphPath>,
    pub cost: Cost,
}

impl Outcome {
    pub fn found(path: GraphPath) -> Self {
        Self {
            cost: path.cost(),
            path: Some(path),
        }
    }

    pub fn no_path() -> Self {
        Self {
            path: None,
            cost: std::f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn nodes(&self) -> Option<&[Node]> {
        self.path.as_ref().map(|p| p.nodes())
    }
}

pub(crate) fn check_endpoints<G>(graph: &G, start: Node, goal: Node) -> Result<()>
where
    G: Graphable + ?Sized,
{
    graph.check_node(start)?;
    graph.check_node(goal)
}

/// Implementation of best-first search, using generic components.
///
/// Uses a generic queue (Q) and a generic cache (C) to decide which
/// candidate to examine next, and which candidates are stale.
#[derive(Debug)]
pub struct SearchAlgorithm<S, Q, C>
where
    S: SearchCandidate,
    Q: SearchQueue<Candidate = S> + Default,
    C: Cache<Candidate = S>,
{
    cache: C,
    queue: Q,
    options: SearchOptions,
}

impl<S, Q, C> SearchAlgorithm<S, Q, C>
where
    S: SearchCandidate,
    Q: SearchQueue<Candidate = S> + Default,
    C: Cache<Candidate = S>,
{
    fn new(origin: S) -> Self {
        let mut sr = SearchAlgorithm {
            cache: C::default(),
            queue: Q::default(),
            options: SearchOptions::default(),
        };
        sr.queue.push(origin);
        sr
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many candidates have been explored,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit)
    }

    /// Run the search to completion.
    ///
    /// Returns the first complete candidate popped from the queue,
    /// or None when the queue runs dry.
    pub fn run(self) -> Result<Option<S>> {
        self.run_with(|_, _| {})
    }

    /// Run the search, reporting what happens to each popped candidate.
    pub fn run_with<F>(mut self, mut observe: F) -> Result<Option<S>>
    where
        F: FnMut(&S, Disposition),
    {
        let mut budget = Budget::new(&self.options);

        while let Some(candidate) = self.queue.pop() {
            if budget.step()? {
                log::info!(
                    "Q{} C{} step {}",
                    self.queue.len(),
                    self.cache.len(),
                    budget.steps()
                );
            }

            if candidate.is_complete() {
                observe(&candidate, Disposition::GoalReached);
                log::debug!("Complete candidate after {} steps", budget.steps());
                return Ok(Some(candidate));
            }

            // Stale: this state was already expanded via a better entry.
            if !self.cache.check(&candidate) {
                observe(&candidate, Disposition::Pruned);
                continue;
            }

            observe(&candidate, Disposition::Explored);
            for child in candidate.children() {
                if !self.cache.contains(&child) {
                    self.queue.push(child);
                }
            }
        }

        log::debug!("Queue exhausted after {} steps", budget.steps());
        Ok(None)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn step_limit() {
        let mut budget = Budget::new(&SearchOptions::default().with_limit(2));
        assert!(budget.step().is_ok());
        assert!(budget.step().is_ok());
        assert!(matches!(
            budget.step(),
            Err(SearchError::StepLimitExhausted(2))
        ));
    }

    #[test]
    fn cancellation_is_shared() {
        let cancel = Cancellation::new();
        let mut budget = Budget::new(&SearchOptions::default().with_cancellation(cancel.clone()));
        assert!(budget.step().is_ok());

        cancel.cancel();
        assert!(matches!(budget.step(), Err(SearchError::Cancelled(2))));
    }

    #[test]
    fn time_limit() {
        let mut budget = Budget::new(&SearchOptions::default().with_timeout(Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(5));
        assert!(matches!(
            budget.step(),
            Err(SearchError::TimeLimitExhausted(_))
        ));
    }

    #[test]
    fn progress_every_n_steps() {
        let mut budget = Budget::new(&SearchOptions::default().with_verbose(3));
        let reports: Vec<bool> = (0..6).map(|_| budget.step().unwrap()).collect();
        assert_eq!(reports, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn outcome_without_path() {
        let outcome = Outcome::no_path();
        assert!(!outcome.is_found());
        assert!(outcome.cost.is_infinite());
        assert_eq!(outcome.nodes(), None);
    }
}

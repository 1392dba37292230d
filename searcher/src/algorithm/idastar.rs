//! Iterative deepening A*.
//!
//! Each iteration is a depth-first search which refuses to extend any path
//! whose f-cost exceeds the current threshold. The smallest f-cost that was
//! refused becomes the next threshold. Memory use is proportional to the
//! length of the longest path, rather than to the size of the frontier.

use super::{check_endpoints, Budget, Outcome, SearchOptions};
use crate::errors::Result;
use crate::graph::{Cost, GraphPath, Graphable, Neighbors, Node};
use crate::heuristic::Heuristic;
use crate::trace::{Disposition, NoTrace, Recorder};

/// Result of one bounded iteration.
#[derive(Debug)]
enum Probe {
    Found(GraphPath),

    /// The smallest f-cost which exceeded the threshold. Infinite when
    /// nothing was cut off, meaning the goal cannot be reached.
    Minimum(Cost),
}

/// What to do with the path just extended.
enum Visit {
    Pruned(Cost),
    Goal,
    Expand,
}

/// A node on the current path, with the cursor into its neighbors.
struct Frame<'g> {
    node: Node,
    neighbors: Neighbors<'g>,
    minimum: Cost,
}

struct Explorer<'s, G: ?Sized, R: ?Sized> {
    graph: &'s G,
    heuristic: &'s Heuristic,
    goal: Node,
    threshold: Cost,
    budget: &'s mut Budget,
    recorder: &'s mut R,
}

impl<'s, G, R> Explorer<'s, G, R>
where
    G: Graphable + ?Sized,
    R: Recorder + ?Sized,
{
    fn visit(&mut self, path: &GraphPath) -> Result<Visit> {
        if self.budget.step()? {
            log::info!(
                "IDA* threshold {} depth {} step {}",
                self.threshold,
                path.len(),
                self.budget.steps()
            );
        }

        let node = path.destination();
        let f = path.cost() + self.heuristic.estimate(node);

        let (visit, disposition) = if f > self.threshold {
            (Visit::Pruned(f), Disposition::Pruned)
        } else if node == self.goal {
            (Visit::Goal, Disposition::GoalReached)
        } else {
            (Visit::Expand, Disposition::Explored)
        };
        self.recorder.record(path.nodes(), f, disposition);
        Ok(visit)
    }

    /// Depth-first search from `start`, bounded by the threshold.
    ///
    /// Only nodes on the current path are off limits, so a node may be
    /// reached again through a different branch.
    fn probe(&mut self, start: Node) -> Result<Probe> {
        let mut path = GraphPath::new(start);
        let mut on_path = vec![false; self.graph.len()];

        match self.visit(&path)? {
            Visit::Pruned(f) => return Ok(Probe::Minimum(f)),
            Visit::Goal => return Ok(Probe::Found(path)),
            Visit::Expand => {}
        }

        on_path[start] = true;
        let mut stack = vec![Frame {
            node: start,
            neighbors: self.graph.neighbors(start),
            minimum: std::f64::INFINITY,
        }];

        while let Some(frame) = stack.last_mut() {
            match frame.neighbors.next() {
                Some((next, _)) if on_path[next] => {}
                Some((next, cost)) => {
                    path.push(next, cost);
                    match self.visit(&path)? {
                        Visit::Pruned(f) => {
                            frame.minimum = frame.minimum.min(f);
                            path.pop();
                        }
                        Visit::Goal => return Ok(Probe::Found(path)),
                        Visit::Expand => {
                            on_path[next] = true;
                            stack.push(Frame {
                                node: next,
                                neighbors: self.graph.neighbors(next),
                                minimum: std::f64::INFINITY,
                            });
                        }
                    }
                }
                None => {
                    let minimum = frame.minimum;
                    on_path[frame.node] = false;
                    stack.pop();
                    path.pop();

                    match stack.last_mut() {
                        Some(parent) => parent.minimum = parent.minimum.min(minimum),
                        None => return Ok(Probe::Minimum(minimum)),
                    }
                }
            }
        }

        Ok(Probe::Minimum(std::f64::INFINITY))
    }
}

/// Find the cheapest path from `start` to `goal` with IDA*.
///
/// The path is optimal when the heuristic is admissible.
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

/// IDA* with explicit options, reporting every step to `recorder`.
///
/// Each iteration starts with [Recorder::begin] and its threshold. Event
/// values are f-costs.
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

    let mut budget = Budget::new(options);
    let mut threshold = heuristic.estimate(start);
    let mut iteration = 1;

    loop {
        log::debug!("IDA* iteration {}: threshold = {}", iteration, threshold);
        recorder.begin(threshold);

        let mut explorer = Explorer {
            graph,
            heuristic,
            goal,
            threshold,
            budget: &mut budget,
            recorder: &mut *recorder,
        };

        match explorer.probe(start)? {
            Probe::Found(path) => {
                log::debug!(
                    "IDA* found {} at threshold {} after {} steps",
                    path,
                    threshold,
                    budget.steps()
                );
                return Ok(Outcome::found(path));
            }
            Probe::Minimum(next) if next.is_infinite() => {
                log::debug!("IDA* exhausted the graph at threshold {}", threshold);
                return Ok(Outcome::no_path());
            }
            Probe::Minimum(next) => {
                if let Some(ceiling) = options.ceiling {
                    if next > ceiling {
                        log::warn!(
                            "IDA* threshold {} exceeds ceiling {}, giving up without a path",
                            next,
                            ceiling
                        );
                        return Ok(Outcome::no_path());
                    }
                }
                debug_assert!(next > threshold);
                threshold = next;
                iteration += 1;
            }
        }
    }
}

//! Iterative deepening depth-first search.
//!
//! Edge costs are ignored beyond telling edges apart from non-edges: a zero
//! entry counts as no edge, as in a 0/1 adjacency table.

use super::{check_endpoints, Budget, SearchOptions};
use crate::errors::Result;
use crate::graph::{Cost, GraphPath, Graphable, Neighbors, Node};
use crate::trace::{Disposition, NoTrace, Recorder};

/// Result of one depth-limited iteration.
#[derive(Debug)]
enum Probe {
    Found(GraphPath),

    /// No path within the limit. `cutoff` records whether any path was
    /// stopped by the limit, i.e. whether a deeper search could do better.
    Exhausted { cutoff: bool },
}

struct Frame<'g> {
    node: Node,
    neighbors: Neighbors<'g>,
}

struct Explorer<'s, G: ?Sized, R: ?Sized> {
    graph: &'s G,
    goal: Node,
    limit: usize,
    budget: &'s mut Budget,
    recorder: &'s mut R,
    cutoff: bool,
}

impl<'s, G, R> Explorer<'s, G, R>
where
    G: Graphable + ?Sized,
    R: Recorder + ?Sized,
{
    /// Returns the disposition of the path just extended.
    fn visit(&mut self, path: &GraphPath) -> Result<Disposition> {
        if self.budget.step()? {
            log::info!(
                "IDDFS limit {} depth {} step {}",
                self.limit,
                path.len(),
                self.budget.steps()
            );
        }

        let depth = path.len();
        let disposition = if path.destination() == self.goal {
            Disposition::GoalReached
        } else if depth >= self.limit {
            self.cutoff = true;
            Disposition::Pruned
        } else {
            Disposition::Explored
        };
        self.recorder.record(path.nodes(), depth as Cost, disposition);
        Ok(disposition)
    }

    fn probe(&mut self, start: Node) -> Result<Probe> {
        let mut path = GraphPath::new(start);
        let mut on_path = vec![false; self.graph.len()];

        match self.visit(&path)? {
            Disposition::GoalReached => return Ok(Probe::Found(path)),
            Disposition::Pruned => return Ok(Probe::Exhausted { cutoff: true }),
            Disposition::Explored => {}
        }

        on_path[start] = true;
        let mut stack = vec![Frame {
            node: start,
            neighbors: self.graph.neighbors(start),
        }];

        while let Some(frame) = stack.last_mut() {
            match frame.neighbors.next() {
                Some((next, cost)) if on_path[next] || cost == 0.0 => {}
                Some((next, cost)) => {
                    path.push(next, cost);
                    match self.visit(&path)? {
                        Disposition::GoalReached => return Ok(Probe::Found(path)),
                        Disposition::Pruned => {
                            path.pop();
                        }
                        Disposition::Explored => {
                            on_path[next] = true;
                            stack.push(Frame {
                                node: next,
                                neighbors: self.graph.neighbors(next),
                            });
                        }
                    }
                }
                None => {
                    on_path[frame.node] = false;
                    stack.pop();
                    path.pop();
                }
            }
        }

        Ok(Probe::Exhausted {
            cutoff: self.cutoff,
        })
    }
}

/// Find a path from `start` to `goal` using at most `max_depth` edges.
///
/// The limit grows from zero, so the path returned has the fewest edges.
/// `max_depth` is capped at one less than the number of nodes, the longest
/// a path can be without repeating a node.
pub fn search<G>(graph: &G, start: Node, goal: Node, max_depth: usize) -> Result<Option<GraphPath>>
where
    G: Graphable + ?Sized,
{
    search_with(
        graph,
        start,
        goal,
        max_depth,
        &SearchOptions::default(),
        &mut NoTrace,
    )
}

/// IDDFS with explicit options, reporting every step to `recorder`.
///
/// Each depth limit starts a new iteration. Event values are depths.
pub fn search_with<G, R>(
    graph: &G,
    start: Node,
    goal: Node,
    max_depth: usize,
    options: &SearchOptions,
    recorder: &mut R,
) -> Result<Option<GraphPath>>
where
    G: Graphable + ?Sized,
    R: Recorder + ?Sized,
{
    check_endpoints(graph, start, goal)?;

    let max_depth = max_depth.min(graph.len().saturating_sub(1));
    let mut budget = Budget::new(options);

    for limit in 0..=max_depth {
        log::debug!("IDDFS depth limit {}", limit);
        recorder.begin(limit as Cost);

        let mut explorer = Explorer {
            graph,
            goal,
            limit,
            budget: &mut budget,
            recorder: &mut *recorder,
            cutoff: false,
        };

        match explorer.probe(start)? {
            Probe::Found(path) => {
                log::debug!("IDDFS found {} at depth limit {}", path, limit);
                return Ok(Some(path));
            }
            Probe::Exhausted { cutoff: false } => {
                log::debug!("IDDFS exhausted the graph at depth limit {}", limit);
                return Ok(None);
            }
            Probe::Exhausted { cutoff: true } => {}
        }
    }

    log::debug!("IDDFS found no path within depth {}", max_depth);
    Ok(None)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::CostMatrix;
    use crate::samples;
    use crate::trace::Trace;
    use crate::SearchError;

    #[test]
    fn sample_with_room_to_spare() {
        let path = search(&samples::unweighted(), 0, 6, 6).unwrap().unwrap();
        assert!(path.len() <= 4);
        assert_eq!(path.nodes(), &[0, 1, 3, 5, 6]);
    }

    #[test]
    fn sample_too_shallow() {
        assert_eq!(search(&samples::unweighted(), 0, 6, 2).unwrap(), None);
        assert_eq!(search(&samples::unweighted(), 0, 6, 3).unwrap(), None);
        assert!(search(&samples::unweighted(), 0, 6, 4).unwrap().is_some());
    }

    #[test]
    fn limits_grow_one_at_a_time() {
        let mut trace = Trace::new();
        search_with(
            &samples::unweighted(),
            0,
            6,
            100,
            &SearchOptions::default(),
            &mut trace,
        )
        .unwrap();
        assert_eq!(trace.bounds(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let first = &trace.iterations()[0].events;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].disposition, Disposition::Pruned);

        let goal = trace.events().last().unwrap();
        assert_eq!(goal.disposition, Disposition::GoalReached);
        assert_eq!(goal.value, 4.0);
    }

    #[test]
    fn start_is_goal() {
        let path = search(&samples::unweighted(), 2, 2, 0).unwrap().unwrap();
        assert_eq!(path.nodes(), &[2]);
    }

    #[test]
    fn unreachable_goal() {
        assert_eq!(search(&samples::disconnected(), 0, 3, 10).unwrap(), None);
    }

    #[test]
    fn stops_once_nothing_is_cut_off() {
        let graph = CostMatrix::from_edges(6, &[(0, 1, 1.0)], true).unwrap();
        let mut trace = Trace::new();
        let found = search_with(&graph, 0, 5, 5, &SearchOptions::default(), &mut trace).unwrap();
        assert_eq!(found, None);
        // Depth 2 reaches every node in the component without cutting anything off.
        assert_eq!(trace.bounds(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn zero_entries_are_not_edges() {
        let graph = CostMatrix::new(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(search(&graph, 0, 1, 1).unwrap(), None);
    }

    #[test]
    fn weighted_edges_count_as_one_step() {
        let path = search(&samples::weighted(), 0, 6, 6).unwrap().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.nodes(), &[0, 2, 4, 6]);
    }

    #[test]
    fn invalid_endpoints() {
        assert!(matches!(
            search(&samples::unweighted(), 8, 0, 3),
            Err(SearchError::InvalidNodeIndex { node: 8, size: 7 })
        ));
    }
}

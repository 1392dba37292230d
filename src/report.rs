//! Formatting search results for the terminal.

use searcher::{Graphable, GraphPath, Outcome, Trace};

/// One line per edge of the path, with the cost of that edge.
pub fn edges<G>(graph: &G, path: &GraphPath) -> String
where
    G: Graphable + ?Sized,
{
    path.edges()
        .map(|(from, to)| {
            let cost = graph.cost(from, to).unwrap_or(std::f64::INFINITY);
            format!("Vertex {} -> Vertex {}: Cost = {}\n", from, to, cost)
        })
        .collect()
}

pub fn outcome<G>(graph: &G, outcome: &Outcome) -> String
where
    G: Graphable + ?Sized,
{
    match &outcome.path {
        Some(path) => format!(
            "Path: {}\nTotal cost: {}\n{}",
            path,
            outcome.cost,
            edges(graph, path)
        ),
        None => "No path found\n".to_string(),
    }
}

pub fn depth<G>(graph: &G, found: Option<&GraphPath>, max_depth: usize) -> String
where
    G: Graphable + ?Sized,
{
    match found {
        Some(path) => format!(
            "Path: {}\nEdges: {}\n{}",
            path,
            path.len(),
            edges(graph, path)
        ),
        None => format!("No path found within depth {}\n", max_depth),
    }
}

/// The exploration listing, one numbered block per iteration.
pub fn trace(trace: &Trace) -> String {
    let mut lines = Vec::new();
    for (k, iteration) in trace.iterations().iter().enumerate() {
        lines.push(format!(
            "==== ITERATION {}: Threshold = {} ====",
            k + 1,
            iteration.bound
        ));
        for (i, event) in iteration.events.iter().enumerate() {
            lines.push(format!("{:>4}. {}", i + 1, event));
        }
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use searcher::{astar, idastar, iddfs, samples, SearchOptions};

    #[test]
    fn sample_outcome() {
        let graph = samples::weighted();
        let found = astar::search(&graph, 0, 6, &samples::heuristic()).unwrap();
        assert_eq!(
            outcome(&graph, &found),
            "Path: 0 -> 1 -> 2 -> 4 -> 6\n\
             Total cost: 8\n\
             Vertex 0 -> Vertex 1: Cost = 2\n\
             Vertex 1 -> Vertex 2: Cost = 1\n\
             Vertex 2 -> Vertex 4: Cost = 3\n\
             Vertex 4 -> Vertex 6: Cost = 2\n"
        );
    }

    #[test]
    fn no_path() {
        let graph = samples::disconnected();
        assert_eq!(
            outcome(&graph, &Outcome::no_path()),
            "No path found\n".to_string()
        );
        assert_eq!(
            depth(&graph, None, 3),
            "No path found within depth 3\n".to_string()
        );
    }

    #[test]
    fn depth_report() {
        let graph = samples::unweighted();
        let path = iddfs::search(&graph, 0, 6, 6).unwrap();
        let text = depth(&graph, path.as_ref(), 6);
        assert!(text.starts_with("Path: 0 -> 1 -> 3 -> 5 -> 6\nEdges: 4\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn trace_listing() {
        let mut recorded = Trace::new();
        idastar::search_with(
            &samples::weighted(),
            0,
            6,
            &samples::heuristic(),
            &SearchOptions::default(),
            &mut recorded,
        )
        .unwrap();

        let text = trace(&recorded);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("==== ITERATION 1: Threshold = 7 ===="));
        assert_eq!(lines.next(), Some("   1. 0 (7) - EXPLORED"));
        assert_eq!(lines.next(), Some("   2. 0 -> 1 (8) - PRUNED"));
        assert_eq!(lines.next(), Some("   3. 0 -> 2 (9) - PRUNED"));
        assert_eq!(lines.next(), Some("==== ITERATION 2: Threshold = 8 ===="));
        assert!(text.trim_end().ends_with("0 -> 1 -> 2 -> 4 -> 6 (8) - GOAL_REACHED"));
    }
}

use anyhow::Error;
use searcher::{astar, idastar, iddfs, NoTrace, Recorder, SearchResult, Trace};

use crate::input::Problem;
use crate::report;
use crate::Settings;

/// Run a search, printing its exploration listing first when asked to.
fn traced<T, F>(settings: &Settings, search: F) -> Result<T, Error>
where
    F: FnOnce(&mut dyn Recorder) -> SearchResult<T>,
{
    if settings.trace {
        let mut trace = Trace::new();
        let found = search(&mut trace)?;
        print!("{}", report::trace(&trace));
        Ok(found)
    } else {
        Ok(search(&mut NoTrace)?)
    }
}

pub fn solve_astar(problem: &Problem, settings: &Settings) -> Result<(), Error> {
    let goal = settings.goal(&problem.graph);
    let heuristic = problem.heuristic();
    println!("A* from {} to {}", settings.start, goal);

    let outcome = traced(settings, |recorder| {
        astar::search_with(
            &problem.graph,
            settings.start,
            goal,
            &heuristic,
            &settings.options,
            recorder,
        )
    })?;

    print!("{}", report::outcome(&problem.graph, &outcome));
    Ok(())
}

pub fn solve_idastar(problem: &Problem, settings: &Settings) -> Result<(), Error> {
    let goal = settings.goal(&problem.graph);
    let heuristic = problem.heuristic();
    println!("IDA* from {} to {}", settings.start, goal);

    let outcome = traced(settings, |recorder| {
        idastar::search_with(
            &problem.graph,
            settings.start,
            goal,
            &heuristic,
            &settings.options,
            recorder,
        )
    })?;

    print!("{}", report::outcome(&problem.graph, &outcome));
    Ok(())
}

pub fn solve_iddfs(problem: &Problem, settings: &Settings) -> Result<(), Error> {
    let goal = settings.goal(&problem.graph);
    let max_depth = settings.max_depth(&problem.graph);
    if problem.heuristic.is_some() {
        log::info!("IDDFS ignores the heuristic");
    }
    println!(
        "IDDFS from {} to {} within depth {}",
        settings.start, goal, max_depth
    );

    let found = traced(settings, |recorder| {
        iddfs::search_with(
            &problem.graph,
            settings.start,
            goal,
            max_depth,
            &settings.options,
            recorder,
        )
    })?;

    print!(
        "{}",
        report::depth(&problem.graph, found.as_ref(), max_depth)
    );
    Ok(())
}

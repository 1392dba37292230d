#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use paste::paste;
use searcher::{CostMatrix, Graphable, Node, SearchOptions};
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::time::Duration;

pub mod input;
mod report;
mod solvers;

pub use input::Problem;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&Problem, &Settings) -> Result<(), Error>) + Send + Sync + 'static>;

macro_rules! algorithm {
    ($name:ident) => {
        paste! {
            (stringify!($name), Box::new(solvers::[<solve_ $name>]) as Actor)
        }
    };
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let mut s: HashMap<&'static str, Actor> = HashMap::new();
        let algorithms: Vec<(&'static str, Actor)> =
            vec![algorithm!(astar), algorithm!(idastar), algorithm!(iddfs)];

        for (name, func) in algorithms.into_iter() {
            s.insert(name, func);
        }

        s
    };
}

/// How to run a search, gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub start: Node,

    /// Defaults to the last node of the graph.
    pub goal: Option<Node>,

    /// Defaults to the number of nodes in the graph.
    pub max_depth: Option<usize>,

    /// Print every step of the search.
    pub trace: bool,

    pub options: SearchOptions,
}

impl Settings {
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut options = SearchOptions::default();
        if matches.is_present("limit") {
            options = options.with_limit(value_t!(matches, "limit", usize)?);
        }
        if matches.is_present("timeout") {
            let seconds = value_t!(matches, "timeout", f64)?;
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(CliError::InvalidTimeout(seconds).into());
            }
            let timeout = Duration::try_from_secs_f64(seconds)
                .map_err(|_| CliError::InvalidTimeout(seconds))?;
            options = options.with_timeout(timeout);
        }
        if matches.is_present("ceiling") {
            let ceiling = value_t!(matches, "ceiling", f64)?;
            if !ceiling.is_finite() || ceiling < 0.0 {
                return Err(CliError::InvalidCeiling(ceiling).into());
            }
            options = options.with_ceiling(ceiling);
        }
        if matches.is_present("progress") {
            options = options.with_verbose(value_t!(matches, "progress", usize)?);
        }

        Ok(Settings {
            start: value_t!(matches, "start", usize)?,
            goal: match matches.value_of("goal") {
                Some(_) => Some(value_t!(matches, "goal", usize)?),
                None => None,
            },
            max_depth: match matches.value_of("max-depth") {
                Some(_) => Some(value_t!(matches, "max-depth", usize)?),
                None => None,
            },
            trace: matches.is_present("trace"),
            options,
        })
    }

    pub fn goal(&self, graph: &CostMatrix) -> Node {
        self.goal.unwrap_or(graph.len().saturating_sub(1))
    }

    pub fn max_depth(&self, graph: &CostMatrix) -> usize {
        self.max_depth.unwrap_or(graph.len())
    }
}

fn app() -> App<'static, 'static> {
    App::new("Graph Search")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through a cost matrix with A*, IDA* or IDDFS")
        .arg(
            Arg::with_name("algorithm")
                .value_name("ALGORITHM")
                .required(true)
                .takes_value(true)
                .possible_values(&["astar", "idastar", "iddfs"]),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Cost matrix to search, or - for stdin. Uses a sample when omitted.")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .short("s")
                .value_name("NODE")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .short("g")
                .value_name("NODE")
                .help("Defaults to the last node")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .short("d")
                .value_name("EDGES")
                .help("Deepest IDDFS limit. Defaults to the number of nodes")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .short("t")
                .help("Print every step of the search"),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after this many steps")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Give up after this much time")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ceiling")
                .long("ceiling")
                .value_name("COST")
                .help("Highest IDA* threshold to try")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("STEPS")
                .help("Log progress every this many steps")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, repeat for even more"),
        )
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

pub fn driver() -> Result<(), Error> {
    let matches = app().get_matches();
    init_logging(matches.occurrences_of("verbose"));

    let algorithm = matches
        .value_of("algorithm")
        .ok_or_else(|| CliError::AlgorithmNotFound(String::new()))?;
    let settings = Settings::from_matches(&matches)?;

    let problem = match get_input_reader(matches.value_of("input"))? {
        Some(reader) => Problem::read(reader)?,
        None => Problem::sample(algorithm),
    };

    match SOLVERS.get(algorithm) {
        None => Err(CliError::AlgorithmNotFound(algorithm.to_string()).into()),
        Some(actor) => actor(&problem, &settings),
    }
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

/// Open the named input, where `-` is stdin. `None` when no input was named.
pub fn get_input_reader(filename: Option<&str>) -> Result<Option<BoxedRead>, Error> {
    let reader: BoxedRead = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| CliError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
        None => return Ok(None),
    };
    Ok(Some(reader))
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No algorithm named {0:?}")]
    AlgorithmNotFound(String),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Line {line}: can't read {token:?} as a cost")]
    InvalidEntry { line: usize, token: String },

    #[error("Line {0}: heuristic given more than once")]
    DuplicateHeuristic(usize),

    #[error("No matrix rows in input")]
    EmptyInput,

    #[error("Timeout must be a non-negative number of seconds, not {0}")]
    InvalidTimeout(f64),

    #[error("Ceiling must be a non-negative cost, not {0}")]
    InvalidCeiling(f64),
}

#[cfg(test)]
mod tests {

    use super::*;

    fn settings(args: &[&str]) -> Settings {
        let matches = app().get_matches_from(args);
        Settings::from_matches(&matches).unwrap()
    }

    #[test]
    fn every_algorithm_has_a_solver() {
        for name in &["astar", "idastar", "iddfs"] {
            assert!(SOLVERS.contains_key(name), "missing {}", name);
        }
    }

    #[test]
    fn defaults() {
        let s = settings(&["graphsearch", "astar"]);
        let graph = searcher::samples::weighted();
        assert_eq!(s.start, 0);
        assert_eq!(s.goal(&graph), 6);
        assert_eq!(s.max_depth(&graph), 7);
        assert!(!s.trace);
        assert!(s.options.limit.is_none());
        assert!(s.options.ceiling.is_none());
    }

    #[test]
    fn flags_become_options() {
        let s = settings(&[
            "graphsearch",
            "idastar",
            "-",
            "--start",
            "1",
            "--goal",
            "3",
            "--trace",
            "--limit",
            "50",
            "--timeout",
            "1.5",
            "--ceiling",
            "20",
            "--progress",
            "10",
        ]);
        assert_eq!(s.start, 1);
        assert_eq!(s.goal, Some(3));
        assert!(s.trace);
        assert_eq!(s.options.limit, Some(50));
        assert_eq!(s.options.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(s.options.ceiling, Some(20.0));
        assert_eq!(s.options.verbose, Some(10));
    }

    #[test]
    fn bad_number() {
        let matches = app().get_matches_from(&["graphsearch", "iddfs", "--max-depth", "deep"]);
        assert!(Settings::from_matches(&matches).is_err());
    }

    fn rejected(args: &[&str]) -> CliError {
        let matches = app().get_matches_from(args);
        Settings::from_matches(&matches)
            .unwrap_err()
            .downcast::<CliError>()
            .unwrap()
    }

    #[test]
    fn timeout_out_of_range() {
        for value in &["1e20", "-1", "NaN"] {
            let flag = format!("--timeout={}", value);
            let err = rejected(&["graphsearch", "astar", flag.as_str()]);
            assert!(matches!(err, CliError::InvalidTimeout(_)), "{}", value);
        }
    }

    #[test]
    fn ceiling_out_of_range() {
        for value in &["NaN", "-3", "inf"] {
            let flag = format!("--ceiling={}", value);
            let err = rejected(&["graphsearch", "idastar", flag.as_str()]);
            assert!(matches!(err, CliError::InvalidCeiling(_)), "{}", value);
        }
    }

    #[test]
    fn missing_input_file() {
        let err = get_input_reader(Some("no/such/matrix.txt")).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputNotFound(..))
        ));
        assert!(get_input_reader(None).unwrap().is_none());
    }

    #[test]
    fn solvers_run_on_samples() {
        for name in &["astar", "idastar", "iddfs"] {
            let problem = Problem::sample(name);
            let solver = SOLVERS.get(name).unwrap();
            solver(&problem, &Settings::default()).unwrap();
        }
    }
}

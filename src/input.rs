//! Problems read from text: a cost matrix, and optionally a heuristic.
//!
//! ```text
//! # weighted sample
//! 0   2   4   inf
//! 2   0   1   7
//! 4,  1,  0,  -
//! x   7   -   0
//! h: 3 2 2 0
//! ```

use anyhow::Error;
use lazy_static::lazy_static;
use regex::Regex;
use searcher::{samples, Cost, CostMatrix, Graphable, Heuristic, NO_EDGE};

use std::io::Read;
use std::str::FromStr;

use crate::CliError;

lazy_static! {
    static ref HEURISTIC: Regex = Regex::new(r"^h(?:euristic)?\s*:\s*(.*)$").unwrap();
    static ref SEPARATOR: Regex = Regex::new(r"[\s,]+").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub graph: CostMatrix,
    pub heuristic: Option<Heuristic>,
}

impl Problem {
    /// The built-in problem for an algorithm.
    pub fn sample(algorithm: &str) -> Self {
        match algorithm {
            "iddfs" => Problem {
                graph: samples::unweighted(),
                heuristic: None,
            },
            _ => Problem {
                graph: samples::weighted(),
                heuristic: Some(samples::heuristic()),
            },
        }
    }

    pub fn read(mut reader: Box<dyn Read>) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// The heuristic to search with, falling back to all zeros.
    pub fn heuristic(&self) -> Heuristic {
        match &self.heuristic {
            Some(h) => h.clone(),
            None => {
                log::warn!("No heuristic given, searching with h = 0");
                Heuristic::zero(self.graph.len())
            }
        }
    }
}

fn parse_cost(line: usize, token: &str) -> Result<Cost, CliError> {
    match token.to_ascii_lowercase().as_str() {
        "inf" | "infinity" | "-" | "x" => Ok(NO_EDGE),
        _ => token.parse().map_err(|_| CliError::InvalidEntry {
            line,
            token: token.to_string(),
        }),
    }
}

fn parse_costs(line: usize, text: &str) -> Result<Vec<Cost>, CliError> {
    SEPARATOR
        .split(text.trim())
        .filter(|token| !token.is_empty())
        .map(|token| parse_cost(line, token))
        .collect()
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut estimates = None;

        for (index, raw) in s.lines().enumerate() {
            let line = index + 1;
            let text = raw.split('#').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }

            match HEURISTIC.captures(text) {
                Some(cap) => {
                    if estimates.is_some() {
                        return Err(CliError::DuplicateHeuristic(line).into());
                    }
                    estimates = Some(parse_costs(line, &cap[1])?);
                }
                None => rows.push(parse_costs(line, text)?),
            }
        }

        if rows.is_empty() {
            return Err(CliError::EmptyInput.into());
        }

        let graph = CostMatrix::new(rows)?;
        let heuristic = estimates.map(Heuristic::new).transpose()?;
        if let Some(h) = &heuristic {
            h.check(&graph)?;
        }

        Ok(Problem { graph, heuristic })
    }
}

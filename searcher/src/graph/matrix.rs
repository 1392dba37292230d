use super::traits::{Graphable, Neighbors};
use super::{Cost, Node, NO_EDGE};
use crate::errors::{Result, SearchError};

/// A dense table of edge costs.
///
/// Entry `(i, j)` holds the cost of travelling from `i` to `j`, or
/// [NO_EDGE] when there is no such edge. Costs are finite and non-negative.
/// The diagonal may hold anything; self-loops are never traversed.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<Cost>,
}

fn validate(from: Node, to: Node, cost: Cost) -> Result<Cost> {
    if cost.is_nan() || cost < 0.0 {
        Err(SearchError::InvalidCost { from, to, cost })
    } else {
        Ok(cost)
    }
}

impl CostMatrix {
    /// Build a matrix from its rows, which must form a square.
    pub fn new(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let size = rows.len();
        let mut costs = Vec::with_capacity(size * size);

        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SearchError::NotSquare {
                    row: from,
                    found: row.len(),
                    size,
                });
            }
            for (to, cost) in row.into_iter().enumerate() {
                costs.push(validate(from, to, cost)?);
            }
        }

        Ok(Self { size, costs })
    }

    /// Build a matrix from an edge list over `size` nodes.
    ///
    /// When `symmetric` is set, each edge is also added in reverse. If the
    /// same edge is listed twice, the cheaper cost is kept.
    pub fn from_edges(size: usize, edges: &[(Node, Node, Cost)], symmetric: bool) -> Result<Self> {
        let mut matrix = Self {
            size,
            costs: vec![NO_EDGE; size * size],
        };
        for node in 0..size {
            matrix.costs[node * size + node] = 0.0;
        }

        for &(from, to, cost) in edges {
            matrix.check_node(from)?;
            matrix.check_node(to)?;
            let cost = validate(from, to, cost)?;

            matrix.insert(from, to, cost);
            if symmetric {
                matrix.insert(to, from, cost);
            }
        }

        Ok(matrix)
    }

    /// Build an unweighted matrix from an adjacency table, where any
    /// non-zero entry is an edge of cost 1.
    pub fn from_adjacency(rows: &[Vec<u8>]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|&a| if a != 0 { 1.0 } else { NO_EDGE })
                        .collect()
                })
                .collect(),
        )
    }

    fn insert(&mut self, from: Node, to: Node, cost: Cost) {
        let entry = &mut self.costs[from * self.size + to];
        if cost < *entry {
            *entry = cost;
        }
    }

    fn row(&self, node: Node) -> &[Cost] {
        &self.costs[node * self.size..(node + 1) * self.size]
    }

    /// Sum of every finite edge cost, excluding the diagonal.
    pub fn total_cost(&self) -> Cost {
        (0..self.size)
            .flat_map(|node| self.neighbors(node))
            .map(|(_, cost)| cost)
            .sum()
    }
}

impl Graphable for CostMatrix {
    fn len(&self) -> usize {
        self.size
    }

    fn cost(&self, from: Node, to: Node) -> Option<Cost> {
        if !(self.is_node(from) && self.is_node(to)) {
            return None;
        }
        let cost = self.costs[from * self.size + to];
        if cost.is_finite() {
            Some(cost)
        } else {
            None
        }
    }

    fn neighbors(&self, node: Node) -> Neighbors<'_> {
        Box::new(
            self.row(node)
                .iter()
                .copied()
                .enumerate()
                .filter(move |&(to, cost)| to != node && cost.is_finite()),
        )
    }
}

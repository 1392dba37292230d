use std::fmt;

use super::traits::Graphable;
use super::{Cost, Node};

/// A walk through a graph, starting at an origin.
///
/// Alongside each node the path remembers the cost accumulated to reach it,
/// so removing the last node restores the previous cost exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    nodes: Vec<Node>,
    costs: Vec<Cost>,
}

impl GraphPath {
    pub fn new(origin: Node) -> Self {
        Self {
            nodes: vec![origin],
            costs: vec![0.0],
        }
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of this path extended by one edge.
    pub fn step(&self, node: Node, cost: Cost) -> Self {
        let mut nextpath = self.clone();
        nextpath.push(node, cost);
        nextpath
    }

    pub fn push(&mut self, node: Node, cost: Cost) {
        let total = self.cost() + cost;
        self.nodes.push(node);
        self.costs.push(total);
    }

    /// Remove the last node. The origin is never removed.
    pub fn pop(&mut self) -> Option<Node> {
        if self.is_empty() {
            return None;
        }
        self.costs.pop();
        self.nodes.pop()
    }

    pub fn origin(&self) -> Node {
        self.nodes[0]
    }

    pub fn destination(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn penultimate(&self) -> Option<Node> {
        let n = self.nodes.len();
        if n > 1 {
            Some(self.nodes[n - 2])
        } else {
            None
        }
    }

    /// Total cost of the edges travelled.
    pub fn cost(&self) -> Cost {
        self.costs[self.costs.len() - 1]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    /// The edges travelled, as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Recompute the cost of this path from the edges of a graph.
    ///
    /// Returns None if the path uses an edge the graph does not have.
    pub fn weigh<G>(&self, graph: &G) -> Option<Cost>
    where
        G: Graphable + ?Sized,
    {
        self.edges()
            .map(|(from, to)| graph.cost(from, to))
            .try_fold(0.0, |total, cost| cost.map(|c| total + c))
    }
}

impl fmt::Display for GraphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.nodes)
    }
}

/// Write nodes as `a -> b -> c`.
pub(crate) fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, " -> ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

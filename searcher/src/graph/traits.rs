use super::{Cost, Node};
use crate::errors::{Result, SearchError};

/// Iterator over the outgoing edges of a node, as `(neighbor, cost)` pairs.
pub type Neighbors<'g> = Box<dyn Iterator<Item = (Node, Cost)> + 'g>;

/// A graph whose nodes are the indices `0..len()`.
///
/// Implementors must enumerate neighbors in ascending node order, and never
/// yield self-loops or absent edges. Search order, and so which of several
/// equally good paths is returned, follows that enumeration.
pub trait Graphable {
    /// Number of nodes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost of the edge from `from` to `to`, if there is one.
    fn cost(&self, from: Node, to: Node) -> Option<Cost>;

    fn neighbors(&self, node: Node) -> Neighbors<'_>;

    fn is_node(&self, node: Node) -> bool {
        node < self.len()
    }

    /// Reject node indices which fall outside of this graph.
    fn check_node(&self, node: Node) -> Result<()> {
        if self.is_node(node) {
            Ok(())
        } else {
            Err(SearchError::InvalidNodeIndex {
                node,
                size: self.len(),
            })
        }
    }
}

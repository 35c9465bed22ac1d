//! Trait definitions for weighted adjacency providers.
//!
//! Algorithms in [`crate::algorithms`] are written against these traits rather
//! than against [`NodeArena`](crate::graph::NodeArena) directly, so any structure
//! that can enumerate weighted outgoing edges by [`NodeId`] can be searched.
//!
//! - [`GraphBase`] - Node count, node enumeration and membership
//! - [`WeightedSuccessors`] - Outgoing edges with their weights

use crate::graph::{NodeId, Weight};

/// Base trait providing core node-store properties.
pub trait GraphBase {
    /// Returns the number of nodes in the store.
    fn node_count(&self) -> usize;

    /// Returns an iterator over every node handle, in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` names a node of this store.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }
}

/// Trait for stores that can enumerate a node's outgoing weighted edges.
///
/// # Examples
///
/// ```rust
/// use shortpath::graph::{NodeArena, WeightedSuccessors};
///
/// let mut nodes = NodeArena::new();
/// let a = nodes.add_node("A");
/// let b = nodes.add_node("B");
/// nodes.add_edge(a, b, 3)?;
///
/// let edges: Vec<_> = nodes.weighted_successors(a).collect();
/// assert_eq!(edges, vec![(b, 3)]);
/// # Ok::<(), shortpath::Error>(())
/// ```
pub trait WeightedSuccessors: GraphBase {
    /// Returns an iterator over `(successor, weight)` pairs of `node`.
    ///
    /// Yields nothing for a handle the store does not contain. No ordering is
    /// guaranteed.
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)>;
}

//! Node handles and nodes with weighted adjacency.
//!
//! This module provides [`NodeId`], the handle that gives a node its identity,
//! and [`Node`], which pairs an opaque payload with a map from neighbor handles
//! to edge weights.

use std::collections::HashMap;
use std::fmt;

/// Integer cost of traversing an edge.
///
/// The shortest-path search requires non-negative weights, but nothing at the
/// node level enforces it.
pub type Weight = i64;

/// Weight used by [`Node::add_edge_default`].
pub const DEFAULT_WEIGHT: Weight = 0;

/// Value returned by [`Node::edge_weight_or_sentinel`] when no edge exists.
///
/// The same value is a legal stored weight, so it only means "absent" after
/// [`Node::has_edge`] has returned `false`.
pub const MISSING_EDGE_SENTINEL: Weight = -1;

/// A strongly-typed handle for a node stored in a [`NodeArena`](crate::graph::NodeArena).
///
/// Handles are assigned sequentially from 0 by
/// [`NodeArena::add_node`](crate::graph::NodeArena::add_node). A handle is the
/// node's identity: adjacency maps, graph vertex lists and distance maps are all
/// keyed by it, so two nodes with equal payloads are still distinct.
///
/// # Examples
///
/// ```rust
/// use shortpath::graph::{NodeArena, NodeId};
///
/// let mut nodes = NodeArena::new();
/// let first = nodes.add_node("same");
/// let second = nodes.add_node("same");
///
/// assert_eq!(first, NodeId::new(0));
/// assert_ne!(first, second);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a handle from a raw index.
    ///
    /// Intended for tests and for rebuilding handles from stored indices.
    /// Nothing ties the result to an arena; operations that need the node
    /// report [`Error::NodeNotFound`](crate::Error::NodeNotFound) for handles
    /// that were never handed out.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// A graph node: an opaque payload plus a weighted adjacency map.
///
/// Each neighbor appears at most once in the adjacency map; adding an edge to a
/// neighbor that already has one replaces its weight. Self-edges are allowed and
/// get no special treatment. There is no way to remove an edge.
///
/// Edges are directed. An undirected connection is two edges, one on each node,
/// which the caller adds explicitly (or through
/// [`NodeArena::connect`](crate::graph::NodeArena::connect)).
///
/// # Examples
///
/// ```rust
/// use shortpath::graph::{Node, NodeId};
///
/// let mut node = Node::new("hub");
/// let other = NodeId::new(1);
///
/// assert_eq!(node.add_edge(other, 5), None);
/// assert_eq!(node.add_edge(other, 8), Some(5)); // overwritten
/// assert_eq!(node.edge_weight(other), Some(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    data: T,
    edges: HashMap<NodeId, Weight>,
}

impl<T> Node<T> {
    /// Creates a node holding `data` and no edges.
    #[must_use]
    pub fn new(data: T) -> Self {
        Node {
            data,
            edges: HashMap::new(),
        }
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the payload mutably.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Inserts an edge to `neighbor`, or overwrites the weight of the existing one.
    ///
    /// The sign of `weight` is not checked.
    ///
    /// # Returns
    ///
    /// The weight that was replaced, if an edge to `neighbor` already existed.
    pub fn add_edge(&mut self, neighbor: NodeId, weight: Weight) -> Option<Weight> {
        self.edges.insert(neighbor, weight)
    }

    /// Inserts an edge to `neighbor` with [`DEFAULT_WEIGHT`].
    pub fn add_edge_default(&mut self, neighbor: NodeId) -> Option<Weight> {
        self.add_edge(neighbor, DEFAULT_WEIGHT)
    }

    /// Returns `true` if this node has an edge to `neighbor`.
    #[must_use]
    pub fn has_edge(&self, neighbor: NodeId) -> bool {
        self.edges.contains_key(&neighbor)
    }

    /// Returns the weight of the edge to `neighbor`, or `None` if there is none.
    #[must_use]
    pub fn edge_weight(&self, neighbor: NodeId) -> Option<Weight> {
        self.edges.get(&neighbor).copied()
    }

    /// Returns the weight of the edge to `neighbor`, or [`MISSING_EDGE_SENTINEL`].
    ///
    /// An edge stored with weight `-1` is indistinguishable from a missing edge
    /// here; use [`has_edge`](Self::has_edge) or [`edge_weight`](Self::edge_weight)
    /// when that matters.
    #[must_use]
    pub fn edge_weight_or_sentinel(&self, neighbor: NodeId) -> Weight {
        self.edge_weight(neighbor).unwrap_or(MISSING_EDGE_SENTINEL)
    }

    /// Returns `Some(neighbor)` if this node has an edge to it, `None` otherwise.
    #[must_use]
    pub fn neighbor(&self, neighbor: NodeId) -> Option<NodeId> {
        self.has_edge(neighbor).then_some(neighbor)
    }

    /// Returns an iterator over the handles of all adjacent nodes.
    ///
    /// No ordering is guaranteed.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.keys().copied()
    }

    /// Returns an iterator over all `(neighbor, weight)` pairs.
    ///
    /// No ordering is guaranteed.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.edges.iter().map(|(&neighbor, &weight)| (neighbor, weight))
    }

    /// Returns the number of distinct neighbors.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_roundtrip() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let raw: usize = node.into();
        assert_eq!(raw, 42);
        assert_eq!(NodeId::from(raw), node);
    }

    #[test]
    fn test_node_id_ordering() {
        let mut ids = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(5);
        assert_eq!(format!("{node:?}"), "NodeId(5)");
        assert_eq!(format!("{node}"), "n5");
    }

    #[test]
    fn test_new_node_has_no_edges() {
        let node = Node::new(7);
        assert_eq!(*node.data(), 7);
        assert_eq!(node.degree(), 0);
        assert_eq!(node.neighbors().count(), 0);
    }

    #[test]
    fn test_data_mut() {
        let mut node = Node::new(String::from("a"));
        node.data_mut().push('b');
        assert_eq!(node.data(), "ab");
    }

    #[test]
    fn test_add_edge_overwrites() {
        let mut node = Node::new(());
        let other = NodeId::new(1);

        assert_eq!(node.add_edge(other, 3), None);
        assert_eq!(node.add_edge(other, 10), Some(3));
        assert_eq!(node.edge_weight(other), Some(10));
        assert_eq!(node.degree(), 1);
    }

    #[test]
    fn test_add_edge_default_weight() {
        let mut node = Node::new(());
        let other = NodeId::new(1);

        node.add_edge_default(other);
        assert!(node.has_edge(other));
        assert_eq!(node.edge_weight(other), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_has_edge_disambiguates_sentinel() {
        let mut node = Node::new(());
        let weighted_minus_one = NodeId::new(1);
        let weighted_zero = NodeId::new(2);
        let absent = NodeId::new(3);

        node.add_edge(weighted_minus_one, -1);
        node.add_edge(weighted_zero, 0);

        assert_eq!(node.edge_weight_or_sentinel(weighted_minus_one), -1);
        assert_eq!(node.edge_weight_or_sentinel(absent), MISSING_EDGE_SENTINEL);
        assert!(node.has_edge(weighted_minus_one));
        assert!(node.has_edge(weighted_zero));
        assert!(!node.has_edge(absent));

        assert_eq!(node.edge_weight(weighted_minus_one), Some(-1));
        assert_eq!(node.edge_weight(absent), None);
    }

    #[test]
    fn test_self_edge() {
        let mut node = Node::new(());
        let me = NodeId::new(0);

        node.add_edge(me, 4);
        assert!(node.has_edge(me));
        assert_eq!(node.neighbor(me), Some(me));
    }

    #[test]
    fn test_neighbor_lookup() {
        let mut node = Node::new(());
        node.add_edge(NodeId::new(1), 2);

        assert_eq!(node.neighbor(NodeId::new(1)), Some(NodeId::new(1)));
        assert_eq!(node.neighbor(NodeId::new(2)), None);
    }

    #[test]
    fn test_neighbors_and_edges() {
        let mut node = Node::new(());
        node.add_edge(NodeId::new(1), 2);
        node.add_edge(NodeId::new(2), 4);

        let neighbors: HashSet<NodeId> = node.neighbors().collect();
        assert_eq!(neighbors, HashSet::from([NodeId::new(1), NodeId::new(2)]));

        let mut edges: Vec<(NodeId, Weight)> = node.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(NodeId::new(1), 2), (NodeId::new(2), 4)]);
    }
}

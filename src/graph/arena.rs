//! Node storage with handle-based identity.
//!
//! This module provides [`NodeArena`], the owner of every [`Node`] in a
//! program. The arena assigns each node a sequential [`NodeId`] and resolves
//! handles back to nodes. Edges are stored on the nodes themselves; the arena
//! only validates that both endpoints exist before inserting one.

use crate::{
    graph::{
        node::{Node, NodeId, Weight, DEFAULT_WEIGHT},
        traits::{GraphBase, WeightedSuccessors},
    },
    Error, Result,
};

/// Owner of node storage.
///
/// A `NodeArena<T>` holds nodes carrying payloads of type `T`. It is the single
/// source of [`NodeId`]s; [`Graph`](crate::graph::Graph) views and distance maps
/// refer back to it by handle, so the same node can appear in several graphs and
/// be shared with the caller without any reference counting.
///
/// Nodes are never removed, so every handle the arena returns stays valid for the
/// arena's lifetime.
///
/// # Thread Safety
///
/// `NodeArena<T>` is [`Send`] and [`Sync`] when `T` is. Build it on one thread,
/// then share it immutably for searching.
///
/// # Examples
///
/// ```rust
/// use shortpath::graph::NodeArena;
///
/// let mut nodes = NodeArena::new();
/// let a = nodes.add_node("A");
/// let b = nodes.add_node("B");
///
/// nodes.add_edge(a, b, 7)?;
/// assert!(nodes.has_edge(a, b));
/// assert!(!nodes.has_edge(b, a)); // edges are directed
///
/// nodes.connect(a, b, 7)?;
/// assert!(nodes.has_edge(b, a));
/// # Ok::<(), shortpath::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a node holding `data` and returns its handle.
    ///
    /// Handles are assigned sequentially starting from `NodeId(0)`.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Returns the node behind `id`, if it exists.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Returns the node behind `id` mutably, if it exists.
    ///
    /// Edges inserted through the returned node are not validated: the
    /// neighbor handle may name a node that does not exist. The search treats
    /// such a neighbor as a node without edges.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.index())
    }

    /// Returns the payload of the node behind `id`, if it exists.
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::data)
    }

    /// Inserts a directed edge `from -> to`, or overwrites its weight.
    ///
    /// # Returns
    ///
    /// The previous weight of the edge, if one existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either `from` or `to` is not a node of
    /// this arena. The arena is left unchanged in that case.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<Option<Weight>> {
        self.ensure_exists(to)?;
        let source = self.nodes.get_mut(from.index()).ok_or(Error::NodeNotFound(from))?;
        Ok(source.add_edge(to, weight))
    }

    /// Inserts a directed edge `from -> to` with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either endpoint does not exist.
    pub fn add_edge_default(&mut self, from: NodeId, to: NodeId) -> Result<Option<Weight>> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Inserts `a -> b` and `b -> a`, both with `weight`.
    ///
    /// This is shorthand for two [`add_edge`](Self::add_edge) calls; the graph
    /// stays directed and either edge can later be overwritten independently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either endpoint does not exist, in
    /// which case neither edge is inserted.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        self.ensure_exists(a)?;
        self.ensure_exists(b)?;
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)?;
        Ok(())
    }

    /// Returns `true` if there is an edge `from -> to`.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.node(from).is_some_and(|node| node.has_edge(to))
    }

    /// Returns the weight of the edge `from -> to`, if there is one.
    #[must_use]
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.node(from).and_then(|node| node.edge_weight(to))
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` names a node of this arena.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Returns an iterator over every handle, in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over every node together with its handle.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    fn ensure_exists(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(id))
        }
    }
}

impl<T> GraphBase for NodeArena<T> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<T> WeightedSuccessors for NodeArena<T> {
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> {
        self.nodes
            .get(node.index())
            .into_iter()
            .flat_map(|source| source.edges())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pair() -> (NodeArena<&'static str>, NodeId, NodeId) {
        let mut nodes = NodeArena::new();
        let a = nodes.add_node("A");
        let b = nodes.add_node("B");
        (nodes, a, b)
    }

    #[test]
    fn test_new_arena_is_empty() {
        let nodes: NodeArena<()> = NodeArena::new();
        assert!(nodes.is_empty());
        assert_eq!(nodes.node_count(), 0);

        let nodes: NodeArena<()> = NodeArena::with_capacity(16);
        assert!(nodes.is_empty());

        let nodes: NodeArena<()> = NodeArena::default();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_add_node_sequential_ids() {
        let (nodes, a, b) = make_pair();
        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(nodes.node_count(), 2);
        assert_eq!(nodes.data(a), Some(&"A"));
        assert_eq!(nodes.data(NodeId::new(9)), None);
    }

    #[test]
    fn test_equal_payloads_are_distinct_nodes() {
        let mut nodes = NodeArena::new();
        let first = nodes.add_node(1);
        let second = nodes.add_node(1);

        nodes.add_edge(first, second, 2).unwrap();
        assert!(nodes.has_edge(first, second));
        assert!(!nodes.has_edge(second, first));
    }

    #[test]
    fn test_add_edge_overwrites() {
        let (mut nodes, a, b) = make_pair();

        assert_eq!(nodes.add_edge(a, b, 5).unwrap(), None);
        assert_eq!(nodes.add_edge(a, b, 9).unwrap(), Some(5));
        assert_eq!(nodes.edge_weight(a, b), Some(9));
        assert_eq!(nodes.node(a).unwrap().degree(), 1);
    }

    #[test]
    fn test_add_edge_default() {
        let (mut nodes, a, b) = make_pair();

        nodes.add_edge_default(a, b).unwrap();
        assert_eq!(nodes.edge_weight(a, b), Some(0));
    }

    #[test]
    fn test_add_edge_unknown_nodes() {
        let (mut nodes, a, _) = make_pair();
        let ghost = NodeId::new(10);

        assert_eq!(nodes.add_edge(a, ghost, 1), Err(Error::NodeNotFound(ghost)));
        assert_eq!(nodes.add_edge(ghost, a, 1), Err(Error::NodeNotFound(ghost)));
        assert_eq!(nodes.node(a).unwrap().degree(), 0);
    }

    #[test]
    fn test_connect_mirrors_edge() {
        let (mut nodes, a, b) = make_pair();

        nodes.connect(a, b, 4).unwrap();
        assert_eq!(nodes.edge_weight(a, b), Some(4));
        assert_eq!(nodes.edge_weight(b, a), Some(4));

        // Each direction stays independently writable
        nodes.add_edge(a, b, 1).unwrap();
        assert_eq!(nodes.edge_weight(a, b), Some(1));
        assert_eq!(nodes.edge_weight(b, a), Some(4));
    }

    #[test]
    fn test_connect_unknown_node_inserts_nothing() {
        let (mut nodes, a, _) = make_pair();
        let ghost = NodeId::new(3);

        assert!(nodes.connect(a, ghost, 1).is_err());
        assert_eq!(nodes.node(a).unwrap().degree(), 0);
    }

    #[test]
    fn test_node_mut_allows_unvalidated_edges() {
        let (mut nodes, a, _) = make_pair();
        let ghost = NodeId::new(50);

        nodes.node_mut(a).unwrap().add_edge(ghost, 1);
        assert!(nodes.has_edge(a, ghost));
        assert!(!nodes.contains(ghost));
    }

    #[test]
    fn test_iterators() {
        let (mut nodes, a, b) = make_pair();
        nodes.add_edge(a, b, 3).unwrap();

        let ids: Vec<NodeId> = nodes.node_ids().collect();
        assert_eq!(ids, vec![a, b]);

        let labels: Vec<&str> = nodes.nodes().map(|(_, node)| *node.data()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_weighted_successors_trait() {
        let (mut nodes, a, b) = make_pair();
        nodes.add_edge(a, b, 3).unwrap();

        let succ: Vec<_> = nodes.weighted_successors(a).collect();
        assert_eq!(succ, vec![(b, 3)]);
        assert_eq!(nodes.weighted_successors(NodeId::new(99)).count(), 0);
        assert!(GraphBase::contains_node(&nodes, b));
        assert!(!GraphBase::contains_node(&nodes, NodeId::new(2)));
    }
}

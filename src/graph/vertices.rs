//! The vertex-list graph view.
//!
//! A [`Graph`] is an ordered list of [`NodeId`]s. It owns no nodes and stores no
//! edges: both live in a [`NodeArena`](crate::graph::NodeArena). The list only
//! decides which nodes the shortest-path search reports even when they turn out
//! to be unreachable.

use std::slice;

use crate::{
    algorithms::{dijkstra, DistanceMap},
    graph::{NodeId, WeightedSuccessors},
    Result,
};

/// An ordered list of node handles over a node store.
///
/// Vertices are kept in insertion order. Duplicates are neither prevented nor
/// collapsed, and handles are not checked against any arena: a graph is just a
/// view, and the nodes it lists may have edges to nodes it does not list.
///
/// # Examples
///
/// ```rust
/// use shortpath::graph::{Graph, NodeArena};
///
/// let mut nodes = NodeArena::new();
/// let a = nodes.add_node('a');
/// let b = nodes.add_node('b');
///
/// let mut graph = Graph::new();
/// graph.add_vertex(a);
/// graph.add_vertex(b);
/// graph.add_vertex(a); // duplicates are kept
///
/// assert_eq!(graph.vertices(), &[a, b, a]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<NodeId>,
}

impl Graph {
    /// Creates a graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
        }
    }

    /// Creates a graph with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Appends `node` to the vertex list.
    pub fn add_vertex(&mut self, node: NodeId) {
        self.vertices.push(node);
    }

    /// Returns the vertex list in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[NodeId] {
        &self.vertices
    }

    /// Returns the live vertex list for in-place edits.
    pub fn vertices_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.vertices
    }

    /// Returns the number of entries in the vertex list, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the vertex list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `node` appears in the vertex list.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.vertices.contains(&node)
    }

    /// Returns an iterator over the vertex list.
    pub fn iter(&self) -> slice::Iter<'_, NodeId> {
        self.vertices.iter()
    }

    /// Runs [`dijkstra`] over this graph from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `start`
    /// is not a node of `nodes`.
    pub fn shortest_paths<G>(&self, nodes: &G, start: NodeId) -> Result<DistanceMap>
    where
        G: WeightedSuccessors,
    {
        dijkstra(nodes, self, start)
    }
}

impl FromIterator<NodeId> for Graph {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Graph {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl Extend<NodeId> for Graph {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a NodeId;
    type IntoIter = slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

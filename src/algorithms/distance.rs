//! Search results.
//!
//! [`DistanceMap`] is what [`dijkstra`](crate::algorithms::dijkstra) returns:
//! a map from every node the search has seen to a [`Distance`].

use std::collections::{btree_map, BTreeMap};
use std::fmt;

use crate::graph::{NodeId, Weight};

/// Integer form of [`Distance::Unreached`], as returned by [`Distance::as_sentinel`].
pub const UNREACHED_SENTINEL: Weight = -1;

/// The best known distance from the start node to some node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// Listed in the graph but never reached from the start node.
    Unreached,
    /// Reached with the given total edge weight.
    Reached(Weight),
}

impl Distance {
    /// Returns `true` for [`Distance::Reached`].
    #[must_use]
    pub const fn is_reached(self) -> bool {
        matches!(self, Distance::Reached(_))
    }

    /// Returns the distance if the node was reached.
    #[must_use]
    pub const fn value(self) -> Option<Weight> {
        match self {
            Distance::Reached(distance) => Some(distance),
            Distance::Unreached => None,
        }
    }

    /// Returns the distance, or [`UNREACHED_SENTINEL`] for an unreached node.
    ///
    /// A negative-weight graph can produce a genuine distance of `-1`; this
    /// encoding cannot tell the two apart.
    #[must_use]
    pub const fn as_sentinel(self) -> Weight {
        match self {
            Distance::Reached(distance) => distance,
            Distance::Unreached => UNREACHED_SENTINEL,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sentinel())
    }
}

impl From<Distance> for Option<Weight> {
    fn from(distance: Distance) -> Self {
        distance.value()
    }
}

/// Map from node handle to its [`Distance`] from the start node.
///
/// The map holds every vertex of the searched [`Graph`](crate::graph::Graph),
/// the start node, and every node the search discovered through edges even if
/// the graph does not list it. Iteration is in ascending [`NodeId`] order.
///
/// # Examples
///
/// ```rust
/// use shortpath::prelude::*;
///
/// let mut nodes = NodeArena::new();
/// let a = nodes.add_node("A");
/// let b = nodes.add_node("B");
/// let lonely = nodes.add_node("lonely");
/// nodes.add_edge(a, b, 5)?;
///
/// let graph: Graph = [a, b, lonely].into_iter().collect();
/// let distances = dijkstra(&nodes, &graph, a)?;
///
/// assert_eq!(distances.distance(b), Some(5));
/// assert_eq!(distances.get(lonely), Some(Distance::Unreached));
/// assert_eq!(distances.sentinel(lonely), Some(-1));
/// # Ok::<(), shortpath::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMap {
    entries: BTreeMap<NodeId, Distance>,
}

impl DistanceMap {
    /// Creates a map with every vertex marked [`Distance::Unreached`].
    pub(crate) fn with_vertices(vertices: &[NodeId]) -> Self {
        DistanceMap {
            entries: vertices
                .iter()
                .map(|&node| (node, Distance::Unreached))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, node: NodeId, distance: Distance) {
        self.entries.insert(node, distance);
    }

    /// Returns the recorded distance of `node`, or `None` if the search never saw it.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.entries.get(&node).copied()
    }

    /// Returns the distance of `node` if it was reached.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.get(node).and_then(Distance::value)
    }

    /// Returns the integer distance of `node`, with `-1` for unreached vertices.
    ///
    /// `None` means the node is not part of the map at all.
    #[must_use]
    pub fn sentinel(&self, node: NodeId) -> Option<Weight> {
        self.get(node).map(Distance::as_sentinel)
    }

    /// Returns `true` if the search saw `node`.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    /// Returns the number of nodes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(node, distance)` in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.entries.iter().map(|(&node, &distance)| (node, distance))
    }

    /// Returns an iterator over reached nodes and their distances.
    pub fn reached(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.iter()
            .filter_map(|(node, distance)| distance.value().map(|d| (node, d)))
    }

    /// Returns an iterator over vertices the search never reached.
    pub fn unreached(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, distance)| !distance.is_reached())
            .map(|(node, _)| node)
    }
}

impl<'a> IntoIterator for &'a DistanceMap {
    type Item = (&'a NodeId, &'a Distance);
    type IntoIter = btree_map::Iter<'a, NodeId, Distance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Fixed demonstration graphs.
//!
//! - [`classic`] - The six-node undirected example, searched from `A`
//! - [`triangle`] - A directed zero-weight cycle `a -> b -> c -> a`
//!
//! Both return a [`DemoGraph`], which bundles the arena, the vertex list and the
//! default start node.
//!
//! # Examples
//!
//! ```rust
//! use shortpath::demo;
//!
//! let demo = demo::classic()?;
//! let distances = demo.run()?;
//!
//! let e = demo.find("E").unwrap();
//! assert_eq!(distances.distance(e), Some(20));
//! # Ok::<(), shortpath::Error>(())
//! ```

use crate::{
    algorithms::{dijkstra, DistanceMap},
    graph::{Graph, NodeArena, NodeId, Weight},
    Result,
};

/// A labelled demonstration graph with a default start node.
#[derive(Debug, Clone)]
pub struct DemoGraph {
    nodes: NodeArena<&'static str>,
    graph: Graph,
    start: NodeId,
}

impl DemoGraph {
    /// Returns the node arena.
    #[must_use]
    pub fn nodes(&self) -> &NodeArena<&'static str> {
        &self.nodes
    }

    /// Returns the vertex list.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the default start node.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Returns the label of `node`.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&'static str> {
        self.nodes.data(node).copied()
    }

    /// Returns the handle of the first node labelled `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .nodes()
            .find(|(_, node)| *node.data() == label)
            .map(|(id, _)| id)
    }

    /// Like [`find`](Self::find), but reports a missing label as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`](crate::Error::GraphError) if no node carries
    /// `label`.
    pub fn node_labelled(&self, label: &str) -> Result<NodeId> {
        self.find(label)
            .ok_or_else(|| graph_error!("no node labelled '{}' in this graph", label))
    }

    /// Searches from the default start node.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dijkstra`].
    pub fn run(&self) -> Result<DistanceMap> {
        self.run_from(self.start)
    }

    /// Searches from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `start`
    /// is not one of this graph's nodes.
    pub fn run_from(&self, start: NodeId) -> Result<DistanceMap> {
        dijkstra(&self.nodes, &self.graph, start)
    }
}

/// Builds the six-node example.
///
/// ```text
///        7        15
///    A ----- B ------- D
///    | \      \10     /|
///  14|  \9     \     /11
///    |   `------ C -' |6
///    |   2 /          |
///    F ---'     9     E
///     `---------------'
/// ```
///
/// Undirected edges (each stored in both directions): A-B 7, A-F 14, A-C 9,
/// C-F 2, C-D 11, B-C 10, B-D 15, E-F 9, E-D 6. All six nodes are listed as
/// vertices and the start node is `A`.
///
/// # Errors
///
/// Never fails in practice; construction goes through the validating arena API.
pub fn classic() -> Result<DemoGraph> {
    const LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
    const EDGES: [(usize, usize, Weight); 9] = [
        (0, 1, 7),
        (0, 5, 14),
        (0, 2, 9),
        (2, 5, 2),
        (2, 3, 11),
        (1, 2, 10),
        (1, 3, 15),
        (4, 5, 9),
        (4, 3, 6),
    ];

    let mut nodes = NodeArena::with_capacity(LABELS.len());
    let ids: Vec<NodeId> = LABELS.iter().map(|&label| nodes.add_node(label)).collect();
    for (a, b, weight) in EDGES {
        nodes.connect(ids[a], ids[b], weight)?;
    }

    let graph: Graph = ids.iter().copied().collect();
    Ok(DemoGraph {
        nodes,
        graph,
        start: ids[0],
    })
}

/// Builds the directed cycle `a -> b -> c -> a` with default (zero) weights.
///
/// All three nodes are listed and the start node is `a`.
///
/// # Errors
///
/// Never fails in practice; construction goes through the validating arena API.
pub fn triangle() -> Result<DemoGraph> {
    let mut nodes = NodeArena::with_capacity(3);
    let a = nodes.add_node("a");
    let b = nodes.add_node("b");
    let c = nodes.add_node("c");

    nodes.add_edge_default(a, b)?;
    nodes.add_edge_default(b, c)?;
    nodes.add_edge_default(c, a)?;

    Ok(DemoGraph {
        nodes,
        graph: [a, b, c].into_iter().collect(),
        start: a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::Distance, Error};

    #[test]
    fn test_classic_shape() {
        let demo = classic().unwrap();
        assert_eq!(demo.nodes().node_count(), 6);
        assert_eq!(demo.graph().len(), 6);
        assert_eq!(demo.label(demo.start()), Some("A"));

        let a = demo.find("A").unwrap();
        let f = demo.find("F").unwrap();
        assert_eq!(demo.nodes().edge_weight(a, f), Some(14));
        assert_eq!(demo.nodes().edge_weight(f, a), Some(14));
    }

    #[test]
    fn test_classic_from_a() {
        let demo = classic().unwrap();
        let distances = demo.run().unwrap();

        let expected = [("A", 0), ("B", 7), ("C", 9), ("D", 20), ("E", 20), ("F", 11)];
        for (label, distance) in expected {
            let node = demo.find(label).unwrap();
            assert_eq!(distances.get(node), Some(Distance::Reached(distance)), "{label}");
        }
        assert_eq!(distances.len(), 6);
    }

    #[test]
    fn test_classic_from_e() {
        let demo = classic().unwrap();
        let e = demo.node_labelled("E").unwrap();
        let distances = demo.run_from(e).unwrap();

        let a = demo.find("A").unwrap();
        let c = demo.find("C").unwrap();
        assert_eq!(distances.distance(e), Some(0));
        assert_eq!(distances.distance(c), Some(11));
        assert_eq!(distances.distance(a), Some(20));
    }

    #[test]
    fn test_node_labelled_missing() {
        let demo = classic().unwrap();
        let err = demo.node_labelled("Z").unwrap_err();
        assert_eq!(
            err,
            Error::GraphError("no node labelled 'Z' in this graph".to_string())
        );
    }

    #[test]
    fn test_triangle() {
        let demo = triangle().unwrap();
        let distances = demo.run().unwrap();

        assert_eq!(distances.len(), 3);
        for (_, distance) in distances.iter() {
            assert_eq!(distance, Distance::Reached(0));
        }
    }
}

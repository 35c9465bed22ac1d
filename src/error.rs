use thiserror::Error;

use crate::graph::NodeId;

/// Builds an [`Error::GraphError`] from a message or a format string.
macro_rules! graph_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::GraphError($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::GraphError(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which covers every error this library can return.
///
/// Graph construction is the only fallible surface: the shortest-path search
/// itself never rejects its input, only handles that do not name a node.
///
/// # Error Categories
///
/// - [`Error::NodeNotFound`] - A [`NodeId`] that the arena never handed out
/// - [`Error::GraphError`] - Any other inconsistency while building a graph
///
/// # Examples
///
/// ```rust
/// use shortpath::{Error, graph::{Graph, NodeArena, NodeId}, algorithms::dijkstra};
///
/// let nodes: NodeArena<()> = NodeArena::new();
/// let graph = Graph::new();
///
/// match dijkstra(&nodes, &graph, NodeId::new(0)) {
///     Ok(_) => unreachable!("the arena is empty"),
///     Err(Error::NodeNotFound(id)) => eprintln!("unknown start node {id}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node handle does not refer to a node of the arena.
    ///
    /// Handles are normally obtained from
    /// [`NodeArena::add_node`](crate::graph::NodeArena::add_node); this error
    /// appears when a handle was fabricated with [`NodeId::new`] or belongs to
    /// a different arena that is larger than this one.
    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),

    /// Graph construction error.
    ///
    /// Raised for structural inconsistencies that are not tied to a single
    /// missing node.
    #[error("{0}")]
    GraphError(String),
}

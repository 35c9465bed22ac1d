//! Weighted node graphs.
//!
//! # Architecture
//!
//! - **Handles**: [`NodeId`] is the identity of a node. Handles are assigned by
//!   the arena and are the keys of every adjacency map, vertex list and
//!   distance map.
//! - **Nodes**: [`Node`] pairs a payload with a map from neighbor handle to
//!   [`Weight`]. Edges are directed and stored on their source node.
//! - **Storage**: [`NodeArena`] owns all nodes and validates handles when edges
//!   are added through it.
//! - **Views**: [`Graph`] is an ordered list of handles. It decides which nodes a
//!   search reports, not which nodes a search can reach.
//! - **Traits**: [`GraphBase`] and [`WeightedSuccessors`] let algorithms run over
//!   any adjacency provider.
//!
//! # Usage Examples
//!
//! ```rust
//! use shortpath::graph::{Graph, NodeArena};
//!
//! let mut nodes = NodeArena::new();
//! let a = nodes.add_node("A");
//! let b = nodes.add_node("B");
//! let hidden = nodes.add_node("hidden");
//!
//! nodes.connect(a, b, 2)?;
//! nodes.add_edge(b, hidden, 1)?;
//!
//! // `hidden` is not listed but still reachable through `b`
//! let graph: Graph = [a, b].into_iter().collect();
//! assert!(!graph.contains(hidden));
//! assert!(nodes.has_edge(b, hidden));
//! # Ok::<(), shortpath::Error>(())
//! ```

mod arena;
mod node;
mod nodeset;
mod traits;
mod vertices;

pub use arena::NodeArena;
pub use node::{Node, NodeId, Weight, DEFAULT_WEIGHT, MISSING_EDGE_SENTINEL};
pub use nodeset::NodeSet;
pub use traits::{GraphBase, WeightedSuccessors};
pub use vertices::Graph;

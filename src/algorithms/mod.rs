//! Shortest-path algorithms.
//!
//! # Available Algorithms
//!
//! - [`dijkstra`] - Single-source shortest paths for non-negative weights
//!
//! # Results
//!
//! - [`DistanceMap`] - Node handle to [`Distance`], in ascending handle order
//! - [`Distance`] - `Reached(weight)` or `Unreached`
//!
//! | Algorithm | Time Complexity | Weights |
//! |-----------|-----------------|---------|
//! | Dijkstra  | O(E log E)      | Non-negative (unchecked) |
//!
//! # Examples
//!
//! ```rust
//! use shortpath::{algorithms::{dijkstra, Distance}, graph::{Graph, NodeArena}};
//!
//! let mut nodes = NodeArena::new();
//! let a = nodes.add_node(1);
//! let b = nodes.add_node(2);
//! let c = nodes.add_node(3);
//! nodes.add_edge(a, b, 3)?;
//!
//! let graph: Graph = [a, b, c].into_iter().collect();
//! let distances = dijkstra(&nodes, &graph, a)?;
//!
//! assert_eq!(distances.get(b), Some(Distance::Reached(3)));
//! assert_eq!(distances.get(c), Some(Distance::Unreached));
//! # Ok::<(), shortpath::Error>(())
//! ```

mod dijkstra;
mod distance;
mod queue;

pub use dijkstra::dijkstra;
pub use distance::{Distance, DistanceMap, UNREACHED_SENTINEL};

// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # shortpath
//!
//! Weighted node graphs and a single-source shortest-path search.
//!
//! `shortpath` keeps nodes in a [`NodeArena`], where each node carries an opaque
//! payload and a weighted adjacency map to other nodes. A [`Graph`] is a plain,
//! ordered list of node handles layered over the arena, and
//! [`algorithms::dijkstra`] computes the distance from a start node to every node
//! it can see.
//!
//! ## Quick Start
//!
//! ```rust
//! use shortpath::prelude::*;
//!
//! let mut nodes = NodeArena::new();
//! let a = nodes.add_node("A");
//! let b = nodes.add_node("B");
//! let c = nodes.add_node("C");
//!
//! nodes.connect(a, b, 4)?;
//! nodes.connect(b, c, 3)?;
//! nodes.connect(a, c, 9)?;
//!
//! let graph: Graph = [a, b, c].into_iter().collect();
//! let distances = dijkstra(&nodes, &graph, a)?;
//!
//! assert_eq!(distances.get(c), Some(Distance::Reached(7)));
//! # Ok::<(), shortpath::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Node handles, nodes, the node arena, the vertex-list graph view
//! - [`algorithms`] - Dijkstra's algorithm and its distance map
//! - [`demo`] - Fixed demonstration graphs
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Identity
//!
//! Nodes are identified by the [`NodeId`] handle the arena assigns at creation,
//! never by payload. Two nodes holding equal data are still distinct, and the
//! same node can be listed in any number of graphs.
//!
//! ## Edge Weights
//!
//! Weights are signed integers ([`graph::Weight`]). The shortest-path search
//! requires every weight it relaxes to be non-negative but does not check this;
//! negative weights are stored as given and produce unspecified distances.
//!
//! ## Logging
//!
//! The library logs through the [`log`](https://docs.rs/log) facade. Install any
//! logger (the `shortpath` binary uses `env_logger`) to see search statistics at
//! `debug` level and individual queue pops at `trace` level.
#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use shortpath::prelude::*;
///
/// let mut nodes = NodeArena::new();
/// let start = nodes.add_node(1);
/// let graph: Graph = std::iter::once(start).collect();
///
/// let distances = dijkstra(&nodes, &graph, start)?;
/// assert_eq!(distances.get(start), Some(Distance::Reached(0)));
/// # Ok::<(), shortpath::Error>(())
/// ```
pub mod prelude;

/// Node handles, nodes with weighted adjacency, the node arena and the graph view.
///
/// # Key Types
///
/// - [`graph::NodeId`] - Strongly-typed node handle
/// - [`graph::Node`] - Payload plus adjacency map
/// - [`graph::NodeArena`] - Owns node storage and hands out handles
/// - [`graph::Graph`] - Ordered list of node handles
pub mod graph;

/// Shortest-path search over weighted node graphs.
///
/// See [`algorithms::dijkstra`] for the exact relaxation rules.
pub mod algorithms;

/// Fixed demonstration graphs used by the `shortpath` binary, tests and benchmarks.
pub mod demo;

/// `shortpath` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `shortpath` Error type
///
/// # Examples
///
/// ```rust
/// use shortpath::{Error, graph::{NodeArena, NodeId}};
///
/// let mut nodes: NodeArena<&str> = NodeArena::new();
/// let a = nodes.add_node("A");
///
/// match nodes.add_edge(a, NodeId::new(42), 1) {
///     Err(Error::NodeNotFound(id)) => assert_eq!(id, NodeId::new(42)),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
pub use error::Error;

pub use algorithms::{dijkstra, Distance, DistanceMap};
pub use graph::{Graph, Node, NodeArena, NodeId};

//! # shortpath Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions of the library. Import it to build graphs and search them without
//! spelling out module paths.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all shortpath operations
pub use crate::Error;

/// The result type used throughout shortpath
pub use crate::Result;

// ================================================================================================
// Graph Construction
// ================================================================================================

/// Node handles, nodes and their storage
pub use crate::graph::{Node, NodeArena, NodeId, Weight};

/// The vertex-list view searched by the algorithms
pub use crate::graph::Graph;

/// Traits for custom adjacency providers
pub use crate::graph::{GraphBase, WeightedSuccessors};

// ================================================================================================
// Shortest Paths
// ================================================================================================

/// Single-source shortest paths
pub use crate::algorithms::dijkstra;

/// Search results
pub use crate::algorithms::{Distance, DistanceMap};

//! Labeled directed graphs as consumed by the bag builders.
//!
//! A node carries exactly one string label, labels need not be unique.
//! Edges are directed and carry no data, an edge either exists or not.
//!
//! The graph algorithms used by the bag builders (shortest paths with a hop cutoff and
//! component partitioning) are reached through the [GraphAlgorithms] trait so that another
//! graph library can be plugged in. [PetgraphAlgorithms] is the default implementation.


/// Defines the graph structure on top of petgraph.
pub mod labeled;

/// Defines the algorithms interface and its petgraph implementation.
pub mod algos;

pub use labeled::*;
pub use algos::*;

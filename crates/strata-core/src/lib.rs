//! Strata Core
//!
//! Layered Pareto frontier partitioning over N-feature points.
//!
//! Given points described by N numeric features, the partitioner splits them
//! into successive non-dominated layers: layer 1 holds every point no other
//! point dominates, layer 2 the non-dominated points once layer 1 is removed,
//! and so on until every point is assigned.
//!
//! ## Key Concepts
//!
//! - **Point**: fixed-length, finite feature values, immutable once built
//! - **Dominance**: `a` dominates `b` when it is at least as good everywhere
//! - **PointSet**: validated, duplicate-free input for one partitioning call
//! - **Group**: one frontier layer, in acceptance order
//! - **FrontierResult**: all layers, best first
//!
//! # Examples
//!
//! ```
//! use strata_core::{partition, PointSet};
//!
//! let set = PointSet::from_rows(vec![
//!     vec![0.95, 0.80, 0.42],
//!     vec![0.98, 0.81, 0.91],
//!     vec![0.23, 0.45, 0.12],
//! ]).unwrap();
//!
//! let result = partition(set).unwrap();
//! assert_eq!(result.len(), 3);
//! assert_eq!(result.groups()[0].source_indices(), vec![1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dedup;
pub mod dominance;
pub mod error;
pub mod frontier;
pub mod point;

// Re-exports for convenience
pub use config::{Objective, PartitionConfig};
pub use dedup::{dedup, Duplicate};
pub use dominance::{compare, compare_with, Dominance};
pub use error::{PartitionError, Result};
pub use frontier::{extract_frontier, partition, FrontierResult, Group, Partitioner};
pub use point::{IndexedPoint, Point, PointSet};

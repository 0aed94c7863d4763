#![deny(missing_docs)]

//! Adjacency-matrix multigraph store implementing the `euler-core` contracts.

mod config;
mod generators;
mod hash;
mod matrix;
mod serialization;

pub use config::MatrixConfig;
pub use generators::{
    complete_graph, cycle_graph, edge_label, path_graph, random_multigraph, vertex_label,
};
pub use hash::canonical_hash;
pub use matrix::MatrixGraph;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};

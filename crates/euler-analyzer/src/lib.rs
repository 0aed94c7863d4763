#![deny(missing_docs)]

//! Structural analysis and Euler path construction for multigraphs exposed
//! through the [`euler_core::GraphStore`] interface.
//!
//! The crate is layered: structural queries and edge lookup read cells
//! directly, traversal builds on them, and the Euler engine builds on all
//! three. Every entry point is a free function generic over the store.

mod config;
mod euler;
mod lookup;
mod report;
mod structure;
mod traversal;

pub use config::{EulerConfig, StartVertexRule};
pub use euler::{
    all_edges_are_bridges, euler_path, has_euler_path, is_bridge, odd_degree_vertices,
    BridgeCheck, EulerPath,
};
pub use lookup::{edge_by_label, locate_edge, EdgeLocation};
pub use report::{analyze, AnalysisReport};
pub use structure::{
    degree, edges_incident_on, has_loop, has_parallel_edges, is_complete, non_adjacent_pairs,
};
pub use traversal::{depth_first_traversal, is_connected};

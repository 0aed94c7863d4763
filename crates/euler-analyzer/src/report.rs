use std::collections::BTreeMap;

use euler_core::{GraphError, GraphStore};
use serde::{Deserialize, Serialize};

use crate::config::EulerConfig;
use crate::euler::{all_edges_are_bridges, euler_path, odd_degree_vertices, EulerPath};
use crate::structure::{degree, has_loop, has_parallel_edges, is_complete, non_adjacent_pairs};
use crate::traversal::is_connected;

/// Every analyzer verdict for one graph, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges (self-loops and parallel edges included).
    pub edge_count: usize,
    /// Degree of each vertex, keyed by label.
    pub degrees: BTreeMap<String, usize>,
    /// Non-adjacent vertex pairs formatted as `"A-B"`.
    pub non_adjacent_pairs: Vec<String>,
    /// Whether the graph holds a self-loop.
    pub has_loop: bool,
    /// Whether the graph holds parallel edges.
    pub has_parallel_edges: bool,
    /// Whether the graph is complete.
    pub is_complete: bool,
    /// Whether the graph is connected.
    pub is_connected: bool,
    /// Odd-degree vertices in matrix order.
    pub odd_degree_vertices: Vec<String>,
    /// Whether an Euler path exists.
    pub has_euler_path: bool,
    /// Whether every edge is a bridge.
    pub all_edges_are_bridges: bool,
    /// The Fleury Euler path, when one exists.
    pub euler_path: Option<EulerPath>,
}

/// Runs every analyzer query over `graph`.
///
/// Connectivity is undefined for a graph without vertices, so an empty graph
/// is rejected with the same `Precondition` error as [`is_connected`].
pub fn analyze<G: GraphStore>(
    graph: &G,
    config: &EulerConfig,
) -> Result<AnalysisReport, GraphError> {
    let connected = is_connected(graph)?;
    let mut degrees = BTreeMap::new();
    for label in graph.vertex_labels() {
        degrees.insert(label.clone(), degree(graph, label)?);
    }
    let edge_count = degrees.values().sum::<usize>() / 2;
    let path = euler_path(graph, config)?;
    Ok(AnalysisReport {
        vertex_count: graph.vertex_count(),
        edge_count,
        degrees,
        non_adjacent_pairs: non_adjacent_pairs(graph)?,
        has_loop: has_loop(graph)?,
        has_parallel_edges: has_parallel_edges(graph)?,
        is_complete: is_complete(graph)?,
        is_connected: connected,
        odd_degree_vertices: odd_degree_vertices(graph)?,
        all_edges_are_bridges: all_edges_are_bridges(graph)?,
        has_euler_path: path.is_some(),
        euler_path: path,
    })
}

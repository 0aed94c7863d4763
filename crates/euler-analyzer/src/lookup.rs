//! Edge lookup by label.

use euler_core::{Edge, GraphError, GraphStore};
use serde::{Deserialize, Serialize};

/// Where an edge lives in the matrix, together with its reconstructed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLocation {
    /// Row of the upper-triangle cell holding the edge.
    pub row: usize,
    /// Column of the upper-triangle cell (`column >= row`).
    pub column: usize,
    /// The edge, with `v1` the row vertex and `v2` the column vertex.
    pub edge: Edge,
}

/// Finds the first upper-triangle cell (row-major) holding `label`.
pub fn locate_edge<G: GraphStore>(
    graph: &G,
    label: &str,
) -> Result<Option<EdgeLocation>, GraphError> {
    let labels = graph.vertex_labels();
    for row in 0..labels.len() {
        for column in row..labels.len() {
            if graph.edge_cell(row, column)?.contains(label) {
                return Ok(Some(EdgeLocation {
                    row,
                    column,
                    edge: Edge::new(label, labels[row].as_str(), labels[column].as_str()),
                }));
            }
        }
    }
    Ok(None)
}

/// Resolves an edge label to `(label, row vertex, column vertex)`.
///
/// An unknown label is `Ok(None)`, not an error.
pub fn edge_by_label<G: GraphStore>(graph: &G, label: &str) -> Result<Option<Edge>, GraphError> {
    Ok(locate_edge(graph, label)?.map(|location| location.edge))
}

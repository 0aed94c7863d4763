//! Structural queries over the upper triangle of the adjacency matrix.

use euler_core::{GraphError, GraphStore};

/// Resolves `label` to its matrix position or fails with `InvalidVertex`.
pub(crate) fn position<G: GraphStore>(graph: &G, label: &str) -> Result<usize, GraphError> {
    graph
        .vertex_index(label)
        .ok_or_else(|| GraphError::invalid_vertex(label))
}

/// Upper-triangle positions `(i, j)`, `j >= i`, that involve `vertex`, in row-major order.
pub(crate) fn touching_cells(n: usize, vertex: usize) -> impl Iterator<Item = (usize, usize)> {
    let above = (0..vertex).map(move |row| (row, vertex));
    let along = (vertex..n).map(move |column| (vertex, column));
    above.chain(along)
}

/// Every pair of distinct, non-adjacent vertices formatted as `"A-B"`.
///
/// Pairs follow a row-major scan of the upper triangle, labels in matrix order.
pub fn non_adjacent_pairs<G: GraphStore>(graph: &G) -> Result<Vec<String>, GraphError> {
    let labels = graph.vertex_labels();
    let mut pairs = Vec::new();
    for row in 0..labels.len() {
        for column in (row + 1)..labels.len() {
            if graph.edge_cell(row, column)?.is_empty() {
                pairs.push(format!("{}-{}", labels[row], labels[column]));
            }
        }
    }
    Ok(pairs)
}

/// Returns whether any diagonal cell holds an edge.
pub fn has_loop<G: GraphStore>(graph: &G) -> Result<bool, GraphError> {
    for index in 0..graph.vertex_count() {
        if !graph.edge_cell(index, index)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns whether any cell holds more than one edge.
pub fn has_parallel_edges<G: GraphStore>(graph: &G) -> Result<bool, GraphError> {
    let n = graph.vertex_count();
    for row in 0..n {
        for column in row..n {
            if graph.edge_cell(row, column)?.len() > 1 {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Degree of `vertex`; each self-loop counts twice.
pub fn degree<G: GraphStore>(graph: &G, vertex: &str) -> Result<usize, GraphError> {
    let index = position(graph, vertex)?;
    let mut total = 0;
    for (row, column) in touching_cells(graph.vertex_count(), index) {
        let count = graph.edge_cell(row, column)?.len();
        total += if row == column { count * 2 } else { count };
    }
    Ok(total)
}

/// Labels of every edge incident on `vertex`, cell by cell in row-major order.
pub fn edges_incident_on<G: GraphStore>(
    graph: &G,
    vertex: &str,
) -> Result<Vec<String>, GraphError> {
    let index = position(graph, vertex)?;
    let mut labels = Vec::new();
    for (row, column) in touching_cells(graph.vertex_count(), index) {
        labels.extend(graph.edge_cell(row, column)?.labels().map(str::to_string));
    }
    Ok(labels)
}

/// Returns whether the graph is complete.
///
/// Any self-loop or parallel edge disqualifies the graph, whatever its
/// vertex count; otherwise every pair of distinct vertices must be adjacent.
pub fn is_complete<G: GraphStore>(graph: &G) -> Result<bool, GraphError> {
    if has_loop(graph)? || has_parallel_edges(graph)? {
        return Ok(false);
    }
    Ok(non_adjacent_pairs(graph)?.is_empty())
}

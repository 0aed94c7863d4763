use euler_core::errors::{ErrorInfo, GraphError};
use euler_core::rng::RngHandle;
use euler_core::GraphStore;
use rand::Rng;

use crate::config::MatrixConfig;
use crate::matrix::MatrixGraph;

/// Returns the generator label of vertex `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn vertex_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut value = index + 1;
    while value > 0 {
        let digit = (value - 1) % 26;
        label.push(b'A' + digit as u8);
        value = (value - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Returns the generator label of the `index`-th edge (zero based): `e1`, `e2`, ...
pub fn edge_label(index: usize) -> String {
    format!("e{}", index + 1)
}

/// Builds the cycle `A-B-...-A` on `n` vertices.
///
/// `n == 1` yields a single self-loop and `n == 2` a pair of parallel edges.
pub fn cycle_graph(n: usize) -> Result<MatrixGraph, GraphError> {
    let mut graph = with_vertices(n, "cycle")?;
    for index in 0..n {
        let next = (index + 1) % n;
        graph.insert_edge(&edge_label(index), &vertex_label(index), &vertex_label(next))?;
    }
    Ok(graph)
}

/// Builds the path `A-B-...` on `n` vertices (`n - 1` edges).
pub fn path_graph(n: usize) -> Result<MatrixGraph, GraphError> {
    let mut graph = with_vertices(n, "path")?;
    for index in 1..n {
        graph.insert_edge(
            &edge_label(index - 1),
            &vertex_label(index - 1),
            &vertex_label(index),
        )?;
    }
    Ok(graph)
}

/// Builds the complete simple graph on `n` vertices, edges numbered row-major.
pub fn complete_graph(n: usize) -> Result<MatrixGraph, GraphError> {
    let mut graph = with_vertices(n, "complete")?;
    let mut next_edge = 0;
    for row in 0..n {
        for column in (row + 1)..n {
            graph.insert_edge(
                &edge_label(next_edge),
                &vertex_label(row),
                &vertex_label(column),
            )?;
            next_edge += 1;
        }
    }
    Ok(graph)
}

/// Generates a multigraph with `n_vertices` vertices and `n_edges` random edges.
///
/// Each edge is a self-loop with probability `loop_ratio`; otherwise its two
/// distinct endpoints are drawn uniformly. Parallel edges arise naturally.
pub fn random_multigraph(
    n_vertices: usize,
    n_edges: usize,
    loop_ratio: f64,
    rng: &mut RngHandle,
) -> Result<MatrixGraph, GraphError> {
    let mut graph = with_vertices(n_vertices, "random multigraph")?;
    let loop_ratio = loop_ratio.clamp(0.0, 1.0);
    for index in 0..n_edges {
        let first = rng.gen_range(0..n_vertices);
        let second = if n_vertices == 1 || rng.gen_bool(loop_ratio) {
            first
        } else {
            // Shift past `first` so the second endpoint is always distinct.
            let draw = rng.gen_range(0..n_vertices - 1);
            if draw >= first {
                draw + 1
            } else {
                draw
            }
        };
        graph.insert_edge(
            &edge_label(index),
            &vertex_label(first),
            &vertex_label(second),
        )?;
    }
    Ok(graph)
}

fn with_vertices(n: usize, shape: &str) -> Result<MatrixGraph, GraphError> {
    if n == 0 {
        return Err(GraphError::Precondition(
            ErrorInfo::new("empty-graph", "generator requires at least one vertex")
                .with_context("shape", shape),
        ));
    }
    let mut graph = MatrixGraph::new(MatrixConfig::default());
    for index in 0..n {
        graph.insert_vertex(&vertex_label(index))?;
    }
    Ok(graph)
}

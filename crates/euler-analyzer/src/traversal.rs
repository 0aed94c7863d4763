//! Depth-first traversal and connectivity.
//!
//! Both walks keep an explicit stack instead of recursing, so graph depth is
//! not limited by the call stack. The visit order matches the recursive
//! formulation: each vertex scans its incident edges in
//! [`edges_incident_on`] order and descends into the first unvisited far
//! endpoint before moving to the next edge.

use euler_core::{ErrorInfo, GraphError, GraphStore};
use tracing::debug;

use crate::lookup::edge_by_label;
use crate::structure::{edges_incident_on, position, touching_cells};

struct Frame {
    vertex: usize,
    incident: Vec<String>,
    next: usize,
}

impl Frame {
    fn open<G: GraphStore>(graph: &G, vertex: usize) -> Result<Self, GraphError> {
        Ok(Self {
            vertex,
            incident: edges_incident_on(graph, &graph.vertex_labels()[vertex])?,
            next: 0,
        })
    }
}

/// Builds the depth-first spanning subgraph reachable from `start`.
///
/// The result is a fresh graph holding the visited vertices (in visit order)
/// and the tree edges used to reach them. A vertex enters the result once it
/// has an incident edge to scan, so a start vertex without edges yields an
/// empty graph.
pub fn depth_first_traversal<G: GraphStore>(graph: &G, start: &str) -> Result<G, GraphError> {
    let start_index = position(graph, start)?;
    let labels = graph.vertex_labels();
    let mut tree = graph.empty_like();
    let mut visited = vec![false; labels.len()];

    visited[start_index] = true;
    let mut stack = vec![Frame::open(graph, start_index)?];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        if frame.next >= frame.incident.len() {
            stack.pop();
            continue;
        }
        let here = frame.vertex;
        let edge_label = frame.incident[frame.next].clone();
        frame.next += 1;
        let Some(edge) = edge_by_label(graph, &edge_label)? else {
            continue;
        };
        let here_label = labels[here].as_str();
        if !tree.contains_vertex(here_label) {
            tree.insert_vertex(here_label)?;
        }
        let far_label = edge.far_endpoint(here_label);
        let far = position(graph, far_label)?;
        if visited[far] {
            continue;
        }
        visited[far] = true;
        tree.insert_vertex(far_label)?;
        tree.insert_edge(&edge_label, here_label, far_label)?;
        stack.push(Frame::open(graph, far)?);
    }

    Ok(tree)
}

/// Returns whether the traversal from the first vertex reaches every vertex.
///
/// A first vertex without incident edges makes the traversal empty, so a
/// graph made of a single isolated vertex is not connected.
///
/// Fails with a `Precondition` error on a graph without vertices.
pub fn is_connected<G: GraphStore>(graph: &G) -> Result<bool, GraphError> {
    let Some(first) = graph.vertex_labels().first() else {
        return Err(GraphError::Precondition(
            ErrorInfo::new("empty-graph", "connectivity is undefined for a graph without vertices")
                .with_hint("insert at least one vertex"),
        ));
    };
    let tree = depth_first_traversal(graph, first)?;
    let connected = tree.vertex_count() == graph.vertex_count();
    debug!(
        reached = tree.vertex_count(),
        vertices = graph.vertex_count(),
        connected,
        "connectivity check"
    );
    Ok(connected)
}

/// Returns whether `target` can be reached from `from` through non-empty cells.
pub(crate) fn reaches<G: GraphStore>(
    graph: &G,
    from: usize,
    target: usize,
) -> Result<bool, GraphError> {
    if from == target {
        return Ok(true);
    }
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut stack = vec![from];
    visited[from] = true;
    while let Some(vertex) = stack.pop() {
        for (row, column) in touching_cells(n, vertex) {
            if graph.edge_cell(row, column)?.is_empty() {
                continue;
            }
            let far = if row == vertex { column } else { row };
            if far == target {
                return Ok(true);
            }
            if !visited[far] {
                visited[far] = true;
                stack.push(far);
            }
        }
    }
    Ok(false)
}

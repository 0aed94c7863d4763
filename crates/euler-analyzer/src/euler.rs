//! Odd-degree vertices, bridges and Fleury's Euler path construction.
//!
//! [`is_bridge`] and [`all_edges_are_bridges`] judge an edge by the
//! connectivity of the whole graph once the edge is gone, so on a graph that
//! already has an isolated vertex every edge reports as a bridge. Fleury's
//! walk cannot use that test: each exhausted vertex becomes isolated in the
//! working copy. Inside [`euler_path`] an edge is a bridge when removing it
//! separates its own endpoints.

use euler_core::{Edge, ErrorInfo, GraphError, GraphStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace, warn};

use crate::config::EulerConfig;
use crate::lookup::{locate_edge, EdgeLocation};
use crate::structure::{degree, edges_incident_on, position};
use crate::traversal::{is_connected, reaches};

/// Result of a bridge test, pointing at the cell the edge was removed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeCheck {
    /// Whether removing the edge disconnects the graph.
    pub is_bridge: bool,
    /// Row of the upper-triangle cell holding the edge.
    pub row: usize,
    /// Column of the upper-triangle cell holding the edge.
    pub column: usize,
    /// Label of the removed edge.
    pub label: String,
}

/// Alternating sequence `vertex, edge, vertex, ..., vertex` of an Euler path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EulerPath {
    steps: Vec<String>,
}

impl EulerPath {
    /// Returns the raw alternating label sequence.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Consumes the path, returning the label sequence.
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }

    /// Vertex labels in walk order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().step_by(2).map(String::as_str)
    }

    /// Edge labels in walk order.
    pub fn edges(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().skip(1).step_by(2).map(String::as_str)
    }

    /// First vertex of the walk.
    pub fn start(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    /// Last vertex of the walk.
    pub fn end(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// Whether the walk uses at least one edge and ends where it started.
    pub fn is_closed(&self) -> bool {
        self.steps.len() > 1 && self.start() == self.end()
    }
}

/// Vertices of odd degree, in matrix order.
pub fn odd_degree_vertices<G: GraphStore>(graph: &G) -> Result<Vec<String>, GraphError> {
    let mut odd = Vec::new();
    for label in graph.vertex_labels() {
        if degree(graph, label)? % 2 == 1 {
            odd.push(label.clone());
        }
    }
    Ok(odd)
}

/// Returns whether the graph is connected with exactly zero or two odd-degree vertices.
pub fn has_euler_path<G: GraphStore>(graph: &G) -> Result<bool, GraphError> {
    if !is_connected(graph)? {
        return Ok(false);
    }
    let odd = odd_degree_vertices(graph)?.len();
    Ok(odd == 0 || odd == 2)
}

/// Tests whether removing one occurrence of `edge` disconnects the graph.
///
/// The edge is found by label; the test runs on a copy, so `graph` is never
/// modified. Returns `Ok(None)` when no edge carries that label.
pub fn is_bridge<G: GraphStore>(graph: &G, edge: &Edge) -> Result<Option<BridgeCheck>, GraphError> {
    let Some(location) = locate_edge(graph, &edge.label)? else {
        return Ok(None);
    };
    let mut copy = graph.clone();
    copy.remove_edge(location.row, location.column, &edge.label)?;
    let is_bridge = !is_connected(&copy)?;
    trace!(edge = %edge.label, is_bridge, "bridge check");
    Ok(Some(BridgeCheck {
        is_bridge,
        row: location.row,
        column: location.column,
        label: location.edge.label,
    }))
}

/// Returns whether every edge of the graph is individually a bridge.
///
/// An edgeless graph satisfies this vacuously.
pub fn all_edges_are_bridges<G: GraphStore>(graph: &G) -> Result<bool, GraphError> {
    let labels = graph.vertex_labels();
    let mut total = 0usize;
    let mut bridges = 0usize;
    for row in 0..labels.len() {
        for column in row..labels.len() {
            for label in graph.edge_cell(row, column)?.labels() {
                total += 1;
                let edge = Edge::new(label, labels[row].as_str(), labels[column].as_str());
                if is_bridge(graph, &edge)?.is_some_and(|check| check.is_bridge) {
                    bridges += 1;
                }
            }
        }
    }
    Ok(total == bridges)
}

/// Builds an Euler path with Fleury's algorithm, or `None` when none exists.
///
/// The walk starts at the first vertex when every degree is even, otherwise
/// at the odd-degree vertex selected by `config.start_rule`. At each vertex
/// the first incident edge (in [`edges_incident_on`] order) is taken unless
/// it is a bridge; a bridge is only crossed when it is the last edge at the
/// vertex or when every remaining edge is a bridge. `graph` is left untouched.
///
/// During the walk an edge counts as a bridge when removing it disconnects
/// its own endpoints, not the whole working copy (see [`is_bridge`]).
pub fn euler_path<G: GraphStore>(
    graph: &G,
    config: &EulerConfig,
) -> Result<Option<EulerPath>, GraphError> {
    let _span = debug_span!("euler_path", vertices = graph.vertex_count()).entered();
    if !has_euler_path(graph)? {
        debug!("graph has no euler path");
        return Ok(None);
    }

    let odd = odd_degree_vertices(graph)?;
    let start = if odd.is_empty() {
        graph.vertex_labels()[0].clone()
    } else {
        odd[config.start_rule.odd_index()].clone()
    };
    debug!(start = %start, odd = odd.len(), "starting fleury walk");

    let mut work = graph.clone();
    let mut steps = Vec::new();
    let mut current = position(&work, &start)?;
    loop {
        let label = work.vertex_labels()[current].clone();
        let remaining = degree(&work, &label)?;
        if remaining == 0 {
            steps.push(label);
            break;
        }
        let location = choose_edge(&work, current, remaining)?;
        trace!(vertex = %label, edge = %location.edge.label, "fleury step");
        work.remove_edge(location.row, location.column, &location.edge.label)?;
        current = if location.row == current {
            location.column
        } else {
            location.row
        };
        steps.push(label);
        steps.push(location.edge.label);
    }

    debug!(length = steps.len(), "euler path complete");
    Ok(Some(EulerPath { steps }))
}

fn choose_edge<G: GraphStore>(
    work: &G,
    current: usize,
    remaining: usize,
) -> Result<EdgeLocation, GraphError> {
    let label = &work.vertex_labels()[current];
    let mut first = None;
    let mut all_bridges = None;
    for edge_label in edges_incident_on(work, label)? {
        let Some(location) = locate_edge(work, &edge_label)? else {
            continue;
        };
        if !separates_endpoints(work, &location)? || remaining == 1 {
            return Ok(location);
        }
        let every = match all_bridges {
            Some(every) => every,
            None => {
                let every = every_edge_separates(work)?;
                all_bridges = Some(every);
                every
            }
        };
        if every {
            return Ok(location);
        }
        first.get_or_insert(location);
    }
    // Unreachable for graphs that passed `has_euler_path`: some incident
    // edge is always safe to cross.
    let fallback = first.ok_or_else(|| {
        GraphError::Precondition(
            ErrorInfo::new("no-incident-edge", "vertex has degree but no incident edge")
                .with_context("vertex", label),
        )
    })?;
    warn!(vertex = %label, edge = %fallback.edge.label, "crossing a bridge with alternatives left");
    Ok(fallback)
}

/// Whether deleting the edge at `location` leaves its endpoints disconnected.
fn separates_endpoints<G: GraphStore>(
    work: &G,
    location: &EdgeLocation,
) -> Result<bool, GraphError> {
    if location.edge.is_loop() {
        return Ok(false);
    }
    let mut copy = work.clone();
    copy.remove_edge(location.row, location.column, &location.edge.label)?;
    Ok(!reaches(&copy, location.row, location.column)?)
}

fn every_edge_separates<G: GraphStore>(work: &G) -> Result<bool, GraphError> {
    let labels = work.vertex_labels();
    for row in 0..labels.len() {
        for column in row..labels.len() {
            for label in work.edge_cell(row, column)?.labels() {
                let location = EdgeLocation {
                    row,
                    column,
                    edge: Edge::new(label, labels[row].as_str(), labels[column].as_str()),
                };
                if !separates_endpoints(work, &location)? {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

#![deny(missing_docs)]
#![doc = "Core contracts and data types shared by the Euler multigraph crates."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, GraphError};
pub use provenance::{ReportProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Labeled undirected edge between two vertex labels.
///
/// `v1 == v2` describes a self-loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Graph-wide unique edge label.
    pub label: String,
    /// Label of the first endpoint.
    pub v1: String,
    /// Label of the second endpoint.
    pub v2: String,
}

impl Edge {
    /// Creates a new edge value.
    pub fn new(label: impl Into<String>, v1: impl Into<String>, v2: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            v1: v1.into(),
            v2: v2.into(),
        }
    }

    /// Returns whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// Yields `v2` when `vertex` is `v1` and `v1` otherwise, so a self-loop
    /// leads back to its own vertex.
    pub fn far_endpoint(&self, vertex: &str) -> &str {
        if self.v1 == vertex {
            &self.v2
        } else {
            &self.v1
        }
    }
}

/// The multiset of edges stored at one matrix position.
///
/// Edges keep their insertion order; every "in order" scan performed by the
/// analyzer walks a cell front to back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeCell {
    edges: Vec<Edge>,
}

impl EdgeCell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges in the cell.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the cell holds no edge.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the edges in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Iterates the edge labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.iter().map(|edge| edge.label.as_str())
    }

    /// Returns the edge carrying `label`, if present.
    pub fn get(&self, label: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.label == label)
    }

    /// Returns whether an edge with `label` is stored here.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Appends an edge. Label uniqueness is the store's responsibility.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Removes and returns the edge carrying `label`.
    pub fn remove(&mut self, label: &str) -> Option<Edge> {
        let position = self.edges.iter().position(|edge| edge.label == label)?;
        Some(self.edges.remove(position))
    }
}

impl<'a> IntoIterator for &'a EdgeCell {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Capability interface for an undirected multigraph kept as an adjacency matrix.
///
/// Matrix positions follow [`GraphStore::vertex_labels`]. The matrix is
/// symmetric: `edge_cell(i, j)` and `edge_cell(j, i)` must resolve to the same
/// cell, so implementations canonicalize the pair before indexing.
/// `Clone` is a deep copy; the analyzer relies on it for what-if edits.
pub trait GraphStore: Clone {
    /// Returns a new empty graph with the same configuration as `self`.
    fn empty_like(&self) -> Self;

    /// Returns the vertex labels in matrix order.
    fn vertex_labels(&self) -> &[String];

    /// Returns the cell holding every edge between vertex `i` and vertex `j`.
    fn edge_cell(&self, i: usize, j: usize) -> Result<&EdgeCell, GraphError>;

    /// Adds a vertex at the end of the matrix order.
    fn insert_vertex(&mut self, label: &str) -> Result<(), GraphError>;

    /// Adds a labeled edge between two existing vertices.
    fn insert_edge(&mut self, label: &str, v1: &str, v2: &str) -> Result<(), GraphError>;

    /// Deletes one occurrence of `label` from cell `(i, j)`.
    ///
    /// Returns `Ok(None)` when the cell does not hold that label.
    fn remove_edge(&mut self, i: usize, j: usize, label: &str)
        -> Result<Option<Edge>, GraphError>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertex_labels().len()
    }

    /// Returns the matrix position of `label`.
    fn vertex_index(&self, label: &str) -> Option<usize> {
        self.vertex_labels()
            .iter()
            .position(|candidate| candidate == label)
    }

    /// Returns whether `label` names a vertex.
    fn contains_vertex(&self, label: &str) -> bool {
        self.vertex_index(label).is_some()
    }
}

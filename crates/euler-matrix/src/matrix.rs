use std::collections::BTreeSet;

use euler_core::{
    errors::{ErrorInfo, GraphError},
    Edge, EdgeCell, GraphStore,
};

use crate::config::MatrixConfig;

/// Undirected multigraph stored as a symmetric adjacency matrix of edge cells.
///
/// Only the upper triangle is materialized: row `i` holds the cells for
/// columns `i..n`, so `(i, j)` and `(j, i)` cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    config: MatrixConfig,
    vertices: Vec<String>,
    rows: Vec<Vec<EdgeCell>>,
    edge_labels: BTreeSet<String>,
}

impl MatrixGraph {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: MatrixConfig) -> Self {
        Self {
            config,
            vertices: Vec::new(),
            rows: Vec::new(),
            edge_labels: BTreeSet::new(),
        }
    }

    /// Builds a graph from vertex labels and `(label, v1, v2)` edge triples, in order.
    pub fn from_edge_list(
        config: MatrixConfig,
        vertices: &[&str],
        edges: &[(&str, &str, &str)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(config);
        for vertex in vertices {
            graph.insert_vertex(vertex)?;
        }
        for (label, v1, v2) in edges {
            graph.insert_edge(label, v1, v2)?;
        }
        Ok(graph)
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Total number of edges across the upper triangle.
    pub fn edge_count(&self) -> usize {
        self.edge_labels.len()
    }

    /// Returns whether an edge with `label` exists anywhere in the graph.
    pub fn contains_edge(&self, label: &str) -> bool {
        self.edge_labels.contains(label)
    }

    /// Iterates `(row, column, edge)` over the upper triangle in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &Edge)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .flat_map(move |(offset, cell)| cell.iter().map(move |edge| (row, row + offset, edge)))
        })
    }

    /// Maps `(i, j)` onto the stored upper-triangle slot.
    fn slot(&self, i: usize, j: usize) -> Result<(usize, usize), GraphError> {
        let n = self.vertices.len();
        if i >= n || j >= n {
            return Err(store_error("cell-out-of-range", "matrix position is out of range")
                .with_context("row", i)
                .with_context("column", j)
                .with_context("vertices", n));
        }
        let (row, column) = if i <= j { (i, j) } else { (j, i) };
        Ok((row, column - row))
    }

    fn cell_mut(&mut self, i: usize, j: usize) -> Result<&mut EdgeCell, GraphError> {
        let (row, offset) = self.slot(i, j)?;
        Ok(&mut self.rows[row][offset])
    }

    fn endpoint(&self, label: &str) -> Result<usize, GraphError> {
        self.vertex_index(label).ok_or_else(|| {
            store_error("unknown-endpoint", "edge endpoint is not a vertex")
                .with_context("vertex", label)
        })
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new(MatrixConfig::default())
    }
}

impl GraphStore for MatrixGraph {
    fn empty_like(&self) -> Self {
        Self::new(self.config)
    }

    fn vertex_labels(&self) -> &[String] {
        &self.vertices
    }

    fn edge_cell(&self, i: usize, j: usize) -> Result<&EdgeCell, GraphError> {
        let (row, offset) = self.slot(i, j)?;
        Ok(&self.rows[row][offset])
    }

    fn insert_vertex(&mut self, label: &str) -> Result<(), GraphError> {
        if self.contains_vertex(label) {
            return Err(store_error("duplicate-vertex", "vertex label already used")
                .with_context("vertex", label));
        }
        for row in self.rows.iter_mut() {
            row.push(EdgeCell::new());
        }
        self.rows.push(vec![EdgeCell::new()]);
        self.vertices.push(label.to_string());
        Ok(())
    }

    fn insert_edge(&mut self, label: &str, v1: &str, v2: &str) -> Result<(), GraphError> {
        if self.edge_labels.contains(label) {
            return Err(store_error("duplicate-edge", "edge label already used")
                .with_context("edge", label));
        }
        let i = self.endpoint(v1)?;
        let j = self.endpoint(v2)?;
        if i == j && !self.config.allow_loops {
            return Err(store_error("loop-disallowed", "self-loops are disabled")
                .with_context("edge", label)
                .with_context("vertex", v1));
        }
        let allow_parallel = self.config.allow_parallel;
        let cell = self.cell_mut(i, j)?;
        if !allow_parallel && !cell.is_empty() {
            return Err(store_error("parallel-disallowed", "parallel edges are disabled")
                .with_context("edge", label)
                .with_context("v1", v1)
                .with_context("v2", v2));
        }
        cell.push(Edge::new(label, v1, v2));
        self.edge_labels.insert(label.to_string());
        Ok(())
    }

    fn remove_edge(
        &mut self,
        i: usize,
        j: usize,
        label: &str,
    ) -> Result<Option<Edge>, GraphError> {
        let removed = self.cell_mut(i, j)?.remove(label);
        if removed.is_some() {
            self.edge_labels.remove(label);
        }
        Ok(removed)
    }
}

fn store_error(code: impl Into<String>, message: impl Into<String>) -> GraphError {
    GraphError::Store(ErrorInfo::new(code, message))
}

use euler_core::errors::{ErrorInfo, GraphError};
use euler_core::GraphStore;
use serde::{Deserialize, Serialize};

use crate::config::MatrixConfig;
use crate::matrix::MatrixGraph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &MatrixGraph) -> Result<Vec<u8>, GraphError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| GraphError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<MatrixGraph, GraphError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| GraphError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &MatrixGraph) -> Result<String, GraphError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| GraphError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
///
/// `config` may be omitted, in which case the default (multigraph) configuration applies.
pub fn graph_from_json(json: &str) -> Result<MatrixGraph, GraphError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| GraphError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    #[serde(default)]
    config: MatrixConfig,
    vertices: Vec<String>,
    #[serde(default)]
    edges: Vec<SerializableEdge>,
}

impl SerializableGraph {
    // Edges are written in row-major upper-triangle order so that replaying
    // the insertions rebuilds every cell in its original order.
    fn from_graph(graph: &MatrixGraph) -> Self {
        let edges = graph
            .edges()
            .map(|(_, _, edge)| SerializableEdge {
                label: edge.label.clone(),
                v1: edge.v1.clone(),
                v2: edge.v2.clone(),
            })
            .collect();
        Self {
            config: *graph.config(),
            vertices: graph.vertex_labels().to_vec(),
            edges,
        }
    }

    fn into_graph(self) -> Result<MatrixGraph, GraphError> {
        let mut graph = MatrixGraph::new(self.config);
        for vertex in &self.vertices {
            graph.insert_vertex(vertex)?;
        }
        for edge in &self.edges {
            graph.insert_edge(&edge.label, &edge.v1, &edge.v2)?;
        }
        Ok(graph)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableEdge {
    label: String,
    v1: String,
    v2: String,
}

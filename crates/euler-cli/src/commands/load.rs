use std::error::Error;
use std::fs;
use std::path::Path;

use euler_analyzer::EulerConfig;
use euler_core::{GraphStore, ReportProvenance};
use euler_matrix::{canonical_hash, graph_from_json, MatrixGraph};
use serde::Serialize;
use tracing::debug;

pub fn load_graph(path: &Path) -> Result<MatrixGraph, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let graph = graph_from_json(&json)?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph snapshot"
    );
    Ok(graph)
}

/// Reads an `EulerConfig` from YAML, falling back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EulerConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(EulerConfig::default());
    };
    let contents = fs::read_to_string(path)?;
    let config: EulerConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

pub fn provenance(graph: &MatrixGraph, source: String) -> Result<ReportProvenance, Box<dyn Error>> {
    let mut provenance = ReportProvenance {
        graph_hash: canonical_hash(graph)?,
        source,
        ..ReportProvenance::default()
    };
    provenance
        .tool_versions
        .insert("euler-cli".into(), env!("CARGO_PKG_VERSION").into());
    Ok(provenance)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

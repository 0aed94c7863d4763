use euler_core::errors::GraphError;
use euler_core::GraphStore;
use sha2::{Digest, Sha256};

use crate::config::MatrixConfig;
use crate::matrix::MatrixGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the configuration, the vertex labels in matrix order,
/// and every upper-triangle cell with its edge labels in cell order. Two
/// graphs hash equal exactly when every analyzer query would agree on them.
pub fn canonical_hash(graph: &MatrixGraph) -> Result<String, GraphError> {
    let mut hasher = Sha256::new();
    encode_config(graph.config(), &mut hasher);

    let vertices = graph.vertex_labels();
    hasher.update((vertices.len() as u64).to_le_bytes());
    for label in vertices {
        update_str(label, &mut hasher);
    }

    for row in 0..vertices.len() {
        for column in row..vertices.len() {
            let cell = graph.edge_cell(row, column)?;
            if cell.is_empty() {
                continue;
            }
            hasher.update((row as u64).to_le_bytes());
            hasher.update((column as u64).to_le_bytes());
            hasher.update((cell.len() as u64).to_le_bytes());
            for label in cell.labels() {
                update_str(label, &mut hasher);
            }
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn encode_config(config: &MatrixConfig, hasher: &mut Sha256) {
    hasher.update(if config.allow_loops {
        b"loops:on".as_slice()
    } else {
        b"loops:off".as_slice()
    });
    hasher.update(if config.allow_parallel {
        b"parallel:on".as_slice()
    } else {
        b"parallel:off".as_slice()
    });
    hasher.update(config.schema_version.major.to_le_bytes());
    hasher.update(config.schema_version.minor.to_le_bytes());
    hasher.update(config.schema_version.patch.to_le_bytes());
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

use euler_core::provenance::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Configuration options that control which edges a [`MatrixGraph`](crate::MatrixGraph) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Whether self-loops (edges whose endpoints coincide) may be inserted.
    #[serde(default = "default_true")]
    pub allow_loops: bool,
    /// Whether a second edge may be inserted between an already adjacent pair.
    #[serde(default = "default_true")]
    pub allow_parallel: bool,
    /// Schema version stored alongside serialized payloads.
    #[serde(default = "default_schema")]
    pub schema_version: SchemaVersion,
}

fn default_true() -> bool {
    true
}

fn default_schema() -> SchemaVersion {
    SchemaVersion::new(1, 0, 0)
}

impl MatrixConfig {
    /// Configuration for simple graphs: no loops, no parallel edges.
    pub fn simple() -> Self {
        Self {
            allow_loops: false,
            allow_parallel: false,
            ..Self::default()
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            allow_loops: true,
            allow_parallel: true,
            schema_version: default_schema(),
        }
    }
}

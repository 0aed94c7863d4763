use serde::{Deserialize, Serialize};

/// YAML-configurable options for Euler path construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EulerConfig {
    /// Which odd-degree vertex starts the walk when exactly two exist.
    #[serde(default)]
    pub start_rule: StartVertexRule,
}

/// Start vertex choice for graphs with exactly two odd-degree vertices.
///
/// Graphs without odd-degree vertices always start at the first vertex in
/// matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartVertexRule {
    /// Start at the second odd-degree vertex in matrix order.
    #[default]
    SecondOdd,
    /// Start at the first odd-degree vertex in matrix order.
    FirstOdd,
}

impl StartVertexRule {
    /// Index into the odd-degree vertex list used by this rule.
    pub fn odd_index(self) -> usize {
        match self {
            StartVertexRule::SecondOdd => 1,
            StartVertexRule::FirstOdd => 0,
        }
    }
}

//! Structured error types shared across the Euler crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`GraphError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (labels, indices, sizes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph stores and the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GraphError {
    /// A query referenced a vertex label that is not part of the graph.
    #[error("invalid vertex: {0}")]
    InvalidVertex(ErrorInfo),
    /// Structural violations raised by a store while inserting or removing.
    #[error("store error: {0}")]
    Store(ErrorInfo),
    /// The operation is undefined for the current graph (for example, an empty graph).
    #[error("precondition failed: {0}")]
    Precondition(ErrorInfo),
    /// Snapshot serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl GraphError {
    /// Builds the error raised when `label` does not name a vertex of the graph.
    pub fn invalid_vertex(label: &str) -> Self {
        GraphError::InvalidVertex(
            ErrorInfo::new("invalid-vertex", "vertex does not exist").with_context("vertex", label),
        )
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GraphError::InvalidVertex(info)
            | GraphError::Store(info)
            | GraphError::Precondition(info)
            | GraphError::Serde(info) => info,
        }
    }

    /// Returns the stable error code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Appends a context entry to the payload, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        let value = value.to_string();
        match self {
            GraphError::InvalidVertex(info) => {
                GraphError::InvalidVertex(info.with_context(key, value))
            }
            GraphError::Store(info) => GraphError::Store(info.with_context(key, value)),
            GraphError::Precondition(info) => {
                GraphError::Precondition(info.with_context(key, value))
            }
            GraphError::Serde(info) => GraphError::Serde(info.with_context(key, value)),
        }
    }
}

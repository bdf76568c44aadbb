//! Error types for graph operations

use thiserror::Error;

/// Errors that can occur while loading or reasoning over a graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// Snapshot could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No entity has the requested id
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// The entity exists but is not a company
    #[error("Entity '{id}' is a {kind}, not a Company")]
    NotACompany {
        /// Entity id
        id: String,
        /// Actual type label
        kind: String,
    },
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Json(e.to_string())
    }
}

/// Errors from rendering an explanation template
///
/// Kept apart from [`GraphError`]: the reasoner treats a template that does
/// not render as absent and uses its default sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Placeholder name is not one of the supported fields
    #[error("Unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),

    /// A `{` or `}` without its partner
    #[error("Unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),
}

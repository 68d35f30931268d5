//! Error types for md2docx.

use thiserror::Error;

/// Result type for md2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering Markdown into a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The renderer met a node kind it has no rendering rule for.
    #[error("Unsupported node kind: {0}")]
    UnsupportedNodeKind(String),

    /// A nested list paragraph needs a numbering definition that no
    /// registered definition declares for its style.
    #[error("No numbering definition declares style {style:?}")]
    NumberingDefinitionNotFound { style: String },

    /// The traversal delivered an event the render state cannot accept,
    /// e.g. text with no open paragraph or a cell outside a table.
    #[error("Render invariant violated: {0}")]
    InvariantViolation(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Document dump could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Error::InvariantViolation(message.into())
    }

    /// Returns true for errors the renderer logs and moves past.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NumberingDefinitionNotFound { .. })
    }
}

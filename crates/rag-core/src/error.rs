//! Error types for the RAG system.

use thiserror::Error;

/// Result type alias using RagError.
pub type Result<T> = std::result::Result<T, RagError>;

/// Errors that can occur in the RAG system.
///
/// None of these reach an MCP client as a protocol fault. Tool-level problems
/// (unknown tool, missing query) are reported as ordinary response text.
#[derive(Error, Debug)]
pub enum RagError {
    /// Knowledge base lookup failed.
    #[error("Knowledge base error: {message}")]
    KnowledgeBase { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RagError {
    /// Create a knowledge base error.
    pub fn knowledge_base(message: impl Into<String>) -> Self {
        Self::KnowledgeBase {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the error code used in log lines and diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::KnowledgeBase { .. } => "KNOWLEDGE_BASE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }
}

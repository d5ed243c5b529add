//! rag-core - Core types and traits for the RAG system
//!
//! This crate provides the domain types, the knowledge base seam, the static
//! knowledge base, configuration, and error handling used by the MCP server.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{RagError, Result};
pub use knowledge::StaticKnowledgeBase;
pub use traits::*;
pub use types::*;

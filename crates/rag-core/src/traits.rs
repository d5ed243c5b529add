//! Core traits defining the interfaces between components.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Document;

/// Source of documents for the search tool.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Look up documents relevant to `query`, best match first.
    async fn search(&self, query: &str) -> Result<Vec<Document>>;
}

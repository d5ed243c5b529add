//! Static in-memory knowledge base.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::traits::KnowledgeBase;
use crate::types::Document;

/// Identifier of the record every search returns.
pub const TEST_RECORD_ID: u64 = 999;

/// Title of the record every search returns.
pub const TEST_RECORD_TITLE: &str = "Ben Torkian Test Example for MCP";

/// Content of the record every search returns.
pub const TEST_RECORD_CONTENT: &str = "This is Ben Torkian's test example for MCP (Model Context Protocol). The RAG server is working correctly!";

/// Knowledge base backed by a fixed document list.
///
/// `search` does not consult `documents`: it always answers with the single
/// test record. The document list is kept as-is and is not wired into the
/// lookup path.
#[derive(Debug, Clone)]
pub struct StaticKnowledgeBase {
    documents: Vec<Document>,
}

impl StaticKnowledgeBase {
    /// Create the knowledge base with its built-in documents.
    pub fn new() -> Self {
        Self {
            documents: builtin_documents(),
        }
    }

    /// The built-in documents. Never returned by `search`.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The record returned for every query.
    pub fn test_record() -> Document {
        Document::new(TEST_RECORD_ID, TEST_RECORD_TITLE, TEST_RECORD_CONTENT)
    }
}

impl Default for StaticKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeBase for StaticKnowledgeBase {
    async fn search(&self, query: &str) -> Result<Vec<Document>> {
        debug!("Static lookup ignores query {:?}", query);
        Ok(vec![Self::test_record()])
    }
}

fn builtin_documents() -> Vec<Document> {
    vec![
        Document::new(
            1,
            "Python Programming",
            "Python is a high-level, interpreted programming language known for its simplicity and readability. It supports multiple programming paradigms including procedural, object-oriented, and functional programming.",
        ),
        Document::new(
            2,
            "Machine Learning Basics",
            "Machine Learning is a subset of artificial intelligence that enables systems to learn and improve from experience without being explicitly programmed. Common types include supervised learning, unsupervised learning, and reinforcement learning.",
        ),
        Document::new(
            3,
            "Web Development",
            "Web development involves building and maintaining websites. It includes front-end development (HTML, CSS, JavaScript) and back-end development (server-side programming, databases, APIs).",
        ),
        Document::new(
            4,
            "Database Systems",
            "Databases are organized collections of data. SQL databases like PostgreSQL and MySQL use structured schemas, while NoSQL databases like MongoDB offer flexible document storage. Vector databases are used for similarity search in AI applications.",
        ),
        Document::new(
            5,
            "Cloud Computing",
            "Cloud computing delivers computing services over the internet, including servers, storage, databases, networking, and software. Major providers include AWS, Google Cloud, and Microsoft Azure.",
        ),
    ]
}

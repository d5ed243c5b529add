//! rag-mcp - MCP server implementation
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! knowledge base search as a tool for AI assistants.
//!
//! # Tools
//!
//! - `search_rag` - Search the knowledge base
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rag_core::{ServerConfig, StaticKnowledgeBase};
//! use rag_mcp::RagMcpServer;
//! use rmcp::ServiceExt;
//!
//! let server = RagMcpServer::new(Arc::new(StaticKnowledgeBase::new()), ServerConfig::default());
//! server.serve(rmcp::transport::stdio()).await?.waiting().await?;
//! ```

mod format;
mod server;

pub use format::format_results;
pub use server::{tools, RagMcpServer, ToolResponse, MISSING_QUERY, SEARCH_TOOL};

// Re-export for convenience
pub use rag_core::{KnowledgeBase, ToolDescriptor};

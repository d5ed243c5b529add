//! Core domain types for the RAG system.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Numeric identifier.
    pub id: u64,

    /// Human-readable title.
    pub title: String,

    /// Document body.
    pub content: String,
}

impl Document {
    /// Create a new document.
    pub fn new(id: u64, title: &str, content: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

/// Description of a tool an MCP client may invoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Tool name, unique within the server.
    pub name: String,

    /// What the tool does, shown to the assistant.
    pub description: String,

    /// JSON schema object describing the tool's arguments.
    pub input_schema: Map<String, Value>,
}

impl ToolDescriptor {
    /// Argument names listed under the schema's `required` key.
    pub fn required_arguments(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

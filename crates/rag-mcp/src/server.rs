//! MCP server implementation.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use rag_core::{KnowledgeBase, ServerConfig, ToolDescriptor};

use crate::format::format_results;

/// Name of the search tool.
pub const SEARCH_TOOL: &str = "search_rag";

/// Response text for a search call without a usable query.
pub const MISSING_QUERY: &str = "Error: Query parameter is required";

/// RAG MCP Server state.
///
/// Constructed with its knowledge base and handed to an rmcp transport via
/// `ServiceExt::serve`. Holds no mutable state, so every call is independent.
pub struct RagMcpServer<K> {
    /// Knowledge base queried by `search_rag`.
    kb: Arc<K>,

    /// Identity advertised on initialize.
    config: ServerConfig,
}

/// Tool call response: text blocks in order.
///
/// Every outcome, including unknown tools and missing arguments, is reported
/// this way rather than as a protocol error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    /// Text blocks, always exactly one.
    pub content: Vec<String>,
}

impl ToolResponse {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            content: vec![message.into()],
        }
    }

    /// All blocks concatenated.
    pub fn joined(&self) -> String {
        self.content.concat()
    }

    /// Wrap in the success envelope sent over the wire.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::success(self.content.into_iter().map(Content::text).collect())
    }
}

impl<K: KnowledgeBase> RagMcpServer<K> {
    /// Create a new RAG MCP server over the given knowledge base.
    pub fn new(kb: Arc<K>, config: ServerConfig) -> Self {
        info!("Initializing RAG MCP server '{}'", config.name);
        Self { kb, config }
    }

    /// Dispatch a tool call by name.
    pub async fn call(&self, name: &str, arguments: &Map<String, Value>) -> ToolResponse {
        info!("Tool call: {}", name);

        if name != SEARCH_TOOL {
            warn!("Unknown tool requested: {}", name);
            return ToolResponse::text(format!("Unknown tool: {}", name));
        }

        debug!(?arguments, "search_rag arguments");
        let query = query_argument(arguments);
        if query.is_empty() {
            return ToolResponse::text(MISSING_QUERY);
        }

        self.search(&query).await
    }

    /// Search the knowledge base.
    pub async fn search(&self, query: &str) -> ToolResponse {
        info!("Searching for: {:?}", query);

        match self.kb.search(query).await {
            Ok(results) => ToolResponse::text(format_results(query, &results)),
            Err(e) => {
                warn!(code = e.error_code(), "Search failed: {}", e);
                ToolResponse::text(format!("Search failed: {}", e))
            }
        }
    }
}

/// List available tools.
pub fn tools() -> Vec<ToolDescriptor> {
    let schema = json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "The search query to find relevant documents"
            }
        },
        "required": ["query"]
    });

    vec![ToolDescriptor {
        name: SEARCH_TOOL.to_string(),
        description: "Search the RAG knowledge base for information. Provide a query string and get relevant documents.".to_string(),
        input_schema: match schema {
            Value::Object(map) => map,
            _ => Map::new(),
        },
    }]
}

/// Extract the `query` argument.
///
/// Absent, null, `false`, zero, and empty strings, arrays or objects all mean
/// no query. Any other non-string value is used as its JSON text.
fn query_argument(arguments: &Map<String, Value>) -> String {
    match arguments.get("query") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(query)) => query.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Array(items)) if items.is_empty() => String::new(),
        Some(Value::Object(map)) if map.is_empty() => String::new(),
        Some(other) => other.to_string(),
    }
}

fn to_rmcp_tool(descriptor: ToolDescriptor) -> Tool {
    Tool::new(
        descriptor.name,
        descriptor.description,
        Arc::new(descriptor.input_schema),
    )
}

impl<K: KnowledgeBase + 'static> ServerHandler for RagMcpServer<K> {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.config.name.clone();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: self
                .config
                .instructions
                .clone()
                .filter(|text| !text.is_empty()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = tools().into_iter().map(to_rmcp_tool).collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let response = self.call(&request.name, &arguments).await;
        Ok(response.into_call_result())
    }
}

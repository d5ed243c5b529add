//! Drives the server through the rmcp runtime with raw JSON-RPC lines over
//! an in-memory pipe, the same framing the stdio transport uses.

use std::sync::Arc;

use rag_core::{ServerConfig, StaticKnowledgeBase};
use rag_mcp::RagMcpServer;
use rmcp::ServiceExt;
use serde_json::{json, Value};
use tokio::io::{
    AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf, WriteHalf,
};

struct TestClient {
    lines: Lines<BufReader<ReadHalf<DuplexStream>>>,
    writer: WriteHalf<DuplexStream>,
    initialize: Value,
}

impl TestClient {
    async fn connect() -> Self {
        let (client_io, server_io) = tokio::io::duplex(64 * 1024);

        let server = RagMcpServer::new(Arc::new(StaticKnowledgeBase::new()), ServerConfig::default());
        tokio::spawn(async move {
            let service = server
                .serve(tokio::io::split(server_io))
                .await
                .expect("initialize handshake");
            let _ = service.waiting().await;
        });

        let (read, writer) = tokio::io::split(client_io);
        let mut client = Self {
            lines: BufReader::new(read).lines(),
            writer,
            initialize: Value::Null,
        };

        client
            .send(json!({
                "jsonrpc": "2.0",
                "id": 0,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "rag-test", "version": "0.0.0" }
                }
            }))
            .await;
        client.initialize = client.response(0).await;

        client
            .send(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
            .await;
        client
    }

    async fn send(&mut self, message: Value) {
        let mut line = message.to_string();
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await.unwrap();
        self.writer.flush().await.unwrap();
    }

    async fn response(&mut self, id: u64) -> Value {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .unwrap()
                .expect("server closed the channel");
            let message: Value = serde_json::from_str(&line).unwrap();
            if message["id"] == json!(id) {
                return message;
            }
        }
    }

    async fn request(&mut self, id: u64, method: &str, params: Value) -> Value {
        self.send(json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        }))
        .await;
        self.response(id).await
    }

    async fn call_tool(&mut self, id: u64, params: Value) -> Value {
        let response = self.request(id, "tools/call", params).await;
        assert!(response.get("error").is_none(), "unexpected fault: {}", response);
        response["result"].clone()
    }
}

fn single_text(result: &Value) -> &str {
    let content = result["content"].as_array().expect("content array");
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");
    content[0]["text"].as_str().expect("text block")
}

#[tokio::test]
async fn test_initialize_advertises_tools() {
    let client = TestClient::connect().await;

    let result = &client.initialize["result"];
    assert_eq!(result["serverInfo"]["name"], "rag-server");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_list_tools() {
    let mut client = TestClient::connect().await;

    let response = client.request(1, "tools/list", json!({})).await;
    let tools = response["result"]["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "search_rag");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["query"]));
    assert_eq!(tools[0]["inputSchema"]["properties"]["query"]["type"], "string");
}

#[tokio::test]
async fn test_call_search() {
    let mut client = TestClient::connect().await;

    let result = client
        .call_tool(
            1,
            json!({ "name": "search_rag", "arguments": { "query": "python" } }),
        )
        .await;

    assert_ne!(result["isError"], json!(true));
    assert!(single_text(&result).starts_with(
        "Found 1 result(s) for 'python':\n\nResult 1:\nTitle: Ben Torkian Test Example for MCP\n"
    ));
}

#[tokio::test]
async fn test_call_without_arguments() {
    let mut client = TestClient::connect().await;

    let result = client.call_tool(1, json!({ "name": "search_rag" })).await;
    assert_eq!(single_text(&result), "Error: Query parameter is required");

    let result = client
        .call_tool(2, json!({ "name": "search_rag", "arguments": {} }))
        .await;
    assert_eq!(single_text(&result), "Error: Query parameter is required");
}

#[tokio::test]
async fn test_call_unknown_tool() {
    let mut client = TestClient::connect().await;

    let result = client
        .call_tool(
            1,
            json!({ "name": "anything_else", "arguments": { "query": "python" } }),
        )
        .await;
    assert_ne!(result["isError"], json!(true));
    assert_eq!(single_text(&result), "Unknown tool: anything_else");
}

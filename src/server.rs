// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! MCP protocol server — exposes the documentation over JSON-RPC 2.0 on
//! stdio.
//!
//! The transport is newline-delimited JSON: one request per line on stdin,
//! one response per line on stdout. Logging goes to stderr, because stdout
//! belongs to the protocol.
//!
//! Request handling is synchronous and pure over the published
//! [`DocRegistry`]; only the outer read/write loop is async. The registry is
//! built before the loop starts, so every request observes a fully-loaded
//! document.

use crate::registry::DocRegistry;
use crate::search::{search, DEFAULT_LIMIT};
use crate::types::SearchOutcome;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, warn};

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error code: method not found.
const CODE_METHOD_NOT_FOUND: i64 = -32601;
/// JSON-RPC error code: invalid params.
const CODE_INVALID_PARAMS: i64 = -32602;
/// MCP error code: resource not found.
const CODE_RESOURCE_NOT_FOUND: i64 = -32002;

/// Message shown for a query that tokenized to nothing.
pub const INVALID_QUERY_MESSAGE: &str = "Please provide a search query.";

/// A JSON-RPC request as read off stdin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    /// Absent for notifications, which get no response.
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// A JSON-RPC response written to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpError {
    pub code: i64,
    pub message: String,
}

impl McpResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: String) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(McpError { code, message }),
        }
    }
}

/// The documentation server: a published registry plus protocol identity.
pub struct DocServer {
    registry: DocRegistry,
    name: String,
    version: String,
}

impl DocServer {
    pub fn new(registry: DocRegistry) -> Self {
        Self {
            registry,
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Handle one request. Returns `None` for notifications.
    pub fn handle_request(&self, request: &McpRequest) -> Option<McpResponse> {
        if request.method.starts_with("notifications/") {
            debug!(method = %request.method, "notification consumed");
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => McpResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": { "listChanged": false },
                        "resources": { "listChanged": false }
                    },
                    "serverInfo": {
                        "name": self.name,
                        "version": self.version,
                    }
                }),
            ),
            "tools/list" => McpResponse::success(
                id,
                json!({
                    "tools": [{
                        "name": "search_docs",
                        "description": "Search the Svelte documentation for the most relevant lines",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "query": {
                                    "type": "string",
                                    "description": "Free-text search query"
                                },
                                "limit": {
                                    "type": "integer",
                                    "description": "Maximum number of results (default 3)"
                                }
                            },
                            "required": ["query"]
                        }
                    }]
                }),
            ),
            "tools/call" => self.handle_tool_call(id, &request.params),
            "resources/list" => McpResponse::success(
                id,
                json!({ "resources": self.registry.list() }),
            ),
            "resources/read" => self.handle_resource_read(id, &request.params),
            other => {
                warn!(method = %other, "unknown method");
                McpResponse::error(id, CODE_METHOD_NOT_FOUND, format!("Method not found: {other}"))
            }
        };
        Some(response)
    }

    fn handle_tool_call(&self, id: Value, params: &Value) -> McpResponse {
        let tool_name = params.get("name").and_then(Value::as_str).unwrap_or("");
        if tool_name != "search_docs" {
            return McpResponse::error(
                id,
                CODE_METHOD_NOT_FOUND,
                format!("Tool not found: {tool_name}"),
            );
        }

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));
        let Some(query) = arguments.get("query").and_then(Value::as_str) else {
            return McpResponse::error(
                id,
                CODE_INVALID_PARAMS,
                "search_docs requires a 'query' string argument".to_string(),
            );
        };
        let limit = arguments
            .get("limit")
            .and_then(Value::as_u64)
            .map_or(DEFAULT_LIMIT, |n| n as usize);

        let text = render_outcome(search(self.registry.sections(), query, limit), query);
        McpResponse::success(
            id,
            json!({
                "content": [{ "type": "text", "text": text }]
            }),
        )
    }

    fn handle_resource_read(&self, id: Value, params: &Value) -> McpResponse {
        let Some(uri) = params.get("uri").and_then(Value::as_str) else {
            return McpResponse::error(
                id,
                CODE_INVALID_PARAMS,
                "resources/read requires a 'uri' string parameter".to_string(),
            );
        };

        match self.registry.resolve(uri) {
            Ok(text) => McpResponse::success(
                id,
                json!({
                    "contents": [{
                        "uri": uri,
                        "mimeType": "text/plain",
                        "text": text
                    }]
                }),
            ),
            Err(e) => McpResponse::error(id, CODE_RESOURCE_NOT_FOUND, e.to_string()),
        }
    }

    /// Run the stdio loop until stdin closes.
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let request: McpRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(e) => {
                    error!(error = %e, "unparseable request line");
                    continue;
                }
            };

            if let Some(response) = self.handle_request(&request) {
                let mut payload = serde_json::to_string(&response)
                    .expect("responses are always serializable");
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        debug!("stdin closed, shutting down");
        Ok(())
    }
}

/// Render a search outcome as the user-facing text block.
///
/// Never silent: the sentinel outcomes get explicit messages so callers can
/// tell a malformed query from an unmatched one.
pub fn render_outcome(outcome: SearchOutcome, query: &str) -> String {
    match outcome {
        SearchOutcome::InvalidQuery => INVALID_QUERY_MESSAGE.to_string(),
        SearchOutcome::NoMatches => format!("No matches found for \"{query}\"."),
        SearchOutcome::Hits(hits) => hits
            .iter()
            .map(crate::types::SearchHit::render)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

//! MCP Server implementation
//!
//! Implements the Model Context Protocol server for stdio transport.
//! Messages are newline-delimited JSON-RPC 2.0.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::error::Result;
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;

/// MCP Server info
const SERVER_NAME: &str = "text-processing";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for text summarization
pub struct McpServer {
    /// Tool handler
    tool_handler: ToolHandler,

    /// Whether the client sent `notifications/initialized`
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(config: Config) -> Self {
        Self {
            tool_handler: ToolHandler::new(config),
            initialized: false,
        }
    }

    /// Whether the initialization handshake has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the server on stdio until stdin closes
    pub async fn run_stdio(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!(name = SERVER_NAME, version = SERVER_VERSION, "MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_message(&line).await {
                Ok(Some(response)) => {
                    let mut payload = serde_json::to_string(&response)?;
                    payload.push('\n');
                    stdout.write_all(payload.as_bytes()).await?;
                    stdout.flush().await?;
                }
                Ok(None) => {
                    // Notification, no response needed
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling message");
                }
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one incoming JSON-RPC message.
    ///
    /// Returns `None` for notifications.
    pub async fn handle_message(&mut self, message: &str) -> Result<Option<JsonRpcResponse>> {
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable message");
                return Ok(Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(e.to_string()),
                )));
            }
        };

        tracing::debug!(method = %request.method, id = ?request.id, "received message");

        if request.jsonrpc != JSONRPC_VERSION {
            return Ok(self.reply(
                &request,
                Err(JsonRpcError::invalid_request(format!(
                    "Unsupported jsonrpc version: {}",
                    request.jsonrpc
                ))),
            ));
        }

        let outcome = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(&request).await,
            methods::INITIALIZED => {
                self.initialized = true;
                tracing::info!("client initialized");
                return Ok(None);
            }
            methods::PING => Ok(serde_json::json!({})),
            methods::LIST_TOOLS => self.handle_list_tools().await,
            methods::CALL_TOOL => self.handle_call_tool(&request).await,
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        Ok(self.reply(&request, outcome))
    }

    /// Wrap an outcome into a response, dropping it for notifications
    fn reply(
        &self,
        request: &JsonRpcRequest,
        outcome: std::result::Result<Value, JsonRpcError>,
    ) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            return None;
        }

        let id = request.id.clone();
        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    /// Handle initialize request
    async fn handle_initialize(
        &self,
        request: &JsonRpcRequest,
    ) -> std::result::Result<Value, JsonRpcError> {
        if let Some(params) = request
            .params
            .clone()
            .and_then(|p| serde_json::from_value::<InitializeParams>(p).ok())
        {
            tracing::info!(
                client = %params.client_info.name,
                client_version = %params.client_info.version,
                protocol = %params.protocol_version,
                "initialize"
            );
        }

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
        };

        to_result(result)
    }

    /// Handle list tools request
    async fn handle_list_tools(&self) -> std::result::Result<Value, JsonRpcError> {
        to_result(ListToolsResult {
            tools: self.tool_handler.list_tools(),
        })
    }

    /// Handle call tool request.
    ///
    /// Malformed params, bad tool arguments and unknown tools are protocol
    /// errors; a fault inside the summarizer comes back as an error result.
    async fn handle_call_tool(
        &self,
        request: &JsonRpcRequest,
    ) -> std::result::Result<Value, JsonRpcError> {
        let params: CallToolParams = match request.params.as_ref() {
            Some(p) => serde_json::from_value(p.clone()).map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid tool parameters: {}", e))
            })?,
            None => return Err(JsonRpcError::invalid_params("Missing tool parameters")),
        };

        let result = self.tool_handler.call_tool(&params.name, params.arguments)?;
        to_result(result)
    }
}

fn to_result<T: serde::Serialize>(value: T) -> std::result::Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default())
    }

    #[test]
    fn test_server_info() {
        assert_eq!(SERVER_NAME, "text-processing");
    }

    #[test]
    fn test_initialized_notification() {
        let mut server = server();
        let response = tokio_test::block_on(
            server.handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#),
        )
        .unwrap();
        assert!(response.is_none());
        assert!(server.is_initialized());
    }

    #[test]
    fn test_wrong_jsonrpc_version() {
        let mut server = server();
        let response = tokio_test::block_on(
            server.handle_message(r#"{"jsonrpc":"1.0","id":4,"method":"ping"}"#),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            response.as_error().map(|e| e.code),
            Some(error_codes::INVALID_REQUEST)
        );
    }

    #[test]
    fn test_unknown_notification_is_silent() {
        let mut server = server();
        let response = tokio_test::block_on(
            server.handle_message(r#"{"jsonrpc":"2.0","method":"notifications/cancelled"}"#),
        )
        .unwrap();
        assert!(response.is_none());
    }
}

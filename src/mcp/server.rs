//! MCP server implementation
//!
//! Dispatches JSON-RPC messages to the resource and tool handlers. One
//! server instance is constructed per connection; the handlers are pure
//! functions over the shared registry, so nothing is carried between
//! requests.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::docs::DocRegistry;
use crate::error::Result;
use crate::mcp::resources::ResourceHandler;
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;

/// MCP server info
const SERVER_NAME: &str = "bedrock-docs";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server for the Bedrock documentation registry
pub struct McpServer {
    /// Resource handler
    resource_handler: ResourceHandler,

    /// Tool handler
    tool_handler: ToolHandler,

    /// Whether initialized
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server bound to a registry
    pub fn new(registry: Arc<DocRegistry>) -> Self {
        Self {
            resource_handler: ResourceHandler::new(registry.clone()),
            tool_handler: ToolHandler::new(registry),
            initialized: false,
        }
    }

    /// Run the server on stdio
    pub async fn run_stdio(&mut self) -> Result<()> {
        tracing::info!("stdio transport started");

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        let reader = stdin.lock();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_message(&line) {
                Ok(Some(response)) => {
                    let response_str = serde_json::to_string(&response)?;
                    writeln!(stdout, "{}", response_str)?;
                    stdout.flush()?;
                }
                Ok(None) => {
                    // Notification, no response needed
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling message");
                }
            }
        }

        Ok(())
    }

    /// Handle an incoming JSON-RPC message
    ///
    /// Returns `None` for notifications, which take no response.
    pub fn handle_message(&mut self, message: &str) -> Result<Option<JsonRpcResponse>> {
        // Try to parse as request
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(req) => req,
            Err(e) => {
                return Ok(Some(JsonRpcResponse::error(
                    RequestId::Number(0),
                    JsonRpcError::parse_error(e.to_string()),
                )));
            }
        };

        // Handle the request
        match request.method.as_str() {
            methods::INITIALIZE => {
                let result = self.handle_initialize()?;
                Ok(Some(JsonRpcResponse::success(request.id, result)))
            }
            methods::INITIALIZED => {
                self.initialized = true;
                Ok(None) // Notification, no response
            }
            methods::PING => Ok(Some(JsonRpcResponse::success(
                request.id,
                serde_json::json!({}),
            ))),
            methods::LIST_RESOURCES => {
                let result = serde_json::to_value(self.resource_handler.list_resources())?;
                Ok(Some(JsonRpcResponse::success(request.id, result)))
            }
            methods::READ_RESOURCE => Ok(Some(self.handle_read_resource(&request)?)),
            methods::LIST_TOOLS => {
                let result = serde_json::to_value(ListToolsResult {
                    tools: self.tool_handler.list_tools(),
                })?;
                Ok(Some(JsonRpcResponse::success(request.id, result)))
            }
            methods::CALL_TOOL => Ok(Some(self.handle_call_tool(&request)?)),
            _ => Ok(Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::method_not_found(&request.method),
            ))),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Result<Value> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
                resources: Some(ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                }),
            },
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle read resource request
    fn handle_read_resource(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        let params: ReadResourceParams = match request.params.as_ref() {
            Some(p) => match serde_json::from_value(p.clone()) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(JsonRpcResponse::error(
                        request.id.clone(),
                        JsonRpcError::invalid_params(format!("Invalid resource parameters: {}", e)),
                    ));
                }
            },
            None => {
                return Ok(JsonRpcResponse::error(
                    request.id.clone(),
                    JsonRpcError::invalid_params("Missing resource parameters"),
                ));
            }
        };

        match self.resource_handler.read_resource(&params.uri) {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id.clone(),
                serde_json::to_value(result)?,
            )),
            Err(e) => Ok(JsonRpcResponse::error(request.id.clone(), e.into())),
        }
    }

    /// Handle call tool request
    fn handle_call_tool(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        let params: CallToolParams = match request.params.as_ref() {
            Some(p) => match serde_json::from_value(p.clone()) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(JsonRpcResponse::error(
                        request.id.clone(),
                        JsonRpcError::invalid_params(format!("Invalid tool parameters: {}", e)),
                    ));
                }
            },
            None => {
                return Ok(JsonRpcResponse::error(
                    request.id.clone(),
                    JsonRpcError::invalid_params("Missing tool parameters"),
                ));
            }
        };

        match self.tool_handler.call_tool(&params.name, params.arguments) {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id.clone(),
                serde_json::to_value(result)?,
            )),
            Err(e) => Ok(JsonRpcResponse::error(request.id.clone(), e.into())),
        }
    }
}

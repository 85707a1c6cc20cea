//! Error types for the Bedrock docs MCP server
//!
//! This module defines the error hierarchy for all operations in the server.

use thiserror::Error;

/// Main error type for the Bedrock docs MCP server
#[derive(Error, Debug)]
pub enum DocsMcpError {
    /// Document registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Duplicate document id: {id}")]
    DuplicateId { id: String },
}

/// MCP protocol errors
///
/// These map onto JSON-RPC error codes at the facade boundary:
/// `UnknownResource` is an invalid request, `InvalidArguments` is
/// invalid params, and `UnknownTool` is method-not-found.
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Unknown resource: {uri}")]
    UnknownResource { uri: String },
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, DocsMcpError>;

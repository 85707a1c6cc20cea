//! MCP (Model Context Protocol) module
//!
//! Implements the MCP server protocol for resource access and tool
//! invocation.

pub mod resources;
pub mod server;
pub mod tools;
pub mod types;

//! Bedrock Docs MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes a fixed set of Amazon
//! Bedrock documentation excerpts as resources, plus keyword search and
//! capabilities-lookup tools. Serves stdio and HTTP transports.

pub mod config;
pub mod docs;
pub mod error;
pub mod http;
pub mod mcp;

pub use config::Config;
pub use error::{DocsMcpError, Result};

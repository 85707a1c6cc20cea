//! Configuration for the Bedrock docs MCP server
//!
//! Handles environment variables and the protocol constants shared between
//! the resource and tool handlers.

/// Configuration for the Bedrock docs MCP server
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the HTTP transport
    pub port: u16,
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self { port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Protocol constants
pub mod docs {
    /// URI prefix for document resources
    pub const URI_PREFIX: &str = "bedrock://docs/";

    /// MIME type for all document resources
    pub const MIME_TYPE: &str = "text/plain";

    /// Id of the document backing the `get_capabilities` tool
    pub const CAPABILITIES_DOC_ID: &str = "overview";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        std::env::remove_var("PORT");
        let config = Config::new();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_uri_prefix() {
        assert!(docs::URI_PREFIX.ends_with('/'));
    }
}

//! Bedrock Docs MCP Server
//!
//! A Model Context Protocol (MCP) server for Amazon Bedrock documentation.
//! Serves a fixed document registry over stdio or HTTP.

use std::sync::Arc;

use clap::Parser;

use bedrock_docs_mcp_server::config::Config;
use bedrock_docs_mcp_server::docs::{default_documents, DocRegistry};
use bedrock_docs_mcp_server::error::Result;
use bedrock_docs_mcp_server::http;
use bedrock_docs_mcp_server::mcp::server::McpServer;

/// Bedrock Docs MCP Server
#[derive(Parser)]
#[command(name = "bedrock-docs-mcp-server")]
#[command(author, version, about = "MCP server for Amazon Bedrock documentation")]
struct Cli {
    /// Serve over stdio instead of HTTP
    #[arg(long)]
    stdio: bool,

    /// Port for the HTTP transport (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration and build the registry; duplicate ids fail fast here
    let config = Config::new();
    let registry = Arc::new(DocRegistry::new(default_documents())?);

    if cli.stdio {
        let mut server = McpServer::new(registry);
        server.run_stdio().await?;
    } else {
        let port = cli.port.unwrap_or(config.port);
        http::serve(registry, port).await?;
    }

    Ok(())
}

//! MCP tool definitions and handlers
//!
//! Defines the two documentation tools and their implementations.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::docs::CAPABILITIES_DOC_ID;
use crate::docs::{DocRegistry, Document};
use crate::error::McpError;
use crate::mcp::types::{CallToolResult, Tool};

/// Tool names, shared between `list_tools` and `call_tool` so the listing
/// and the dispatch cannot diverge.
pub const SEARCH_DOCS: &str = "search_docs";
pub const GET_CAPABILITIES: &str = "get_capabilities";

/// Separator between rendered search results
const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Fallback text when the capabilities document is not registered
const CAPABILITIES_FALLBACK: &str = "No capabilities overview is available.";

/// Tool handler
pub struct ToolHandler {
    registry: Arc<DocRegistry>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(registry: Arc<DocRegistry>) -> Self {
        Self { registry }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            tool_def(
                SEARCH_DOCS,
                "Search the Amazon Bedrock documentation by keyword",
                search_docs_schema(),
            ),
            tool_def(
                GET_CAPABILITIES,
                "Get an overview of Amazon Bedrock capabilities",
                json!({"type": "object", "properties": {}}),
            ),
        ]
    }

    /// Call a tool by name
    pub fn call_tool(&self, name: &str, args: Value) -> Result<CallToolResult, McpError> {
        match name {
            SEARCH_DOCS => self.handle_search_docs(args),
            GET_CAPABILITIES => Ok(self.handle_get_capabilities()),
            _ => Err(McpError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }

    fn handle_search_docs(&self, args: Value) -> Result<CallToolResult, McpError> {
        #[derive(Deserialize)]
        struct Args {
            query: String,
        }

        // The empty string is a valid query (it matches every document);
        // only a missing or non-string `query` is rejected.
        let args: Args = serde_json::from_value(args).map_err(|e| McpError::InvalidArguments {
            message: format!("Invalid arguments: {}", e),
        })?;

        let results = self.registry.search(&args.query);
        if results.is_empty() {
            return Ok(CallToolResult::text(format!(
                "No documentation found matching \"{}\".",
                args.query
            )));
        }

        let sections: Vec<String> = results.iter().map(|doc| render_section(doc)).collect();
        let text = format!(
            "Found {} document(s) matching \"{}\":\n\n{}",
            results.len(),
            args.query,
            sections.join(SECTION_SEPARATOR)
        );

        Ok(CallToolResult::text(text))
    }

    fn handle_get_capabilities(&self) -> CallToolResult {
        let text = self
            .registry
            .get(CAPABILITIES_DOC_ID)
            .map(|doc| doc.body.clone())
            .unwrap_or_else(|| CAPABILITIES_FALLBACK.to_string());

        CallToolResult::text(text)
    }
}

/// Render one matched document as a search-result section.
fn render_section(doc: &Document) -> String {
    let mut section = format!("## {}\n{}", doc.title, doc.body);
    if let Some(url) = &doc.url {
        section.push_str(&format!("\nSource: {}", url));
    }
    section
}

// ==================== Schema Definitions ====================

fn tool_def(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema,
    }
}

fn search_docs_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Keyword to match against document titles and bodies"
            }
        },
        "required": ["query"]
    })
}

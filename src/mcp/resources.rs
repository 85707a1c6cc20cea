//! MCP resource handlers
//!
//! Maps registry documents onto the protocol's resource listing and read
//! operations. Every document is addressed by a `bedrock://docs/{id}` URI.

use std::sync::Arc;

use crate::config::docs::{MIME_TYPE, URI_PREFIX};
use crate::docs::{DocRegistry, Document};
use crate::error::McpError;
use crate::mcp::types::{ListResourcesResult, ReadResourceResult, Resource, ResourceContent};

/// Resource handler
pub struct ResourceHandler {
    registry: Arc<DocRegistry>,
}

impl ResourceHandler {
    /// Create a new resource handler
    pub fn new(registry: Arc<DocRegistry>) -> Self {
        Self { registry }
    }

    /// List every registered document as a resource, in registration order.
    pub fn list_resources(&self) -> ListResourcesResult {
        let resources = self
            .registry
            .list()
            .map(|doc| Resource {
                uri: document_uri(&doc.id),
                name: doc.title.clone(),
                description: Some(doc.summary()),
                mime_type: Some(MIME_TYPE.to_string()),
            })
            .collect();

        ListResourcesResult { resources }
    }

    /// Read one document by its URI.
    ///
    /// A URI with the wrong scheme or an unknown id segment is an unknown
    /// resource, surfaced to the client as an invalid-request error.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let id = uri.strip_prefix(URI_PREFIX).ok_or_else(|| McpError::UnknownResource {
            uri: uri.to_string(),
        })?;

        let doc = self.registry.get(id).ok_or_else(|| McpError::UnknownResource {
            uri: uri.to_string(),
        })?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContent {
                uri: uri.to_string(),
                mime_type: Some(MIME_TYPE.to_string()),
                text: Some(render_document(doc)),
            }],
        })
    }
}

/// Build the resource URI for a document id.
pub fn document_uri(id: &str) -> String {
    format!("{}{}", URI_PREFIX, id)
}

/// Render a document as resource text: heading, body, and the source link
/// when one is recorded.
fn render_document(doc: &Document) -> String {
    let mut text = format!("# {}\n\n{}", doc.title, doc.body);
    if let Some(url) = &doc.url {
        text.push_str(&format!("\n\nSource: {}", url));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Arc<DocRegistry> {
        Arc::new(
            DocRegistry::new(vec![
                Document {
                    id: "a".to_string(),
                    title: "Alpha".to_string(),
                    body: "first doc".to_string(),
                    url: Some("https://example.com/a".to_string()),
                },
                Document {
                    id: "b".to_string(),
                    title: "Beta".to_string(),
                    body: "alpha mention".to_string(),
                    url: None,
                },
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_list_resources_covers_every_document() {
        let handler = ResourceHandler::new(registry());
        let result = handler.list_resources();
        assert_eq!(result.resources.len(), 2);
        assert_eq!(result.resources[0].uri, "bedrock://docs/a");
        assert_eq!(result.resources[0].name, "Alpha");
        assert_eq!(result.resources[1].uri, "bedrock://docs/b");
        assert_eq!(
            result.resources[0].mime_type.as_deref(),
            Some("text/plain")
        );
    }

    #[test]
    fn test_read_resource_renders_title_body_and_source() {
        let handler = ResourceHandler::new(registry());
        let result = handler.read_resource("bedrock://docs/a").unwrap();
        let text = result.contents[0].text.as_deref().unwrap();
        assert!(text.starts_with("# Alpha"));
        assert!(text.contains("first doc"));
        assert!(text.ends_with("Source: https://example.com/a"));
    }

    #[test]
    fn test_read_resource_without_url_omits_source() {
        let handler = ResourceHandler::new(registry());
        let result = handler.read_resource("bedrock://docs/b").unwrap();
        let text = result.contents[0].text.as_deref().unwrap();
        assert!(!text.contains("Source:"));
    }

    #[test]
    fn test_read_unknown_id_is_unknown_resource() {
        let handler = ResourceHandler::new(registry());
        let err = handler.read_resource("bedrock://docs/missing").unwrap_err();
        assert!(matches!(err, McpError::UnknownResource { .. }));
    }

    #[test]
    fn test_read_wrong_scheme_is_unknown_resource() {
        let handler = ResourceHandler::new(registry());
        let err = handler.read_resource("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, McpError::UnknownResource { .. }));
    }
}

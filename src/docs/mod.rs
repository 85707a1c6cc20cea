//! Document registry module
//!
//! Holds the read-only set of documentation excerpts served by the MCP
//! facade and the queries over it.

pub mod content;
pub mod registry;

pub use content::default_documents;
pub use registry::{DocRegistry, Document};

//! Document registry
//!
//! An immutable, ordered collection of documentation excerpts. The registry
//! is built once at startup (or per test) from an injected document list and
//! is never mutated afterwards, so every query is a pure in-memory lookup.

use std::collections::HashSet;

use crate::error::RegistryError;

/// A single documentation excerpt
#[derive(Debug, Clone)]
pub struct Document {
    /// Short stable identifier, unique within the registry
    pub id: String,

    /// Human-readable heading
    pub title: String,

    /// Multi-paragraph text content
    pub body: String,

    /// Canonical external reference, if any
    pub url: Option<String>,
}

impl Document {
    /// Derived one-line description: the first sentence of the body.
    pub fn summary(&self) -> String {
        match self.body.split_once('.') {
            Some((first, _)) => format!("{}.", first.trim()),
            None => self.body.clone(),
        }
    }
}

/// Immutable document registry
///
/// Insertion order is preserved in `list` and `search` results.
#[derive(Debug)]
pub struct DocRegistry {
    documents: Vec<Document>,
}

impl DocRegistry {
    /// Build a registry from a document list, rejecting duplicate ids.
    pub fn new(documents: Vec<Document>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(RegistryError::DuplicateId {
                    id: doc.id.clone(),
                });
            }
        }

        Ok(Self { documents })
    }

    /// All documents, in registration order.
    pub fn list(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Case-insensitive substring search over title and body.
    ///
    /// A document matches if the lower-cased query occurs anywhere in its
    /// lower-cased title or body. Results keep registration order and each
    /// document appears at most once. The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Document> {
        let needle = query.to_lowercase();
        self.documents
            .iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(&needle)
                    || doc.body.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, body: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            url: None,
        }
    }

    fn sample_registry() -> DocRegistry {
        DocRegistry::new(vec![
            doc("a", "Alpha", "first doc"),
            doc("b", "Beta", "alpha mention"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = DocRegistry::new(vec![
            doc("a", "Alpha", "first"),
            doc("a", "Alias", "second"),
        ]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateId { id }) if id == "a"
        ));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = sample_registry();
        let ids: Vec<&str> = registry.list().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_get_exact_match() {
        let registry = sample_registry();
        assert_eq!(registry.get("a").unwrap().title, "Alpha");
        assert!(registry.get("A").is_none());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_search_matches_title_and_body() {
        let registry = sample_registry();
        let ids: Vec<&str> = registry.search("alpha").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = sample_registry();
        let upper: Vec<&str> = registry.search("ALPHA").iter().map(|d| d.id.as_str()).collect();
        let lower: Vec<&str> = registry.search("alpha").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_search_no_duplicate_hits() {
        // "beta" appears in both title and body of this document
        let registry = DocRegistry::new(vec![doc("b", "Beta", "beta release notes")]).unwrap();
        assert_eq!(registry.search("beta").len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let registry = sample_registry();
        assert_eq!(registry.search("").len(), registry.len());
    }

    #[test]
    fn test_search_miss_is_empty() {
        let registry = sample_registry();
        assert!(registry.search("zzz").is_empty());
    }

    #[test]
    fn test_summary_is_first_sentence() {
        let d = Document {
            id: "x".to_string(),
            title: "X".to_string(),
            body: "First sentence. Second sentence.".to_string(),
            url: None,
        };
        assert_eq!(d.summary(), "First sentence.");
    }
}

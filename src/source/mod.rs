//! Source document store.
//!
//! The driver reads collections through `DocumentSource`; `CouchSource` talks
//! to a live CouchDB instance and `MemorySource` backs tests and examples.

pub mod couch;

pub use couch::CouchSource;

use crate::error::{DecantError, Result};
use crate::pour::Document;

/// A schemaless store the migration reads from.
pub trait DocumentSource {
    /// Names of every collection in the store.
    fn collections(&self) -> Result<Vec<String>>;

    /// Identifiers of every document in a collection, in a stable order.
    fn document_ids(&self, collection: &str) -> Result<Vec<String>>;

    /// Fetch one document as an ordered field-to-value mapping.
    fn fetch(&self, collection: &str, id: &str) -> Result<Document>;
}

/// In-memory document source. Document ids are positional.
#[derive(Debug, Default)]
pub struct MemorySource {
    collections: Vec<(String, Vec<Document>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource::default()
    }

    /// Builder-style collection registration; enumeration order is insertion
    /// order.
    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        documents: Vec<Document>,
    ) -> Self {
        self.collections.push((name.into(), documents));
        self
    }
}

impl DocumentSource for MemorySource {
    fn collections(&self) -> Result<Vec<String>> {
        Ok(self.collections.iter().map(|(n, _)| n.clone()).collect())
    }

    fn document_ids(&self, collection: &str) -> Result<Vec<String>> {
        let (_, docs) = self
            .collections
            .iter()
            .find(|(n, _)| n == collection)
            .ok_or_else(|| {
                DecantError::Source(format!("no such collection: {collection}"))
            })?;
        Ok((0..docs.len()).map(|i| i.to_string()).collect())
    }

    fn fetch(&self, collection: &str, id: &str) -> Result<Document> {
        let (_, docs) = self
            .collections
            .iter()
            .find(|(n, _)| n == collection)
            .ok_or_else(|| {
                DecantError::Source(format!("no such collection: {collection}"))
            })?;
        let index: usize = id
            .parse()
            .map_err(|_| DecantError::Source(format!("bad document id: {id}")))?;
        docs.get(index).cloned().ok_or_else(|| {
            DecantError::Source(format!("no document {id} in {collection}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_round_trip() {
        let source = MemorySource::new().with_collection(
            "users",
            vec![Document::new().with("name", "Alice")],
        );

        assert_eq!(source.collections().unwrap(), vec!["users"]);
        assert_eq!(source.document_ids("users").unwrap(), vec!["0"]);

        let doc = source.fetch("users", "0").unwrap();
        let names: Vec<&str> = doc.field_names().collect();
        assert_eq!(names, vec!["name"]);
    }

    #[test]
    fn test_unknown_collection_is_a_source_error() {
        let source = MemorySource::new();
        assert!(matches!(
            source.document_ids("ghost"),
            Err(DecantError::Source(_))
        ));
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// One schemaless record read from the source store.
///
/// Field order is the order the source store enumerates them in, and it is
/// what determines column order when a document seeds a new table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Document { fields: Map::new() }
    }

    /// Builder-style field assignment, mostly useful in tests and examples.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Fields with their values coerced to text, in document order.
    pub fn text_fields(&self) -> impl Iterator<Item = (&str, String)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), text_of(v)))
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Document { fields }
    }
}

/// Coerce any JSON value to the text that will be stored in the destination.
///
/// Strings pass through verbatim; everything else (numbers, booleans, null,
/// nested objects and arrays) renders as its compact JSON text. Nested values
/// are not expanded into separate tables.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// What to do when a collection fails to translate partway through.
///
/// Source-store errors always abort the whole run regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate the error to the top-level caller; the run stops.
    #[default]
    AbortRun,
    /// Abandon the failed collection, log it, and continue with the next one.
    /// The destination is left with whatever the collection got before failing.
    SkipCollection,
}

/// Connection parameters and run policy, passed to the driver at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host of the source document store.
    pub couch_host: String,

    /// Port of the source document store.
    pub couch_port: u16,

    /// Destination database file; created if absent.
    pub sqlite_path: PathBuf,

    /// How a failed collection affects the rest of the run.
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            couch_host: String::from("localhost"),
            couch_port: 5984,
            sqlite_path: PathBuf::from("decant.db"),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// What a run accomplished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PourSummary {
    /// Collections enumerated from the source store.
    pub collections: usize,

    /// Tables fully translated. Empty collections create none, and a
    /// collection abandoned partway does not count even if its table exists.
    pub tables_created: usize,

    /// Rows inserted by fully translated collections, seed rows included.
    pub rows_inserted: usize,

    /// Collections abandoned under `FailurePolicy::SkipCollection`.
    pub collections_failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_order_preserved() {
        let doc = Document::new().with("z", "1").with("a", "2").with("m", "3");
        let names: Vec<&str> = doc.field_names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(text_of(&json!("plain")), "plain");
        assert_eq!(text_of(&json!(42)), "42");
        assert_eq!(text_of(&json!(true)), "true");
        assert_eq!(text_of(&json!(null)), "null");
        assert_eq!(text_of(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_duplicate_field_keeps_last_value() {
        let doc = Document::new().with("a", "first").with("a", "second");
        assert_eq!(doc.len(), 1);
        let (_, value) = doc.text_fields().next().unwrap();
        assert_eq!(value, "second");
    }
}

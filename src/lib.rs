//! # Decant - Document Store to Relational Store Migration
//!
//! Migrates named collections of schemaless JSON documents into relational
//! tables, one table per collection. Documents in a collection need not share
//! fields: the first document seeds the table's columns and later documents
//! grow the column set as they introduce unseen fields, so every document
//! lands as a row regardless of shape. All values are stored as text.
//!
//! ## Modules
//!
//! - **pour**: the translation engine (schema tracking, statement building,
//!   per-collection translation, run driver)
//! - **source**: the document store being read (CouchDB over HTTP, or in-memory)
//! - **sink**: the relational store being written (SQLite)
//!
//! ## Quick Start
//!
//! ```rust
//! use decant::{Config, Decanter, Document, MemorySource, SqliteSink};
//!
//! # fn main() -> decant::Result<()> {
//! let source = MemorySource::new().with_collection(
//!     "users",
//!     vec![
//!         Document::new().with("name", "Alice"),
//!         Document::new().with("name", "Bob").with("email", "bob@example.com"),
//!     ],
//! );
//! let mut sink = SqliteSink::open_in_memory()?;
//!
//! let summary = Decanter::new(Config::default()).pour(&source, &mut sink)?;
//!
//! // The "users" table now has columns [name, email] and two rows; Alice's
//! // email column is NULL because her document never had that field.
//! assert_eq!(summary.rows_inserted, 2);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pour;
pub mod sink;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{DecantError, Result};
pub use pour::{Config, Decanter, Document, FailurePolicy, PourSummary};
pub use sink::{RelationalSink, SqliteSink};
pub use source::{CouchSource, DocumentSource, MemorySource};

/// Main entry point: connect to the configured document store and pour every
/// collection into the configured SQLite file.
///
/// Both connections live for the duration of the run and are released on
/// every exit path, fatal errors included.
pub fn run(config: Config) -> Result<PourSummary> {
    let source = CouchSource::connect(&config.couch_host, config.couch_port)?;
    let mut sink = SqliteSink::open(&config.sqlite_path)?;
    Decanter::new(config).pour(&source, &mut sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_migration() {
        let source = MemorySource::new().with_collection(
            "users",
            vec![
                Document::new().with("_id", "u1").with("name", "Alice"),
                Document::new().with("_id", "u2").with("name", "O'Brien"),
            ],
        );
        let mut sink = SqliteSink::open_in_memory().unwrap();

        let summary = Decanter::new(Config::default())
            .pour(&source, &mut sink)
            .unwrap();

        assert_eq!(summary.collections, 1);
        assert_eq!(summary.rows_inserted, 2);

        let name: String = sink
            .connection()
            .query_row("SELECT name FROM users WHERE _id = 'u2'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(name, "O'Brien");
    }
}

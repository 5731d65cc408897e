//! Destination relational store.
//!
//! The translation engine only needs to execute statements and ask whether a
//! column exists; `RelationalSink` is that seam. `SqliteSink` is the shipping
//! implementation.

pub mod sqlite;

pub use sqlite::SqliteSink;

use crate::error::Result;

/// A relational store that accepts schema and data statements.
pub trait RelationalSink {
    /// Execute one statement (create table, drop table, add column, insert).
    fn execute(&mut self, statement: &str) -> Result<()>;

    /// Whether the named table currently has the named column.
    fn has_column(&self, table: &str, column: &str) -> Result<bool>;

    /// Make the run's writes durable. Default is a no-op for stores that
    /// commit each statement as it executes.
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

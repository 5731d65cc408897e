use crate::error::Result;
use crate::sink::RelationalSink;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite-backed destination. The connection is long-lived for the duration
/// of a run and closed on drop, on every exit path.
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    /// Open (creating if absent) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(SqliteSink { conn })
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(SqliteSink { conn })
    }

    /// Raw connection access, for callers that need to read back results.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl RelationalSink for SqliteSink {
    fn execute(&mut self, statement: &str) -> Result<()> {
        self.conn.execute(statement, [])?;
        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2")?;
        let found = stmt.exists(params![table, column])?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pour::statements;

    #[test]
    fn test_open_creates_missing_file() {
        let dir = std::env::temp_dir().join("decant-sink-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fresh.db");
        let _ = std::fs::remove_file(&path);

        SqliteSink::open(&path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_has_column() {
        let mut sink = SqliteSink::open_in_memory().unwrap();
        sink.execute("CREATE TABLE t (a TEXT, b TEXT)").unwrap();

        assert!(sink.has_column("t", "a").unwrap());
        assert!(sink.has_column("t", "b").unwrap());
        assert!(!sink.has_column("t", "c").unwrap());
        assert!(!sink.has_column("missing", "a").unwrap());
    }

    #[test]
    fn test_failed_statement_reports_cause() {
        let mut sink = SqliteSink::open_in_memory().unwrap();
        let err = sink.execute("INSERT INTO nowhere (a) VALUES ('1')");
        let message = err.unwrap_err().to_string();
        assert!(message.contains("relational store error"));
        assert!(message.contains("nowhere"));
    }

    #[test]
    fn test_single_quote_round_trip() {
        let mut sink = SqliteSink::open_in_memory().unwrap();
        sink.execute(&statements::create_table("people", ["name"]).unwrap())
            .unwrap();
        let fields = vec![("name", String::from("O'Brien"))];
        sink.execute(&statements::insert_row("people", &fields))
            .unwrap();

        let value: String = sink
            .connection()
            .query_row("SELECT name FROM people", [], |row| row.get(0))
            .unwrap();
        assert_eq!(value, "O'Brien");
    }
}

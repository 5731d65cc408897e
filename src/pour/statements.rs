//! Statement construction for the destination store.
//!
//! Statements are built as plain text. Values are embedded as single-quoted
//! literals with embedded single quotes doubled; identifiers are double-quoted
//! because collection and field names from a schemaless source are not
//! guaranteed to be bare SQL identifiers.

use crate::error::{DecantError, Result};

/// Column type for every destination column. The source is schemaless and all
/// values are coerced to text, so columns get an effectively unbounded text
/// capacity.
const COLUMN_TYPE: &str = "TEXT";

/// Escape a text value for embedding between single quotes.
///
/// Doubles every embedded single quote and nothing else. Total over all text
/// input, the empty string included.
pub fn encode_text(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// Quote an identifier (table or column name) for embedding in a statement.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE {}", quote_ident(table))
}

/// CREATE TABLE with the given columns, in order, all typed as text.
/// A table needs at least one column.
pub fn create_table<'a, I>(table: &str, columns: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let cols: Vec<String> = columns
        .into_iter()
        .map(|c| format!("{} {}", quote_ident(c), COLUMN_TYPE))
        .collect();
    if cols.is_empty() {
        return Err(DecantError::Sink(format!(
            "cannot create table '{table}' with no columns"
        )));
    }
    Ok(format!(
        "CREATE TABLE {} ({})",
        quote_ident(table),
        cols.join(", ")
    ))
}

pub fn add_column(table: &str, column: &str) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN {} {}",
        quote_ident(table),
        quote_ident(column),
        COLUMN_TYPE
    )
}

/// INSERT referencing exactly the given fields; omitted columns stay at their
/// default (NULL) for this row.
pub fn insert_row(table: &str, fields: &[(&str, String)]) -> String {
    let names: Vec<String> = fields.iter().map(|(n, _)| quote_ident(n)).collect();
    let values: Vec<String> = fields
        .iter()
        .map(|(_, v)| format!("'{}'", encode_text(v)))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(table),
        names.join(", "),
        values.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_doubles_single_quotes() {
        assert_eq!(encode_text("O'Brien"), "O''Brien");
        assert_eq!(encode_text("''"), "''''");
        assert_eq!(encode_text(""), "");
        assert_eq!(encode_text("no quotes"), "no quotes");
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("plain"), "\"plain\"");
        assert_eq!(quote_ident("with-dash"), "\"with-dash\"");
        assert_eq!(quote_ident("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_create_table_orders_columns() {
        let sql = create_table("users", ["_id", "name"]).unwrap();
        assert_eq!(sql, "CREATE TABLE \"users\" (\"_id\" TEXT, \"name\" TEXT)");
    }

    #[test]
    fn test_create_table_rejects_empty_column_set() {
        assert!(create_table("users", std::iter::empty::<&str>()).is_err());
    }

    #[test]
    fn test_insert_references_only_given_fields() {
        let fields = vec![("a", String::from("1")), ("c", String::from("O'Brien"))];
        let sql = insert_row("t", &fields);
        assert_eq!(
            sql,
            "INSERT INTO \"t\" (\"a\", \"c\") VALUES ('1', 'O''Brien')"
        );
    }

    #[test]
    fn test_add_column() {
        assert_eq!(
            add_column("t", "new_field"),
            "ALTER TABLE \"t\" ADD COLUMN \"new_field\" TEXT"
        );
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecantError {
    /// Enumerating collections or fetching documents from the source store failed.
    #[error("document store error: {0}")]
    Source(String),

    /// A statement or metadata query against the relational store failed.
    #[error("relational store error: {0}")]
    Sink(String),

    /// A document with no fields cannot seed or extend a table.
    #[error("document '{id}' in collection '{collection}' has no fields")]
    EmptyDocument { collection: String, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for DecantError {
    fn from(e: rusqlite::Error) -> Self {
        DecantError::Sink(e.to_string())
    }
}

impl From<reqwest::Error> for DecantError {
    fn from(e: reqwest::Error) -> Self {
        DecantError::Source(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DecantError>;

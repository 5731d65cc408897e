//! Document-to-relational translation.
//!
//! A collection's first document seeds its table; every later document can
//! grow the column set before its row is inserted, so the final schema is the
//! union of every field seen, in first-seen order.

pub mod driver;
pub mod statements;
pub mod tracker;
pub mod translator;
pub mod types;

pub use driver::Decanter;
pub use tracker::SchemaTracker;
pub use translator::CollectionTranslator;
pub use types::{text_of, Config, Document, FailurePolicy, PourSummary};

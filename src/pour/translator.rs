use crate::error::{DecantError, Result};
use crate::pour::statements;
use crate::pour::tracker::SchemaTracker;
use crate::pour::types::Document;
use crate::sink::RelationalSink;
use tracing::debug;

/// Translates one collection's documents into one destination table.
///
/// Constructed by seeding a table from the collection's first document;
/// every later document goes through [`append`](Self::append), which extends
/// the schema for unseen fields before inserting the row. Processing is
/// strictly sequential, so the tracker stays consistent with the physical
/// table.
pub struct CollectionTranslator<'a, K: RelationalSink> {
    sink: &'a mut K,
    table: String,
    tracker: SchemaTracker,
}

impl<'a, K: RelationalSink> CollectionTranslator<'a, K> {
    /// Recreate the collection's table from its seed document.
    ///
    /// Any leftover table from a previous run is dropped first; a failed drop
    /// means the table simply did not exist and is not an error. The table is
    /// created with exactly the seed document's fields as text columns, in
    /// document order, and the seed row is inserted. Create or insert
    /// failures are fatal for the collection.
    pub fn initialize(
        sink: &'a mut K,
        collection: &str,
        seed_id: &str,
        seed: &Document,
    ) -> Result<Self> {
        if seed.is_empty() {
            return Err(DecantError::EmptyDocument {
                collection: collection.to_string(),
                id: seed_id.to_string(),
            });
        }

        if let Err(e) = sink.execute(&statements::drop_table(collection)) {
            debug!(collection, error = %e, "skipped dropping table");
        }

        sink.execute(&statements::create_table(collection, seed.field_names())?)?;

        let mut tracker = SchemaTracker::new();
        for name in seed.field_names() {
            tracker.add(name);
        }

        let fields: Vec<(&str, String)> = seed.text_fields().collect();
        sink.execute(&statements::insert_row(collection, &fields))?;

        Ok(CollectionTranslator {
            sink,
            table: collection.to_string(),
            tracker,
        })
    }

    /// Insert one more document as a row, growing the table first if the
    /// document carries fields not seen before.
    ///
    /// Schema extension completes before the row insert that references it.
    /// The insert names exactly the fields present in this document; columns
    /// the document omits stay NULL for this row.
    pub fn append(&mut self, id: &str, doc: &Document) -> Result<()> {
        if doc.is_empty() {
            return Err(DecantError::EmptyDocument {
                collection: self.table.clone(),
                id: id.to_string(),
            });
        }

        for name in doc.field_names() {
            if self.tracker.has(name) {
                continue;
            }
            // Tracker miss: confirm against the physical table before
            // altering, so a duplicate ADD COLUMN is never issued.
            if !self.sink.has_column(&self.table, name)? {
                self.sink.execute(&statements::add_column(&self.table, name))?;
            }
            self.tracker.add(name);
        }

        let fields: Vec<(&str, String)> = doc.text_fields().collect();
        self.sink.execute(&statements::insert_row(&self.table, &fields))?;
        Ok(())
    }

    /// Columns known present, in first-seen order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.tracker.columns()
    }
}

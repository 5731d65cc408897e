use crate::error::{DecantError, Result};
use crate::pour::translator::CollectionTranslator;
use crate::pour::types::{Config, FailurePolicy, PourSummary};
use crate::sink::RelationalSink;
use crate::source::DocumentSource;
use tracing::{debug, info, warn};

/// Drives a whole migration: every collection in the source store, in the
/// order the store enumerates them, one at a time.
pub struct Decanter {
    config: Config,
}

impl Decanter {
    pub fn new(config: Config) -> Self {
        Decanter { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate every collection from `source` into tables in `sink`.
    ///
    /// Source-store errors always abort the run. How a destination error
    /// inside one collection affects the rest is governed by the configured
    /// [`FailurePolicy`]. There is no transactional boundary across the run:
    /// an abort leaves already-translated tables in place.
    pub fn pour<S, K>(&self, source: &S, sink: &mut K) -> Result<PourSummary>
    where
        S: DocumentSource,
        K: RelationalSink,
    {
        let names = source.collections()?;
        let mut summary = PourSummary {
            collections: names.len(),
            ..Default::default()
        };

        for name in &names {
            match translate_collection(source, sink, name) {
                Ok(0) => {
                    debug!(collection = %name, "empty collection, no table created");
                }
                Ok(rows) => {
                    info!(collection = %name, rows, "collection translated");
                    summary.tables_created += 1;
                    summary.rows_inserted += rows;
                }
                Err(e @ DecantError::Source(_)) => return Err(e),
                Err(e) if self.config.failure_policy == FailurePolicy::SkipCollection => {
                    warn!(collection = %name, error = %e, "collection abandoned");
                    summary.collections_failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        sink.commit()?;
        Ok(summary)
    }
}

/// Translate one collection. Returns the number of rows inserted; an empty
/// collection inserts none and creates no table.
fn translate_collection<S, K>(source: &S, sink: &mut K, collection: &str) -> Result<usize>
where
    S: DocumentSource,
    K: RelationalSink,
{
    let ids = source.document_ids(collection)?;
    let Some(seed_id) = ids.first() else {
        return Ok(0);
    };

    let seed = source.fetch(collection, seed_id)?;
    let mut translator = CollectionTranslator::initialize(sink, collection, seed_id, &seed)?;

    for id in &ids[1..] {
        let doc = source.fetch(collection, id)?;
        translator.append(id, &doc)?;
    }

    Ok(ids.len())
}

use crate::error::{DecantError, Result};
use crate::pour::Document;
use crate::source::DocumentSource;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// CouchDB REST client for the operations the migration consumes: listing
/// databases, listing a database's document ids, and fetching a document.
pub struct CouchSource {
    base: String,
    client: reqwest::blocking::Client,
}

#[derive(Deserialize)]
struct AllDocsResponse {
    rows: Vec<AllDocsRow>,
}

#[derive(Deserialize)]
struct AllDocsRow {
    id: String,
}

impl CouchSource {
    /// Connect to a CouchDB instance. The root endpoint is probed so an
    /// unreachable instance fails here rather than mid-run.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let base = format!("http://{host}:{port}");
        let client = reqwest::blocking::Client::new();
        client
            .get(&base)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                DecantError::Source(format!("couldn't connect to {base}: {e}"))
            })?;
        debug!(%base, "connected to document store");
        Ok(CouchSource { base, client })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base, path);
        let value = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<T>())
            .map_err(|e| DecantError::Source(format!("GET {url} failed: {e}")))?;
        Ok(value)
    }
}

impl DocumentSource for CouchSource {
    fn collections(&self) -> Result<Vec<String>> {
        self.get_json("_all_dbs")
    }

    fn document_ids(&self, collection: &str) -> Result<Vec<String>> {
        let response: AllDocsResponse = self.get_json(&format!("{collection}/_all_docs"))?;
        Ok(response.rows.into_iter().map(|row| row.id).collect())
    }

    fn fetch(&self, collection: &str, id: &str) -> Result<Document> {
        let fields: Map<String, Value> = self.get_json(&format!("{collection}/{id}"))?;
        Ok(Document::from(fields))
    }
}

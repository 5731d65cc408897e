//! decant: pour a CouchDB instance into a SQLite file
//!
//! Usage:
//!   # Defaults: CouchDB at localhost:5984, output to ./decant.db
//!   decant
//!
//!   # Explicit source and destination
//!   decant --host couch.internal --port 5984 --db backup.db
//!
//!   # Keep going when one collection fails instead of aborting the run
//!   decant --skip-failed-collections
//!
//! Log verbosity follows RUST_LOG (default: info).

use anyhow::Result;
use clap::Parser;
use decant::{Config, FailurePolicy};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "decant")]
#[command(about = "Migrate a CouchDB instance into a SQLite database", long_about = None)]
struct Args {
    /// Output SQLite file, created if absent
    #[arg(long, default_value = "decant.db")]
    db: PathBuf,

    /// CouchDB host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// CouchDB port
    #[arg(long, default_value_t = 5984)]
    port: u16,

    /// Log and skip a collection that fails to translate instead of aborting
    /// the whole run
    #[arg(long)]
    skip_failed_collections: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config {
        couch_host: args.host,
        couch_port: args.port,
        sqlite_path: args.db,
        failure_policy: if args.skip_failed_collections {
            FailurePolicy::SkipCollection
        } else {
            FailurePolicy::AbortRun
        },
    };

    let summary = decant::run(config)?;
    info!(
        collections = summary.collections,
        tables = summary.tables_created,
        rows = summary.rows_inserted,
        failed = summary.collections_failed,
        "migration finished"
    );

    Ok(())
}

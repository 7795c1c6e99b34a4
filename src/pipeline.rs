//! Phase sequencing for the load-and-report pipeline.
//!
//! Load errors are fatal and propagate to the caller. Store errors are
//! caught at each phase boundary, logged, and execution continues to the
//! next phase even when the prior phase's precondition no longer holds.

use std::time::Duration;

use crate::cli::Cli;
use crate::dataset;
use crate::error::Result;
use crate::report::{self, ReportContext};
use crate::store::StoreManager;

pub fn run(cli: &Cli) -> Result<()> {
    // Load and transform. Any failure here halts immediately; there is no
    // partial load.
    let table = dataset::load_table(&cli.file, cli.encoding.into())?;
    log::info!("loaded {} rows from {}", table.row_count(), cli.file.display());
    let records = table.into_documents();

    // Connect. An invalid URI leaves no client to call through, so the
    // store phases are skipped. An unreachable server is only a warning
    // here: every later phase fails on its own and is logged on its own.
    let manager = StoreManager::new();
    let timeout = Duration::from_secs(cli.connect_timeout_secs);
    let client = match manager.connect(&cli.uri, timeout) {
        Ok(client) => client,
        Err(err) => {
            log::error!("cannot build MongoDB client for {}: {err}", cli.uri);
            return Ok(());
        }
    };
    if let Err(err) = manager.ping(&client, timeout) {
        log::warn!("MongoDB ping failed, continuing in degraded state: {err}");
    }

    if cli.reset {
        match manager.drop_collection(&client, &cli.database, &cli.collection) {
            Ok(()) => log::info!("dropped collection {}.{}", cli.database, cli.collection),
            Err(err) => log::error!("failed to drop collection {}: {err}", cli.collection),
        }
    }

    // Bulk insert, one batch call. Caught so the report still runs against
    // whatever the collection holds.
    let record_count = records.len();
    match manager.insert_documents(&client, &cli.database, &cli.collection, records) {
        Ok(ids) => println!("{} records inserted.", ids.len()),
        Err(err) => log::error!("bulk insert of {record_count} records failed: {err}"),
    }

    // The fixed report; every step catches its own errors.
    let ctx = ReportContext {
        manager: &manager,
        client: &client,
        database: &cli.database,
        collection: &cli.collection,
    };
    report::run(&ctx);

    Ok(())
}

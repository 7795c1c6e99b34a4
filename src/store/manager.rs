//! Core StoreManager struct and basic connection methods.

use std::time::Duration;

use mongodb::Client;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Wraps a Tokio runtime so the otherwise synchronous pipeline can drive the
/// async MongoDB driver with blocking calls.
pub struct StoreManager {
    /// Tokio runtime for MongoDB async operations
    pub(crate) runtime: Runtime,
}

impl StoreManager {
    /// Create a new store manager
    pub fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");
        Self { runtime }
    }

    /// Build a client for the URI (runs in Tokio runtime).
    ///
    /// Fails only on an invalid URI; the server is not contacted until the
    /// first operation. The timeout becomes the driver's server selection
    /// timeout so a dead endpoint fails each operation promptly instead of
    /// hanging.
    pub fn connect(&self, uri: &str, timeout: Duration) -> Result<Client> {
        let uri = uri.to_string();
        self.runtime.block_on(async {
            let mut options = ClientOptions::parse(&uri).await?;
            options.server_selection_timeout = Some(timeout);
            let client = Client::with_options(options)?;
            Ok(client)
        })
    }

    /// Verify the server is reachable with a ping (runs in Tokio runtime)
    pub fn ping(&self, client: &Client, timeout: Duration) -> Result<()> {
        let client = client.clone();
        self.runtime.block_on(async {
            let fut = async {
                client.database("admin").run_command(doc! { "ping": 1 }).await?;
                Ok::<(), mongodb::error::Error>(())
            };

            match tokio::time::timeout(timeout, fut).await {
                Ok(result) => result.map_err(Error::from),
                Err(_) => Err(Error::Timeout("Connection timed out".to_string())),
            }
        })
    }

    /// Drop a collection (runs in Tokio runtime)
    pub fn drop_collection(&self, client: &Client, database: &str, collection: &str) -> Result<()> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();
        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            coll.drop().await?;
            Ok(())
        })
    }
}

impl Default for StoreManager {
    fn default() -> Self {
        Self::new()
    }
}

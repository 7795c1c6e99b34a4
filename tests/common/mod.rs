//! Shared test infrastructure: one MongoDB 7.0 Testcontainers container per
//! test binary, with per-test isolation via UUID-suffixed database names.
//!
//! The container runs on a background thread with its own tokio runtime so
//! it outlives the per-test `#[tokio::test]` runtimes, which are torn down
//! independently.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::OnceLock;

use mongodb::{Client, options::ClientOptions};
use testcontainers::ImageExt;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

static CONNECTION_STRING: OnceLock<String> = OnceLock::new();

/// Start the shared container on first use and return its connection string.
fn connection_string() -> &'static str {
    CONNECTION_STRING.get_or_init(|| {
        let (tx, rx) = std::sync::mpsc::sync_channel(1);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create container runtime");

            rt.block_on(async {
                let container = Mongo::default()
                    .with_tag("7.0")
                    .start()
                    .await
                    .expect("Failed to start MongoDB container");

                let host = container.get_host().await.expect("Failed to get host");
                let port =
                    container.get_host_port_ipv4(27017).await.expect("Failed to get port");
                let uri = format!("mongodb://{}:{}", host, port);

                // Readiness probe before handing the URI to any test.
                let opts = ClientOptions::parse(&uri).await.expect("Failed to parse URI");
                let probe = Client::with_options(opts).expect("Failed to create probe client");
                for _ in 0..30 {
                    if probe.list_database_names().await.is_ok() {
                        break;
                    }
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
                drop(probe);

                tx.send(uri).expect("Failed to send connection string");

                // Keep the container alive until the process exits.
                std::future::pending::<()>().await;
            });
        });

        rx.recv().expect("Failed to receive connection string")
    })
}

/// Handle to the shared container with a unique database namespace per test.
pub struct TestStore {
    pub client: Client,
    pub uri: String,
    test_id: String,
}

impl TestStore {
    /// Connect a fresh driver client on the caller's runtime and mint a
    /// namespace suffix for this test.
    pub async fn start() -> Self {
        let uri = connection_string().to_string();
        let options = ClientOptions::parse(&uri).await.expect("Failed to parse URI");
        let client = Client::with_options(options).expect("Failed to create client");
        let test_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

        Self { client, uri, test_id }
    }

    /// Namespaced database name for this test.
    pub fn db_name(&self, name: &str) -> String {
        format!("{}_{}", name, self.test_id)
    }

    /// Driver collection handle in this test's namespace.
    pub fn collection<T: Send + Sync>(&self, db: &str, collection: &str) -> mongodb::Collection<T> {
        self.client.database(&self.db_name(db)).collection(collection)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run a blocking `StoreManager` call off the test's async runtime.
pub async fn run_blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking store operation panicked")
}

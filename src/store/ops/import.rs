//! Bulk load of transformed records into the store.

use mongodb::Client;
use mongodb::bson::{Bson, Document};

use crate::error::Result;
use crate::store::StoreManager;

impl StoreManager {
    /// Insert every record as a new document in one batch call (runs in
    /// Tokio runtime). Returns the inserted ids; the ordered batch aborts
    /// as a whole on failure, with no deduplication and no rollback.
    pub fn insert_documents(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<Vec<Bson>> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let result = coll.insert_many(documents).await?;
            let ids: Vec<Bson> = result.inserted_ids.into_values().collect();
            Ok(ids)
        })
    }
}

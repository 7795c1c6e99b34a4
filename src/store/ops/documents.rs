//! Document read and write operations against a collection.

use mongodb::Client;
use mongodb::bson::{Bson, Document, doc};

use crate::error::Result;
use crate::store::StoreManager;

impl StoreManager {
    /// Find documents matching a filter, in store order (runs in Tokio runtime)
    pub fn find_documents(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>> {
        use futures::TryStreamExt;

        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let cursor = coll.find(filter).await?;
            let documents: Vec<Document> = cursor.try_collect().await?;
            Ok(documents)
        })
    }

    /// Count documents matching a filter (runs in Tokio runtime)
    pub fn count_documents(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        filter: Document,
    ) -> Result<u64> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let count = coll.count_documents(filter).await?;
            Ok(count)
        })
    }

    /// Top documents ordered by a field descending, capped at `limit`.
    /// Ties fall back to store order (runs in Tokio runtime)
    pub fn find_top(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        sort_field: &str,
        limit: i64,
    ) -> Result<Vec<Document>> {
        use futures::TryStreamExt;

        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();
        let mut sort = Document::new();
        sort.insert(sort_field, -1);

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);

            let mut options = mongodb::options::FindOptions::default();
            options.sort = Some(sort);
            options.limit = Some(limit);

            let cursor = coll.find(doc! {}).with_options(options).await?;
            let documents: Vec<Document> = cursor.try_collect().await?;
            Ok(documents)
        })
    }

    /// Set `field` to `to` on every document where it currently equals
    /// `from`; returns the modified count (runs in Tokio runtime)
    pub fn update_field_where(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        field: &str,
        from: &str,
        to: &str,
    ) -> Result<u64> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();
        let mut filter = Document::new();
        filter.insert(field, from);
        let mut set = Document::new();
        set.insert(field, to);
        let update = doc! { "$set": set };

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let result = coll.update_many(filter, update).await?;
            Ok(result.modified_count)
        })
    }

    /// Delete documents matching a filter; returns the deleted count (runs
    /// in Tokio runtime)
    pub fn delete_documents(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        filter: Document,
    ) -> Result<u64> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let result = coll.delete_many(filter).await?;
            Ok(result.deleted_count)
        })
    }

    /// Unique values of a field across the collection (runs in Tokio runtime)
    pub fn distinct_values(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        field: &str,
    ) -> Result<Vec<Bson>> {
        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();
        let field = field.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let values = coll.distinct(&field, doc! {}).await?;
            Ok(values)
        })
    }
}

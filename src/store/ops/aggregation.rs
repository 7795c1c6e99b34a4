//! Aggregation pipeline operations.

use mongodb::Client;
use mongodb::bson::{Document, doc};

use crate::error::Result;
use crate::store::StoreManager;

impl StoreManager {
    /// Run an aggregation pipeline and collect the results (runs in Tokio runtime)
    pub fn aggregate(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<Document>> {
        use futures::TryStreamExt;

        let client = client.clone();
        let database = database.to_string();
        let collection = collection.to_string();

        self.runtime.block_on(async {
            let coll = client.database(&database).collection::<Document>(&collection);
            let cursor = coll.aggregate(pipeline).await?;
            let docs: Vec<Document> = cursor.try_collect().await?;
            Ok(docs)
        })
    }

    /// Group by `group_field`, summing `sum_field` per group. One result
    /// document per group, `_id` holding the group key and `total` the sum;
    /// group order is whatever the store returns.
    pub fn sum_by_group(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        group_field: &str,
        sum_field: &str,
    ) -> Result<Vec<Document>> {
        let pipeline = vec![doc! {
            "$group": {
                "_id": format!("${group_field}"),
                "total": { "$sum": format!("${sum_field}") },
            }
        }];
        self.aggregate(client, database, collection, pipeline)
    }

    /// Group by `group_field`, counting documents per group. `_id` holds the
    /// group key and `count` the document count.
    pub fn count_by_group(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        group_field: &str,
    ) -> Result<Vec<Document>> {
        let pipeline = vec![doc! {
            "$group": {
                "_id": format!("${group_field}"),
                "count": { "$sum": 1 },
            }
        }];
        self.aggregate(client, database, collection, pipeline)
    }
}

use crate::error::Result;
use crate::models::{Transaction, TransactionFilter};
use async_trait::async_trait;
use futures::TryStreamExt;
use log::info;
use mongodb::{bson::doc, Collection, Database};

/// Counts reported by a full collection replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    pub deleted: u64,
    pub inserted: u64,
}

/// Storage operations the dashboard needs over the transaction collection.
///
/// `replace_all` deletes and then inserts in two steps; readers running
/// concurrently may observe an empty or partially filled collection.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn replace_all(&self, transactions: Vec<Transaction>) -> Result<ReplaceOutcome>;

    /// Matches ordered by record id, skipping `skip` and returning at most `limit`.
    async fn find_page(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>>;

    async fn count(&self, filter: &TransactionFilter) -> Result<u64>;

    async fn find_all(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
}

pub struct MongoTransactionStore {
    collection: Collection<Transaction>,
}

impl MongoTransactionStore {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait]
impl TransactionStore for MongoTransactionStore {
    async fn replace_all(&self, transactions: Vec<Transaction>) -> Result<ReplaceOutcome> {
        let deleted = self.collection.delete_many(doc! {}).await?.deleted_count;
        info!("Deleted {} stored transactions", deleted);

        if transactions.is_empty() {
            return Ok(ReplaceOutcome {
                deleted,
                inserted: 0,
            });
        }

        let result = self.collection.insert_many(&transactions).await?;
        let inserted = result.inserted_ids.len() as u64;
        info!("Inserted {} transactions", inserted);
        Ok(ReplaceOutcome { deleted, inserted })
    }

    async fn find_page(
        &self,
        filter: &TransactionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(doc! { "id": 1 })
            .skip(skip.min(i64::MAX as u64))
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &TransactionFilter) -> Result<u64> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn find_all(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(doc! { "id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

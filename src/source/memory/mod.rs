// In-memory record source
// Seeds a fixed set of simulated collections; nothing is persisted

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{RecordPage, RecordSource, SourceError};
use crate::browser::pagination::{PageSize, Pagination};
use crate::browser::query::MetadataFilter;
use crate::model::{Collection, Metadata, Record, RecordId};

const SIMULATED_COLLECTIONS: [(&str, &str); 3] = [("1", "Users"), ("2", "Products"), ("3", "Orders")];

#[derive(Debug)]
struct StoredCollection {
    collection: Collection,
    records: Vec<Record>,
}

/// Record source backed by plain vectors
#[derive(Debug, Default)]
pub struct InMemorySource {
    collections: RwLock<Vec<StoredCollection>>,
    dropped: RwLock<Vec<String>>,
    unavailable: AtomicBool,
}

impl InMemorySource {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo dataset: three collections of identical generated records
    #[inline]
    pub fn simulated(records_per_collection: usize, embedding_dimension: usize) -> Self {
        let collections = SIMULATED_COLLECTIONS
            .iter()
            .map(|&(id, name)| StoredCollection {
                collection: Collection::new(id, name),
                records: simulated_records(records_per_collection, embedding_dimension),
            })
            .collect();

        Self {
            collections: RwLock::new(collections),
            ..Self::default()
        }
    }

    /// Add a collection with the given records, replacing any with the same id
    #[inline]
    pub async fn insert_collection(&self, collection: Collection, records: Vec<Record>) {
        let mut collections = self.collections.write().await;
        collections.retain(|stored| stored.collection.id != collection.id);
        collections.push(StoredCollection {
            collection,
            records,
        });
    }

    /// Make every call fail with [`SourceError::Unavailable`] until re-enabled
    #[inline]
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Ids of collections dropped so far, in call order
    #[inline]
    pub async fn dropped_collections(&self) -> Vec<String> {
        self.dropped.read().await.clone()
    }

    #[inline]
    pub async fn record_count(&self, collection_id: &str) -> Option<usize> {
        self.collections
            .read()
            .await
            .iter()
            .find(|stored| stored.collection.id == collection_id)
            .map(|stored| stored.records.len())
    }

    fn check_available(&self) -> Result<(), SourceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            warn!("In-memory source is marked unavailable");
            return Err(SourceError::Unavailable(
                "in-memory source disabled".to_string(),
            ));
        }
        Ok(())
    }
}

fn simulated_records(count: usize, dimension: usize) -> Vec<Record> {
    let embeddings: Vec<f32> = (1..=dimension).map(|k| k as f32 / 10.0).collect();
    (1..=count)
        .map(|i| Record {
            id: i.to_string(),
            document: format!("Document {}", i),
            metadata: Metadata::from([
                ("type".to_string(), "Type A".to_string()),
                ("category".to_string(), "Category 1".to_string()),
            ]),
            embeddings: embeddings.clone(),
        })
        .collect()
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn list_collections(&self) -> Result<Vec<Collection>, SourceError> {
        self.check_available()?;
        Ok(self
            .collections
            .read()
            .await
            .iter()
            .map(|stored| stored.collection.clone())
            .collect())
    }

    async fn list_records(
        &self,
        collection_id: &str,
        page: u32,
        page_size: PageSize,
        filter: Option<&MetadataFilter>,
    ) -> Result<RecordPage, SourceError> {
        self.check_available()?;
        if let Some(filter) = filter {
            debug!("Metadata filter accepted but not applied: {}", filter);
        }

        let collections = self.collections.read().await;
        let stored = collections
            .iter()
            .find(|stored| stored.collection.id == collection_id)
            .ok_or_else(|| SourceError::CollectionNotFound(collection_id.to_string()))?;

        let mut pagination = Pagination::new(page_size);
        pagination.set_total_records(stored.records.len());
        pagination.go_to_page(page);

        let records = pagination.slice(&stored.records).to_vec();
        debug!(
            "Serving {} records of collection {} (page {})",
            records.len(),
            collection_id,
            pagination.current_page()
        );
        Ok(RecordPage::new(records, stored.records.len()))
    }

    async fn delete_records(
        &self,
        collection_id: &str,
        ids: &[RecordId],
    ) -> Result<usize, SourceError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        let stored = collections
            .iter_mut()
            .find(|stored| stored.collection.id == collection_id)
            .ok_or_else(|| SourceError::CollectionNotFound(collection_id.to_string()))?;

        let before = stored.records.len();
        stored.records.retain(|record| !ids.contains(&record.id));
        let removed = before - stored.records.len();

        info!(
            "Deleted {} records from collection {}",
            removed, collection_id
        );
        Ok(removed)
    }

    async fn drop_collection(&self, collection_id: &str) -> Result<(), SourceError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        let before = collections.len();
        collections.retain(|stored| stored.collection.id != collection_id);
        if collections.len() == before {
            return Err(SourceError::CollectionNotFound(collection_id.to_string()));
        }

        self.dropped.write().await.push(collection_id.to_string());
        info!("Dropped collection {}", collection_id);
        Ok(())
    }
}

//! Record sources
//!
//! A [`RecordSource`] owns the canonical collections and records. The browser
//! only reads from it, except for the two destructive calls which it issues
//! on explicit user request.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::browser::pagination::PageSize;
use crate::browser::query::MetadataFilter;
use crate::model::{Collection, Record, RecordId};

pub use memory::InMemorySource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// One page of records plus the total matching count
#[derive(Debug, Clone)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub total: usize,
    pub fetched_at: DateTime<Utc>,
}

impl RecordPage {
    #[inline]
    pub fn new(records: Vec<Record>, total: usize) -> Self {
        Self {
            records,
            total,
            fetched_at: Utc::now(),
        }
    }
}

/// Backend the browser reads collections and records from
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn list_collections(&self) -> Result<Vec<Collection>, SourceError>;

    /// Fetch page `page` (1-based) of `collection_id`
    async fn list_records(
        &self,
        collection_id: &str,
        page: u32,
        page_size: PageSize,
        filter: Option<&MetadataFilter>,
    ) -> Result<RecordPage, SourceError>;

    /// Delete records by id, returning how many were removed
    async fn delete_records(
        &self,
        collection_id: &str,
        ids: &[RecordId],
    ) -> Result<usize, SourceError>;

    async fn drop_collection(&self, collection_id: &str) -> Result<(), SourceError>;
}

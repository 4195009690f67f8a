// Domain model for the record browser
// Collections are reference data, records are immutable once fetched

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type CollectionId = String;
pub type RecordId = String;

/// Record metadata in insertion order
pub type Metadata = IndexMap<String, String>;

/// A logical group of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
}

impl Collection {
    #[inline]
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single stored record with its embedding vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique within its collection
    pub id: RecordId,
    /// The document text
    pub document: String,
    /// Free-form string metadata
    pub metadata: Metadata,
    /// Fixed-length embedding vector
    pub embeddings: Vec<f32>,
}

impl Record {
    /// Metadata as compact JSON, the way the list view shows it
    #[inline]
    pub fn metadata_json(&self) -> String {
        serde_json::to_string(&self.metadata).unwrap_or_else(|_| "{}".to_string())
    }

    /// Metadata as indented JSON for the detail view
    #[inline]
    pub fn metadata_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.metadata).unwrap_or_else(|_| "{}".to_string())
    }

    /// Leading embedding values followed by an ellipsis
    #[inline]
    pub fn embedding_preview(&self, len: usize) -> String {
        let shown = self
            .embeddings
            .iter()
            .take(len)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}...", shown)
    }

    #[inline]
    pub fn embedding_full(&self) -> String {
        self.embeddings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

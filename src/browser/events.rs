//! State change notifications
//!
//! The session publishes a [`BrowserEvent`] after every transition so a
//! presentation layer can redraw without polling.

use tokio::sync::broadcast;
use tracing::trace;

use crate::model::{CollectionId, RecordId};

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    CollectionsLoaded { count: usize },
    CollectionSelected { id: CollectionId },
    PageLoaded { page: u32, total_pages: u32, total_records: usize },
    PageChanged { page: u32 },
    SelectionChanged { selected: usize },
    QueryAccepted { filter: String },
    QueryRejected { message: String },
    QueryCleared,
    DropRequested,
    DropCancelled,
    CollectionDropped { id: CollectionId },
    RecordsDeleted { ids: Vec<RecordId> },
    DetailOpened { id: RecordId },
    DetailClosed,
    SourceFailed { message: String },
    StaleResponseDiscarded { generation: u64 },
}

impl BrowserEvent {
    /// Whether the event changes what the record table shows
    #[inline]
    pub const fn affects_table(&self) -> bool {
        matches!(
            self,
            Self::CollectionSelected { .. }
                | Self::PageLoaded { .. }
                | Self::SelectionChanged { .. }
                | Self::CollectionDropped { .. }
                | Self::RecordsDeleted { .. }
        )
    }
}

/// Sending half of the event channel
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<BrowserEvent>,
}

impl EventBus {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    #[inline]
    pub fn subscribe(&self) -> broadcast::Receiver<BrowserEvent> {
        self.sender.subscribe()
    }

    /// Publish an event. Having no subscribers is fine.
    #[inline]
    pub fn publish(&self, event: BrowserEvent) {
        trace!("Publishing {:?}", event);
        let _ = self.sender.send(event);
    }
}

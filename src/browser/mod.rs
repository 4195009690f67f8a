//! Record browsing session
//!
//! [`RecordBrowser`] owns the browsing state and a handle to the record
//! source. Every user intent is one method call; each call finishes its
//! state update (and any fetch it triggers) before returning and publishes
//! a [`BrowserEvent`] describing what changed.
//!
//! Page fetches are stamped with a generation number. Only the response to
//! the most recently issued request is applied; older ones are discarded.

pub mod confirmation;
pub mod events;
pub mod modal;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod state;


use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::BrowserConfig;
use crate::model::{Collection, CollectionId, Record};
use crate::source::{RecordPage, RecordSource, SourceError};
use crate::{BrowserError, Result};

pub use confirmation::DropConfirmation;
pub use events::{BrowserEvent, EventBus};
pub use pagination::{PAGE_SIZES, PageSize, Pagination};
pub use query::{FilterValue, MetadataFilter};
pub use state::RecordBrowserState;

/// A page fetch that has been issued but not yet applied
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub collection_id: CollectionId,
    pub page: u32,
    pub page_size: PageSize,
    pub filter: Option<MetadataFilter>,
}

pub struct RecordBrowser {
    source: Arc<dyn RecordSource>,
    state: RecordBrowserState,
    events: EventBus,
    generation: u64,
}

impl RecordBrowser {
    #[inline]
    pub fn new(source: Arc<dyn RecordSource>, config: &BrowserConfig) -> Result<Self> {
        let page_size = PageSize::try_from(config.default_page_size)?;
        Ok(Self {
            source,
            state: RecordBrowserState::new(page_size),
            events: EventBus::new(config.event_capacity),
            generation: 0,
        })
    }

    #[inline]
    pub const fn state(&self) -> &RecordBrowserState {
        &self.state
    }

    #[inline]
    pub fn subscribe(&self) -> broadcast::Receiver<BrowserEvent> {
        self.events.subscribe()
    }

    /// Fetch the collection list from the source
    #[inline]
    pub async fn load_collections(&mut self) -> Result<&[Collection]> {
        let collections = match self.source.list_collections().await {
            Ok(collections) => collections,
            Err(e) => return Err(self.source_failed(e)),
        };

        info!("Loaded {} collections", collections.len());
        let count = collections.len();
        let had_selection = self.state.selected_collection_id().is_some();
        self.state.set_collections(collections);
        if had_selection && self.state.selected_collection_id().is_none() {
            self.invalidate_pending();
        }
        self.events
            .publish(BrowserEvent::CollectionsLoaded { count });
        Ok(self.state.collections())
    }

    /// Switch collections and load the first page of the new one
    #[inline]
    pub async fn select_collection(&mut self, id: &str) -> Result<()> {
        self.state.select_collection(id)?;
        self.invalidate_pending();
        info!("Selected collection {}", id);
        self.events.publish(BrowserEvent::CollectionSelected { id: id.to_string() });
        self.events.publish(BrowserEvent::SelectionChanged { selected: 0 });
        let page_size = self.state.pagination().page_size();
        self.load_page(1, page_size).await
    }

    /// Build the request for the given page, superseding any earlier one.
    ///
    /// Returns `None` when no collection is selected.
    #[inline]
    pub fn begin_fetch(&mut self, page: u32, page_size: PageSize) -> Option<PageRequest> {
        let collection_id = self.state.selected_collection_id()?.to_string();
        self.generation += 1;
        Some(PageRequest {
            generation: self.generation,
            collection_id,
            page,
            page_size,
            filter: self.state.effective_filter().cloned(),
        })
    }

    /// Run a request against the source
    #[inline]
    pub async fn fetch(&self, request: &PageRequest) -> std::result::Result<RecordPage, SourceError> {
        debug!(
            "Fetching page {} (size {}) of collection {}",
            request.page, request.page_size, request.collection_id
        );
        self.source
            .list_records(
                &request.collection_id,
                request.page,
                request.page_size,
                request.filter.as_ref(),
            )
            .await
    }

    /// Apply a fetch result.
    ///
    /// Returns `Ok(false)` if a newer request was issued since, in which case
    /// the response is dropped. A failure leaves the state untouched.
    #[inline]
    pub fn apply_page(
        &mut self,
        request: &PageRequest,
        result: std::result::Result<RecordPage, SourceError>,
    ) -> Result<bool> {
        if request.generation != self.generation {
            debug!(
                "Discarding stale response for generation {} (latest {})",
                request.generation, self.generation
            );
            self.events.publish(BrowserEvent::StaleResponseDiscarded {
                generation: request.generation,
            });
            return Ok(false);
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => return Err(self.source_failed(e)),
        };

        self.state.apply_page(request.page, request.page_size, page);
        let pagination = self.state.pagination();
        self.events.publish(BrowserEvent::PageLoaded {
            page: pagination.current_page(),
            total_pages: pagination.total_pages(),
            total_records: pagination.total_records(),
        });
        Ok(true)
    }

    /// Reload the current page
    #[inline]
    pub async fn refresh(&mut self) -> Result<()> {
        let page = self.state.pagination().current_page();
        let page_size = self.state.pagination().page_size();
        self.load_page(page, page_size).await
    }

    /// Navigate to `page`, clamped to the known page range
    #[inline]
    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        let mut target = self.state.pagination().clone();
        let clamped = target.go_to_page(page);

        if self.state.selected_collection_id().is_none() {
            self.state.go_to_page(clamped);
            self.events.publish(BrowserEvent::PageChanged { page: clamped });
            return Ok(());
        }

        self.load_page(clamped, target.page_size()).await?;
        self.events.publish(BrowserEvent::PageChanged {
            page: self.state.pagination().current_page(),
        });
        Ok(())
    }

    #[inline]
    pub async fn next_page(&mut self) -> Result<()> {
        let page = self.state.pagination().current_page().saturating_add(1);
        self.go_to_page(page).await
    }

    #[inline]
    pub async fn previous_page(&mut self) -> Result<()> {
        let page = self.state.pagination().current_page().saturating_sub(1);
        self.go_to_page(page).await
    }

    /// Change the page size and go back to page one
    #[inline]
    pub async fn set_page_size(&mut self, size: u32) -> Result<()> {
        let page_size = PageSize::try_from(size)?;

        if self.state.selected_collection_id().is_none() {
            self.state.set_page_size(size)?;
            self.events.publish(BrowserEvent::PageChanged { page: 1 });
            return Ok(());
        }

        self.load_page(1, page_size).await?;
        self.events.publish(BrowserEvent::PageChanged { page: 1 });
        Ok(())
    }

    #[inline]
    pub fn select_all(&mut self, checked: bool) {
        self.state.select_all(checked);
        self.publish_selection();
    }

    #[inline]
    pub fn toggle_one(&mut self, id: &str, checked: bool) {
        self.state.toggle_one(id, checked);
        self.publish_selection();
    }

    #[inline]
    pub fn set_query_draft(&mut self, text: impl Into<String>) {
        self.state.set_query_draft(text);
    }

    /// Parse `text` as the new metadata filter and reload from page one.
    ///
    /// A malformed query is reported and changes nothing but the draft.
    #[inline]
    pub async fn submit_query(&mut self, text: impl Into<String>) -> Result<()> {
        let filter = match self.state.submit_query(text) {
            Ok(filter) => filter.to_string(),
            Err(e) => {
                self.events.publish(BrowserEvent::QueryRejected {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        info!("Applying metadata filter {}", filter);
        self.events.publish(BrowserEvent::QueryAccepted { filter });
        if self.state.selected_collection_id().is_none() {
            return Ok(());
        }
        let page_size = self.state.pagination().page_size();
        self.load_page(1, page_size).await
    }

    #[inline]
    pub fn clear_query(&mut self) {
        self.state.clear_query();
        self.events.publish(BrowserEvent::QueryCleared);
    }

    /// Delete every selected record, returning how many the source removed.
    ///
    /// Once the source has deleted, the result is `Ok` even if the reload that
    /// follows fails.
    #[inline]
    pub async fn delete_selected(&mut self) -> Result<usize> {
        if self.state.selection().is_empty() {
            debug!("Nothing selected, skipping delete");
            return Ok(0);
        }
        let collection_id = self
            .state
            .selected_collection_id()
            .ok_or(BrowserError::NoCollectionSelected)?
            .to_string();

        let ids = self.state.selection().to_vec();
        info!(
            "Deleting {} selected records from collection {}",
            ids.len(),
            collection_id
        );
        let removed = match self.source.delete_records(&collection_id, &ids).await {
            Ok(removed) => removed,
            Err(e) => return Err(self.source_failed(e)),
        };

        self.state.forget_selected(&ids);
        self.events.publish(BrowserEvent::RecordsDeleted { ids });
        self.publish_selection();
        // The delete has happened; a failed reload is reported through `SourceFailed`.
        if let Err(e) = self.refresh().await {
            warn!("Reload after deleting records failed: {}", e);
        }
        Ok(removed)
    }

    #[inline]
    pub fn request_drop(&mut self) {
        self.state.request_drop();
        self.events.publish(BrowserEvent::DropRequested);
    }

    #[inline]
    pub fn cancel_drop(&mut self) {
        if self.state.cancel_drop() {
            self.events.publish(BrowserEvent::DropCancelled);
        }
    }

    /// Drop the selected collection if a drop was requested.
    ///
    /// Returns the dropped id, or `None` when no drop was pending.
    #[inline]
    pub async fn confirm_drop(&mut self) -> Result<Option<CollectionId>> {
        if !self.state.take_pending_drop() {
            return Ok(None);
        }

        let Some(id) = self.state.selected_collection_id().map(ToString::to_string) else {
            warn!("Drop confirmed with no collection selected");
            return Err(BrowserError::NoCollectionSelected);
        };

        info!("Dropping collection {}", id);
        if let Err(e) = self.source.drop_collection(&id).await {
            self.state.restore_pending_drop();
            return Err(self.source_failed(e));
        }

        self.state.remove_collection(&id);
        self.invalidate_pending();
        self.events
            .publish(BrowserEvent::CollectionDropped { id: id.clone() });
        Ok(Some(id))
    }

    /// Show a record in the detail view
    #[inline]
    pub fn open_detail(&mut self, record: &Record) {
        self.state.open_detail(record);
        self.events.publish(BrowserEvent::DetailOpened {
            id: record.id.clone(),
        });
    }

    /// Show the displayed record with id `id` in the detail view
    #[inline]
    pub fn open_record(&mut self, id: &str) -> Result<()> {
        self.state.open_record(id)?;
        self.events
            .publish(BrowserEvent::DetailOpened { id: id.to_string() });
        Ok(())
    }

    #[inline]
    pub fn close_detail(&mut self) {
        if self.state.close_detail() {
            self.events.publish(BrowserEvent::DetailClosed);
        }
    }

    async fn load_page(&mut self, page: u32, page_size: PageSize) -> Result<()> {
        let Some(request) = self.begin_fetch(page, page_size) else {
            return Ok(());
        };
        let result = self.fetch(&request).await;

        // The total may have shrunk below the requested page. Those records are never
        // committed; only the clamped page is.
        let clamped = match &result {
            Ok(fetched) => Pagination::clamped_page(page_size, fetched.total, page),
            Err(_) => page,
        };
        if clamped == page {
            self.apply_page(&request, result)?;
            return Ok(());
        }

        debug!("Page {} is past the end, loading page {} instead", page, clamped);
        if let Some(retry) = self.begin_fetch(clamped, page_size) {
            let result = self.fetch(&retry).await;
            self.apply_page(&retry, result)?;
        }
        Ok(())
    }

    fn invalidate_pending(&mut self) {
        self.generation += 1;
    }

    fn publish_selection(&self) {
        self.events.publish(BrowserEvent::SelectionChanged {
            selected: self.state.selection().len(),
        });
    }

    fn source_failed(&self, err: SourceError) -> BrowserError {
        warn!("Record source call failed: {}", err);
        self.events.publish(BrowserEvent::SourceFailed {
            message: err.to_string(),
        });
        BrowserError::from(err)
    }
}

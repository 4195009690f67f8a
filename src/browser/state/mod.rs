//! Browsing session state
//!
//! [`RecordBrowserState`] is a plain value with synchronous transitions. It
//! never talks to a record source; the session in [`crate::browser`] feeds it
//! fetched pages and decides when to fetch.


use chrono::{DateTime, Utc};

use super::confirmation::DropConfirmation;
use super::modal::DetailModal;
use super::pagination::{PageSize, Pagination};
use super::query::{MetadataFilter, MetadataQuery};
use super::selection::Selection;
use crate::model::{Collection, CollectionId, Record, RecordId};
use crate::source::RecordPage;
use crate::{BrowserError, Result};

#[derive(Debug, Clone, Default)]
pub struct RecordBrowserState {
    collections: Vec<Collection>,
    selected_collection: Option<CollectionId>,
    records: Vec<Record>,
    fetched_at: Option<DateTime<Utc>>,
    pagination: Pagination,
    selection: Selection,
    query: MetadataQuery,
    confirmation: DropConfirmation,
    modal: DetailModal,
}

impl RecordBrowserState {
    #[inline]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    #[inline]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    #[inline]
    pub fn selected_collection(&self) -> Option<&Collection> {
        let id = self.selected_collection.as_ref()?;
        self.collections.iter().find(|c| &c.id == id)
    }

    #[inline]
    pub fn selected_collection_id(&self) -> Option<&str> {
        self.selected_collection.as_deref()
    }

    /// Records on the current page
    #[inline]
    pub fn displayed(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub const fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    #[inline]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[inline]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn query_draft(&self) -> &str {
        self.query.draft()
    }

    #[inline]
    pub fn effective_filter(&self) -> Option<&MetadataFilter> {
        self.query.effective()
    }

    #[inline]
    pub const fn confirmation(&self) -> DropConfirmation {
        self.confirmation
    }

    #[inline]
    pub const fn detail(&self) -> &DetailModal {
        &self.modal
    }

    /// Header checkbox state for the displayed page
    #[inline]
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.records.len())
    }

    /// "Showing X of Y records"
    #[inline]
    pub fn status_line(&self) -> String {
        format!(
            "Showing {} of {} records",
            self.records.len(),
            self.pagination.total_records()
        )
    }

    #[inline]
    pub fn page_line(&self) -> String {
        format!(
            "Page {} of {}",
            self.pagination.current_page(),
            self.pagination.total_pages()
        )
    }

    #[inline]
    pub fn set_collections(&mut self, collections: Vec<Collection>) {
        self.collections = collections;
        if self
            .selected_collection_id()
            .is_some_and(|id| !self.collections.iter().any(|c| c.id == id))
        {
            self.reset_collection_view();
        }
    }

    /// Switch to another collection. The page, selection and detail view start over.
    #[inline]
    pub fn select_collection(&mut self, id: &str) -> Result<()> {
        if !self.collections.iter().any(|c| c.id == id) {
            return Err(BrowserError::UnknownCollection(id.to_string()));
        }
        self.reset_collection_view();
        self.selected_collection = Some(id.to_string());
        Ok(())
    }

    /// Forget the selected collection and everything shown for it
    #[inline]
    pub fn reset_collection_view(&mut self) {
        self.selected_collection = None;
        self.records.clear();
        self.fetched_at = None;
        self.pagination.apply(self.pagination.page_size(), 0, 1);
        self.selection.clear();
        self.modal.close();
    }

    #[inline]
    pub fn remove_collection(&mut self, id: &str) {
        self.collections.retain(|c| c.id != id);
        if self.selected_collection_id() == Some(id) {
            self.reset_collection_view();
        }
    }

    /// Commit a fetched page. The page number is clamped against the new total.
    #[inline]
    pub fn apply_page(&mut self, page: u32, page_size: PageSize, fetched: RecordPage) {
        self.pagination.apply(page_size, fetched.total, page);
        self.records = fetched.records;
        self.fetched_at = Some(fetched.fetched_at);
    }

    /// Local navigation, used when there is nothing to fetch
    #[inline]
    pub fn go_to_page(&mut self, page: u32) -> u32 {
        self.pagination.go_to_page(page)
    }

    #[inline]
    pub fn set_page_size(&mut self, size: u32) -> Result<()> {
        self.pagination.set_page_size(size)
    }

    #[inline]
    pub fn select_all(&mut self, checked: bool) {
        self.selection
            .select_all(checked, self.records.iter().map(|r| &r.id));
    }

    #[inline]
    pub fn toggle_one(&mut self, id: &str, checked: bool) {
        self.selection.toggle_one(id, checked);
    }

    #[inline]
    pub fn forget_selected(&mut self, ids: &[RecordId]) {
        self.selection.remove_all(ids);
    }

    #[inline]
    pub fn set_query_draft(&mut self, text: impl Into<String>) {
        self.query.set_draft(text);
    }

    #[inline]
    pub fn submit_query(&mut self, text: impl Into<String>) -> Result<&MetadataFilter> {
        self.query.submit(text)
    }

    #[inline]
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    #[inline]
    pub fn request_drop(&mut self) {
        self.confirmation.request();
    }

    #[inline]
    pub fn cancel_drop(&mut self) -> bool {
        self.confirmation.cancel()
    }

    #[inline]
    pub fn take_pending_drop(&mut self) -> bool {
        self.confirmation.take_pending()
    }

    /// Put the confirmation back after a failed drop so it can be retried
    #[inline]
    pub fn restore_pending_drop(&mut self) {
        self.confirmation.request();
    }

    #[inline]
    pub fn open_detail(&mut self, record: &Record) {
        self.modal.open(record);
    }

    /// Open the detail view for a record on the current page
    #[inline]
    pub fn open_record(&mut self, id: &str) -> Result<()> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| BrowserError::RecordNotFound(id.to_string()))?;
        self.modal.open(record);
        Ok(())
    }

    #[inline]
    pub fn close_detail(&mut self) -> bool {
        self.modal.close()
    }
}


use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::{BrowserError, Result};

/// Page sizes offered by the page size picker
pub const PAGE_SIZES: [u32; 5] = [10, 20, 50, 100, 200];

/// A page size validated against [`PAGE_SIZES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    #[inline]
    fn default() -> Self {
        Self(PAGE_SIZES[0])
    }
}

impl TryFrom<u32> for PageSize {
    type Error = BrowserError;

    #[inline]
    fn try_from(value: u32) -> Result<Self> {
        if PAGE_SIZES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(BrowserError::InvalidConfiguration(format!(
                "page size {} is not one of {:?}",
                value, PAGE_SIZES
            )))
        }
    }
}

impl From<PageSize> for u32 {
    #[inline]
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current page, page size and record total.
///
/// `current_page` always stays within `1..=total_pages()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    page_size: PageSize,
    total_records: usize,
}

impl Default for Pagination {
    #[inline]
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Pagination {
    #[inline]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_records: 0,
        }
    }

    #[inline]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[inline]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[inline]
    pub const fn total_records(&self) -> usize {
        self.total_records
    }

    /// Number of pages, never less than one
    #[inline]
    pub fn total_pages(&self) -> u32 {
        let size = self.page_size.get() as usize;
        let pages = self.total_records.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The page a request for `page` lands on once `total_records` is known
    #[inline]
    pub fn clamped_page(page_size: PageSize, total_records: usize, page: u32) -> u32 {
        let mut target = Self::new(page_size);
        target.total_records = total_records;
        target.go_to_page(page)
    }

    /// Move to page `page`, clamped into the valid range
    #[inline]
    pub fn go_to_page(&mut self, page: u32) -> u32 {
        let clamped = page.clamp(1, self.total_pages());
        if clamped != page {
            debug!("Clamped page {} to {}", page, clamped);
        }
        self.current_page = clamped;
        clamped
    }

    #[inline]
    pub fn next_page(&mut self) -> u32 {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    #[inline]
    pub fn previous_page(&mut self) -> u32 {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    #[inline]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Change the page size and return to the first page
    #[inline]
    pub fn set_page_size(&mut self, size: u32) -> Result<()> {
        self.page_size = PageSize::try_from(size)?;
        self.current_page = 1;
        Ok(())
    }

    /// Update the record total and pull the current page back in range
    #[inline]
    pub fn set_total_records(&mut self, total: usize) {
        self.total_records = total;
        self.go_to_page(self.current_page);
    }

    /// Commit the outcome of a page fetch
    #[inline]
    pub fn apply(&mut self, page_size: PageSize, total_records: usize, page: u32) {
        self.page_size = page_size;
        self.total_records = total_records;
        self.go_to_page(page);
    }

    /// Index of the first record on the current page
    #[inline]
    pub const fn offset(&self) -> usize {
        (self.current_page as usize - 1) * self.page_size.get() as usize
    }

    /// The part of `items` that falls on the current page
    #[inline]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start
            .saturating_add(self.page_size.get() as usize)
            .min(items.len());
        &items[start..end]
    }
}

//! Page request/response contract between the grid host and a data
//! source. In manual mode the host sends the full requested state and
//! receives one page plus the total item count; in client mode the
//! host fetches everything once and the grid computes locally.

use storefront_grid::{ColumnFilters, SortKey};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
    /// Primary sort key, if any.
    pub sort: Option<SortKey>,
    pub filters: ColumnFilters,
    pub global: Option<String>,
}

impl PageRequest {
    pub fn first_page(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
            sort: None,
            filters: ColumnFilters::default(),
            global: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<R> {
    /// The rows of the requested page, already sorted and filtered.
    pub rows: Vec<R>,
    /// Total items matching the request's filters, across all pages.
    pub total_count: usize,
}

impl<R> PageResponse<R> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }
}

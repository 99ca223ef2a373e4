//! The data-source seam.
//!
//! `CatalogSource` stands in for the backend: it answers page requests
//! by evaluating them with the same grid engine the client mode uses,
//! which keeps manual-mode behavior and client-mode behavior aligned
//! in tests.

use storefront_grid::row_model::compute;
use storefront_grid::{GridError, GridModes, Schema, SortSpec, TableState};

use crate::error::{DataError, Result};
use crate::page::{PageRequest, PageResponse};

/// A paged row supplier. Implementations must apply the request's
/// sort and filters before slicing the page.
pub trait DataSource<R> {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>>;

    /// The full row set, for client-computed grids.
    fn fetch_all(&self) -> Result<Vec<R>>;
}

/// In-memory data source over a fixed row set.
pub struct CatalogSource<R> {
    schema: Schema<R>,
    rows: Vec<R>,
}

impl<R: Clone> CatalogSource<R> {
    pub fn new(schema: Schema<R>, rows: Vec<R>) -> Self {
        Self { schema, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Clone> DataSource<R> for CatalogSource<R> {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>> {
        if request.page_size == 0 {
            return Err(DataError::InvalidPageSize);
        }
        // Requests naming columns outside the schema are malformed.
        if let Some(key) = &request.sort
            && self.schema.column(&key.column).is_none()
        {
            return Err(GridError::UnknownColumn(key.column.clone()).into());
        }
        for (column, _) in request.filters.iter() {
            if self.schema.column(column).is_none() {
                return Err(GridError::UnknownColumn(column.clone()).into());
            }
        }

        let mut sort = SortSpec::default();
        if let Some(key) = &request.sort {
            sort.push_key(key.column.clone(), key.direction);
        }
        let state = TableState {
            sort,
            filters: request.filters.clone(),
            global_filter: request.global.clone().unwrap_or_default(),
            pagination: storefront_grid::Pagination {
                page_index: request.page_index,
                page_size: request.page_size,
            },
            ..TableState::default()
        };

        let model = compute(&self.schema, &self.rows, &state, GridModes::client(), None);
        tracing::debug!(
            page_index = model.page_index,
            page_count = model.page_count,
            total = model.filtered_count,
            "serving catalog page"
        );
        Ok(PageResponse {
            rows: model
                .page_rows
                .iter()
                .map(|&ix| self.rows[ix].clone())
                .collect(),
            total_count: model.filtered_count,
        })
    }

    fn fetch_all(&self) -> Result<Vec<R>> {
        Ok(self.rows.clone())
    }
}

//! Product catalog service.
//!
//! Stands in for a remote backend: it serves one page per request,
//! applying the requested sort, filters, and pagination on the server
//! side the way a real API would. The grid's manual mode trusts the
//! response as-is.

use storefront_data::{CatalogSource, DataSource, PageRequest, PageResponse};
use storefront_model::Product;

use crate::state::columns;

/// Fetch one page of products for the given request.
///
/// Errors are flattened to strings for display in the grid's error
/// region.
pub async fn fetch_products_page(
    request: PageRequest,
) -> Result<PageResponse<Product>, String> {
    tokio::task::spawn_blocking(move || {
        let products = storefront_data::seed::products().map_err(|e| e.to_string())?;
        let schema = columns::products_schema(&products);
        let source = CatalogSource::new(schema, products);
        source.fetch_page(&request).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Catalog task failed: {}", e))?
}

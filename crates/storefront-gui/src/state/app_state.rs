//! Root application state.

use std::time::Duration;

use storefront_grid::GridModes;
use storefront_model::{Product, Store, User};

use crate::state::columns;
use crate::state::grid_page::GridPage;
use crate::state::navigation::View;
use crate::state::settings::Settings;

/// Rows per page for the product catalog (served page by page).
pub const PRODUCT_PAGE_SIZE: usize = 20;

/// All application state.
pub struct AppState {
    pub view: View,
    pub settings: Settings,

    /// Users section: client-computed grid over the full seed set.
    pub users: GridPage<User>,
    /// Products section: manual grid, fetched page by page from the
    /// catalog service.
    pub products: GridPage<Product>,
    /// Stores section: client-computed grid with grouped headers.
    pub stores: GridPage<Store>,
}

impl AppState {
    /// Build initial state from loaded settings.
    ///
    /// Client-mode sections load their full row sets up front; the
    /// products section starts empty and loading until the first page
    /// arrives from the catalog service.
    pub fn with_settings(settings: Settings) -> Self {
        let debounce = Duration::from_millis(settings.general.debounce_ms);
        let page_size = settings.general.page_size;

        let users = match storefront_data::seed::users() {
            Ok(rows) => {
                let schema = columns::users_schema(&rows);
                let mut page =
                    GridPage::new(schema, GridModes::client(), page_size).with_debounce(debounce);
                page.set_rows(rows);
                page
            }
            Err(e) => {
                tracing::error!("Failed to seed users: {}", e);
                let mut page = GridPage::new(
                    columns::users_schema(&[]),
                    GridModes::client(),
                    page_size,
                )
                .with_debounce(debounce);
                page.mark_error(e.to_string());
                page
            }
        };

        let stores = match storefront_data::seed::stores() {
            Ok(rows) => {
                let schema = columns::stores_schema(&rows);
                let mut page =
                    GridPage::new(schema, GridModes::client(), page_size).with_debounce(debounce);
                page.set_rows(rows);
                page
            }
            Err(e) => {
                tracing::error!("Failed to seed stores: {}", e);
                let mut page = GridPage::new(
                    columns::stores_schema(&[]),
                    GridModes::client(),
                    page_size,
                )
                .with_debounce(debounce);
                page.mark_error(e.to_string());
                page
            }
        };

        // Filter-kind inference needs a numeric sample before the first
        // page arrives, so the catalog seed doubles as the sample here.
        let sample = storefront_data::seed::products().unwrap_or_default();
        let mut products = GridPage::new(
            columns::products_schema(&sample),
            GridModes::manual(),
            PRODUCT_PAGE_SIZE,
        )
        .with_debounce(debounce);
        products.mark_loading();

        Self {
            view: View::default(),
            settings,
            users,
            products,
            stores,
        }
    }
}

//! Handler for the products grid.
//!
//! Products run in manual mode: sorting, filtering, and pagination are
//! all served by the catalog service, so any transition touching those
//! facets triggers a refetch with the full requested state.

use iced::Task;
use storefront_data::PageRequest;

use crate::handler::grid::{self, GridAction};
use crate::handler::MessageHandler;
use crate::message::{GridMessage, Message};
use crate::service;
use crate::state::AppState;

pub struct ProductsHandler;

impl MessageHandler<GridMessage> for ProductsHandler {
    fn handle(&self, state: &mut AppState, msg: GridMessage) -> Task<Message> {
        match grid::apply(&mut state.products, msg) {
            GridAction::Debounce {
                column,
                ticket,
                delay,
            } => grid::debounce_task(column, ticket, delay, Message::Products),
            GridAction::Refetch => {
                state.products.mark_refetching();
                fetch_page(state)
            }
            GridAction::None => Task::none(),
        }
    }
}

/// Fetch the page the current grid state asks for.
pub fn fetch_page(state: &AppState) -> Task<Message> {
    let request = page_request(state);
    tracing::debug!(
        page_index = request.page_index,
        page_size = request.page_size,
        "requesting product page"
    );
    Task::perform(
        service::catalog::fetch_products_page(request),
        Message::ProductsPageLoaded,
    )
}

/// Snapshot the grid's requested state as a page request.
fn page_request(state: &AppState) -> PageRequest {
    let grid_state = state.products.controller.state();
    let global = grid_state.global_filter.trim();
    PageRequest {
        page_index: grid_state.pagination.page_index,
        page_size: grid_state.pagination.page_size,
        sort: grid_state.sort.keys().first().cloned(),
        filters: grid_state.filters.clone(),
        global: (!global.is_empty()).then(|| global.to_string()),
    }
}

//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background task results flow through
//! these types into `App::update`.

pub mod grid;

use storefront_data::PageResponse;
use storefront_model::Product;

use crate::state::View;

pub use grid::GridMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Navigate to a different section
    Navigate(View),

    // =========================================================================
    // Section grids
    // =========================================================================
    /// Users grid messages
    Users(GridMessage),

    /// Products grid messages
    Products(GridMessage),

    /// Stores grid messages
    Stores(GridMessage),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// A product page arrived from the catalog service
    ProductsPageLoaded(Result<PageResponse<Product>, String>),

    // =========================================================================
    // Settings
    // =========================================================================
    /// Dark mode toggled from the sidebar
    DarkModeToggled(bool),

    /// No operation - used for placeholder actions
    Noop,
}

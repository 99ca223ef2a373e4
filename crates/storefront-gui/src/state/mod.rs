//! Application state for Storefront Studio.
//!
//! State is organized per concern: navigation, persisted settings,
//! the per-section grid pages, and the column schemas that drive them.

pub mod app_state;
pub mod columns;
pub mod grid_page;
pub mod navigation;
pub mod settings;

pub use app_state::{AppState, PRODUCT_PAGE_SIZE};
pub use grid_page::{GridPage, RangeInput};
pub use navigation::View;
pub use settings::Settings;

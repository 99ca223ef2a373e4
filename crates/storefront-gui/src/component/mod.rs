//! Reusable UI components.

pub mod data_grid;
pub mod sidebar;

pub use data_grid::data_grid;
pub use sidebar::sidebar;

//! Data-source contracts and fixtures for the storefront dashboard.

pub mod error;
pub mod page;
pub mod seed;
pub mod source;

pub use error::{DataError, Result};
pub use page::{PageRequest, PageResponse};
pub use source::{CatalogSource, DataSource};

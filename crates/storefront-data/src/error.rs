use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("schema error: {0}")]
    Schema(#[from] storefront_grid::GridError),
    #[error("seed data error: {0}")]
    Seed(#[from] storefront_model::ModelError),
}

pub type Result<T> = std::result::Result<T, DataError>;

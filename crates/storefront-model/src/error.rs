use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("record name must not be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, ModelError>;

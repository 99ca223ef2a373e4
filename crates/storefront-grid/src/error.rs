use thiserror::Error;

use crate::column::ColumnId;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),
    #[error("schema must contain at least one column")]
    EmptySchema,
    #[error("unknown column id: {0}")]
    UnknownColumn(ColumnId),
}

pub type Result<T> = std::result::Result<T, GridError>;

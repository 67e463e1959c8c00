use thiserror::Error;

use crate::forms::ValidationErrors;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Missing required field: {}", .0.first().unwrap_or("?"))]
    Validation(ValidationErrors),

    #[error("Page size {0} is not one of the allowed sizes")]
    InvalidPageSize(usize),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Filter {0} does not accept this kind of value")]
    FilterMismatch(String),
}

pub type Result<T> = std::result::Result<T, DeskError>;

use examdesk_common::{FilterError, PaginationError, PeriodError};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<FilterError> for ClientError {
    fn from(err: FilterError) -> Self {
        ClientError::InvalidInput(err.to_string())
    }
}

impl From<PeriodError> for ClientError {
    fn from(err: PeriodError) -> Self {
        ClientError::InvalidInput(err.to_string())
    }
}

impl From<PaginationError> for ClientError {
    fn from(err: PaginationError) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

use reqwest::StatusCode;
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => AppError::Conflict(msg),
            other => AppError::Database(other.to_string()),
        }
    }
}

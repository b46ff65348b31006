use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Payment gateway is not configured")]
    NotConfigured,

    #[error("Payment gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Payment gateway returned an error: {message} (Status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Failed to parse payment gateway response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Payment intent has no client secret")]
    MissingClientSecret,
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidPrice(msg) => AppError::BadRequest(msg),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}

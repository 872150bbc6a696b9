use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown service category: {0}")]
    UnknownCategory(String),
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Sink error: {0}")]
    SinkError(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("notification transport: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification delivery: {0}")]
    Delivery(String),
}

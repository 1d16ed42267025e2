use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid endpoint (must be a relative path): {0}")]
    InvalidEndpoint(String),

    #[error("Invalid header value")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Session store error: {0}")]
    Store(#[from] anyhow::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

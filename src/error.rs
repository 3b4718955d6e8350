use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Orders endpoint returned status {0}")]
    Status(u16),

    #[error("Failed to decode order page: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid orders endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

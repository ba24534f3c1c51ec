use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    // Expected JSON path or field is absent
    #[error("Missing field in response: {0}")]
    MissingField(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown period '{0}', expected one of overall, 7day, 1month, 3month, 6month, 12month")]
    InvalidPeriod(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

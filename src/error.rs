//! Error types for the moneyball ETL pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MoneyballError>;

#[derive(Error, Debug)]
pub enum MoneyballError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("API returned HTTP {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("API key not provided: {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Credentials file not found: {path}")]
    MissingCredentials { path: String },

    #[error("Invalid credentials file {path}: {message}")]
    InvalidCredentials { path: String, message: String },

    #[error("Could not determine data directory")]
    NoDataDirectory,

    #[error("Unexpected response format: {context}")]
    UnexpectedShape { context: String },

    #[error("Document {name} for collection '{collection}' must contain a valid 'id'")]
    MissingDocumentId { collection: String, name: String },

    #[error("Unknown collection: {name}")]
    UnknownCollection { name: String },
}

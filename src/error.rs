//! Error types for the review analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unsupported file format: {0}. Please upload JSON, CSV, or TXT file.")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scorer error: {0}")]
    Scorer(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<config::ConfigError> for ReviewError {
    fn from(err: config::ConfigError) -> Self {
        ReviewError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;

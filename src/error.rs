//! Error types for design-catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("missing column `{0}`")]
    MissingColumn(String),

    #[error("invalid {field} value `{value}`")]
    InvalidValue { field: &'static str, value: String },

    #[error("validation failed: {0}")]
    ValidationFailed(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

use std::io;

use csvtable::TableError;
use thiserror::Error;
use validate::ValidationError;

/// Errors surfaced by the store and the request service.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is missing or empty.
    #[error("database not found: {0}")]
    DatabaseNotFound(String),

    /// A record failed structural parsing.
    #[error("database record entry invalid: {0}")]
    InvalidRecord(String),

    #[error("{0}")]
    InvalidAqiValue(String),

    #[error("{0}")]
    InvalidAqiCategory(String),

    /// The named country does not exist.
    #[error("invalid country: {0}")]
    InvalidCountry(String),

    /// The named city does not exist, or already exists on create.
    #[error("invalid city: {0}")]
    InvalidCity(String),

    /// A query matched no country.
    #[error("no country found: {0}")]
    NoCountryFound(String),

    /// A query matched no city.
    #[error("no city found: {0}")]
    NoCityFound(String),

    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Status code reported to the caller: 500 for I/O failures, 403 for
    /// everything else.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Io(_) => 500,
            _ => 403,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        let msg = e.to_string();
        match e {
            ValidationError::InvalidRecord(_) => StoreError::InvalidRecord(msg),
            ValidationError::InvalidAqiValue(_) => StoreError::InvalidAqiValue(msg),
            ValidationError::InvalidAqiCategory(_) => StoreError::InvalidAqiCategory(msg),
        }
    }
}

impl From<TableError> for StoreError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Io(e) => StoreError::Io(e),
            TableError::NotFound(path) => StoreError::DatabaseNotFound(path.display().to_string()),
            TableError::MissingHeader => {
                StoreError::DatabaseNotFound("table file is empty".to_string())
            }
        }
    }
}

//! Error types for cells

use thiserror::Error;

/// The main error type for cells operations
#[derive(Debug, Error)]
pub enum CellsError {
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Frame geometry error: {0}")]
    InvalidFrame(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Display error: {0}")]
    DisplayError(String),
}

/// Result type alias for cells operations
pub type Result<T> = std::result::Result<T, CellsError>;

impl From<toml::de::Error> for CellsError {
    fn from(err: toml::de::Error) -> Self {
        CellsError::TomlParseError(err.to_string())
    }
}

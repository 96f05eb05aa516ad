//! Error types for unit conversion and history operations

use crate::units::Category;

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for the converter
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Non-numeric entry where a number was expected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unit index outside the listed range
    #[error("Invalid unit selection")]
    InvalidSelection,

    /// Unit name not present in the category
    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit {
        /// Category that was searched
        category: Category,
        /// Name that was not found
        unit: String,
    },

    /// Category name not recognised
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// History file exists but holds no data
    #[error("No conversion history found")]
    EmptyHistory,

    /// History file does not exist
    #[error("No history file exists yet")]
    MissingHistory,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

}

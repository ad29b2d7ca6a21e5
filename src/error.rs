//! Error types for the salary simulator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the rate dataset,
//! computing withholding or solving for an employer cost.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::TableId;

/// The main error type for the salary simulator.
///
/// The withholding engine, the reverse solver and the dataset loader all
/// return this error type. The reverse solver adds no variants of its own:
/// an error raised by an inner withholding call aborts the whole sweep.
///
/// # Example
///
/// ```
/// use salary_simulator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/dataset.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/dataset.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Dataset file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Dataset file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path (or source name) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The dataset parsed but breaks a structural rule of a rate table.
    #[error("Invalid rate table '{table}': {message}")]
    InvalidDataset {
        /// The table that failed validation.
        table: String,
        /// What was wrong with it.
        message: String,
    },

    /// A calculation was requested before any rate dataset was supplied.
    #[error("Rate dataset not loaded: supply a dataset before calculating")]
    DatasetNotLoaded,

    /// A calculation input was malformed.
    #[error("Invalid input field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The table resolved for the taxpayer profile is absent from the dataset.
    #[error("Withholding table {table} not found in dataset")]
    TableNotFound {
        /// The resolved table.
        table: TableId,
    },

    /// No band of the table covers the gross salary.
    #[error("No band in table {table} covers gross salary {gross_salary}")]
    BandNotFound {
        /// The table that was searched.
        table: TableId,
        /// The gross salary that was looked up.
        gross_salary: Decimal,
    },

    /// A deduction formula does not have the form `a * b * (c - R)`.
    #[error("Unsupported deduction formula: {expression}")]
    UnsupportedFormula {
        /// The offending expression.
        expression: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

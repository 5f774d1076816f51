//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation and
//! draft-batch management.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No statutory rules are effective for the requested date.
    #[error("No statutory rules effective on or before {date}")]
    RulesNotFound {
        /// The date for which rules were requested.
        date: NaiveDate,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_id}': {message}")]
    InvalidEmployee {
        /// The identifier of the invalid employee.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// No draft row exists for the given employee.
    #[error("No draft row for employee '{employee_id}'")]
    RowNotFound {
        /// The employee identifier that was not found.
        employee_id: String,
    },

    /// An attendance report's period does not match the current draft period.
    ///
    /// Raised by the reconciler so a stale in-flight fetch can never
    /// overwrite rows after the period has changed.
    #[error("Attendance report covers {report_start}..{report_end} but the draft period is {period_start}..{period_end}")]
    PeriodMismatch {
        /// Start date of the attendance report.
        report_start: NaiveDate,
        /// End date of the attendance report.
        report_end: NaiveDate,
        /// Start date of the current draft period.
        period_start: NaiveDate,
        /// End date of the current draft period.
        period_end: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

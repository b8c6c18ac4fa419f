//! Error types for the leave ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every input the core rejects.

use thiserror::Error;

/// The main error type for the leave ledger.
///
/// Date and academic-period errors describe malformed caller input and are
/// never retried or coerced. Configuration errors are raised only while
/// loading the institution's YAML files.
///
/// # Example
///
/// ```
/// use leave_ledger::error::LedgerError;
///
/// let error = LedgerError::InvalidBatch {
///     batch: "20x4".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid batch '20x4': expected a 4-digit start year");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The (year, month, day) triple is not a real calendar date.
    #[error("Invalid date: {year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// The requested day of month.
        day: u32,
    },

    /// A date string did not match the strict `YYYY-MM-DD` form.
    #[error("Invalid date format '{input}': expected YYYY-MM-DD")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },

    /// A batch identifier was not a 4-digit start year.
    #[error("Invalid batch '{batch}': expected a 4-digit start year")]
    InvalidBatch {
        /// The rejected batch identifier.
        batch: String,
    },

    /// A semester number was out of range.
    #[error("Invalid semester {semester}: {message}")]
    InvalidSemester {
        /// The rejected semester number.
        semester: u32,
        /// Why the semester was rejected.
        message: String,
    },

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
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

//! Error types for structured error handling.
//!
//! This module provides:
//! - `SchemaError`: structural errors from the tabular ingestion boundary
//!
//! Structural errors are never recovered locally; they surface to the
//! caller with the offending column and row index so that a bad export can
//! be diagnosed. Numeric edge cases (division guards, empty sets) are not
//! errors at all and are absorbed inside the engine.

use thiserror::Error;

/// Categorised ingestion errors.
///
/// # Variants
/// - `MalformedRow`: a row is not a column/value object
/// - `MissingColumn`: a required column is absent from a row
/// - `TypeMismatch`: a cell holds a value of the wrong type
///
/// # Examples
/// ```
/// use fpa_core::types::SchemaError;
///
/// let err = SchemaError::MissingColumn { column: "Revenue", row: 3 };
/// assert_eq!(format!("{}", err), "missing column `Revenue` at row 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A row is not an object of column/value pairs.
    #[error("row {row} is not a column/value object")]
    MalformedRow {
        /// Zero-based row index within the dataset.
        row: usize,
    },

    /// A required column is missing from a row.
    #[error("missing column `{column}` at row {row}")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
        /// Zero-based row index within the dataset.
        row: usize,
    },

    /// A cell holds a value of the wrong type.
    #[error("column `{column}` at row {row} holds a {found} value, expected {expected}")]
    TypeMismatch {
        /// Name of the offending column.
        column: &'static str,
        /// Zero-based row index within the dataset.
        row: usize,
        /// Expected cell type.
        expected: &'static str,
        /// Type actually found in the cell.
        found: &'static str,
    },
}

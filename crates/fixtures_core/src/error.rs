//! Error types for data sets and tables.
//!
//! Lookups that find nothing are not errors: `DataSet::table` returns `None`
//! and `DataSet::matches` returns `false`. The variants here cover misuse of
//! a table (unknown column, row index past the end) and invalid construction
//! of the composite data sets.

use thiserror::Error;

/// Result type for data set operations.
pub type Result<T> = std::result::Result<T, DataSetError>;

/// Main error type for data set and table operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataSetError {
    /// Column is not part of the table metadata
    #[error("Column '{column}' does not exist in table '{table}'")]
    ColumnNotFound {
        /// Table name
        table: String,
        /// Requested column
        column: String,
    },

    /// Row index is past the end of the table
    #[error("Row {row} is out of range for table '{table}' ({row_count} rows)")]
    RowOutOfRange {
        /// Table name
        table: String,
        /// Requested row index
        row: usize,
        /// Number of rows in the table
        row_count: usize,
    },

    /// Two tables share a name but not a definition
    #[error("There is already a table named '{0}' with a different table definition")]
    IncompatibleTable(String),

    /// Filter configuration is contradictory
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Positional row does not fit the declared columns
    #[error("Table '{table}' has {expected} columns but the row has {actual} values")]
    ValueCount {
        /// Table name
        table: String,
        /// Number of declared columns
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
}

impl DataSetError {
    /// Creates a new column-not-found error.
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a new row-out-of-range error.
    pub fn row_out_of_range(table: impl Into<String>, row: usize, row_count: usize) -> Self {
        Self::RowOutOfRange {
            table: table.into(),
            row,
            row_count,
        }
    }
}

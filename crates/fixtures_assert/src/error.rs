//! Error types for assertions.

use thiserror::Error;

/// Why an assertion on data sets or tables failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    /// The two data sets do not hold the same table names
    #[error(
        "Data sets hold different tables (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    TableSetMismatch {
        /// Tables expected but not found
        missing: Vec<String>,
        /// Tables found but not expected
        unexpected: Vec<String>,
    },

    /// A table differs from its expected namesake
    #[error("Table '{table}' does not match: {reason}{details}")]
    TableMismatch {
        /// Table name
        table: String,
        /// First difference found
        reason: String,
        /// Rendering of both tables, empty unless requested
        details: String,
    },

    /// No row of the table holds the expected values
    #[error("Table '{table}' does not contain the row {row}")]
    RowNotFound {
        /// Table name
        table: String,
        /// The expected row, rendered
        row: String,
    },
}

impl AssertionError {
    /// Creates a new table mismatch error without renderings.
    pub fn table_mismatch(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TableMismatch {
            table: table.into(),
            reason: reason.into(),
            details: String::new(),
        }
    }

    /// Returns the table the failure is about, if there is one.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::TableSetMismatch { .. } => None,
            Self::TableMismatch { table, .. } | Self::RowNotFound { table, .. } => Some(table),
        }
    }
}

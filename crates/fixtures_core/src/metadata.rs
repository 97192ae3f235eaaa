//! Table metadata.

use serde::{Deserialize, Serialize};

/// Describes a table's name and structure.
///
/// The table name is the join key used when two data sets are matched.
pub trait TableMetaData {
    /// Returns the table name.
    fn table_name(&self) -> &str;

    /// Returns the column names in column order.
    fn columns(&self) -> &[String];

    /// Returns the primary key columns. Defaults to none.
    fn primary_keys(&self) -> &[String] {
        &[]
    }

    /// Returns true if the table has a column with this name.
    fn has_column(&self, column: &str) -> bool {
        self.columns().iter().any(|c| c == column)
    }

    /// Checks whether two tables share a definition.
    ///
    /// Names must be equal and columns must be equal in the same order.
    /// Primary keys are descriptive and do not take part.
    fn matches(&self, other: &dyn TableMetaData) -> bool {
        self.table_name() == other.table_name() && self.columns() == other.columns()
    }
}

/// In-memory table metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultTableMetaData {
    /// Table name
    pub table_name: String,

    /// Column names in order
    pub columns: Vec<String>,

    /// Primary key column names
    #[serde(default)]
    pub primary_keys: Vec<String>,
}

impl DefaultTableMetaData {
    /// Creates metadata for a table with the given columns.
    pub fn new<I, S>(table_name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_name: table_name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            primary_keys: Vec::new(),
        }
    }

    /// Sets the primary key columns.
    pub fn with_primary_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Copies any metadata into a `DefaultTableMetaData`.
    pub fn from_meta_data(meta: &dyn TableMetaData) -> Self {
        Self {
            table_name: meta.table_name().to_string(),
            columns: meta.columns().to_vec(),
            primary_keys: meta.primary_keys().to_vec(),
        }
    }
}

impl TableMetaData for DefaultTableMetaData {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }
}

//! Builder pattern for creating tables and data sets.
//!
//! This module provides ergonomic builders for writing fixtures directly in
//! test code with a fluent API.

use crate::{DataRow, DataValue, DefaultDataSet, DefaultTable, DefaultTableMetaData};

/// Builder for creating a `DefaultTable`.
///
/// Rows are given either in column order ([`TableBuilder::values`]) or keyed
/// by column ([`TableBuilder::row`]). Columns that were not declared are
/// inferred from keyed rows, in first-seen order.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{Table, TableBuilder};
///
/// let users = TableBuilder::new("users")
///     .columns(["id", "name"])
///     .primary_keys(["id"])
///     .values(vec![1.into(), "alice".into()])
///     .values(vec![2.into(), "bob".into()])
///     .build();
///
/// assert_eq!(users.row_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    name: String,
    columns: Vec<String>,
    primary_keys: Vec<String>,
    rows: Vec<PendingRow>,
}

#[derive(Debug)]
enum PendingRow {
    Values(Vec<DataValue>),
    Keyed(DataRow),
}

impl TableBuilder {
    /// Creates a new table builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declares columns, appended to those already declared.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for column in columns {
            self.push_column(column.into());
        }
        self
    }

    /// Sets the primary key columns.
    pub fn primary_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a row given in declared column order.
    pub fn values(mut self, values: Vec<DataValue>) -> Self {
        self.rows.push(PendingRow::Values(values));
        self
    }

    /// Adds a row keyed by column name.
    pub fn row<I, K, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DataValue>,
    {
        let row: DataRow = row
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        for column in row.keys() {
            self.push_column(column.clone());
        }
        self.rows.push(PendingRow::Keyed(row));
        self
    }

    fn push_column(&mut self, column: String) {
        if !self.columns.contains(&column) {
            self.columns.push(column);
        }
    }

    /// Builds the table.
    ///
    /// # Panics
    ///
    /// Panics if a positional row has more values than there are columns.
    pub fn build(self) -> DefaultTable {
        let meta = DefaultTableMetaData::new(self.name, self.columns)
            .with_primary_keys(self.primary_keys);
        let mut table = DefaultTable::new(meta);

        for row in self.rows {
            let added = match row {
                PendingRow::Values(values) => table.add_values(values),
                PendingRow::Keyed(row) => table.add_row(row),
            };
            if let Err(e) = added {
                panic!("invalid fixture row: {}", e);
            }
        }

        table
    }
}

/// Builder for creating a `DefaultDataSet`.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{DataSet, DataSetBuilder, TableBuilder};
///
/// let data_set = DataSetBuilder::new()
///     .table(TableBuilder::new("users").row([("id", 1)]))
///     .empty_table("orders", ["id", "user_id"])
///     .build();
///
/// assert_eq!(data_set.table_names(), vec!["users", "orders"]);
/// ```
#[derive(Debug, Default)]
pub struct DataSetBuilder {
    tables: Vec<TableBuilder>,
}

impl DataSetBuilder {
    /// Creates a new data set builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table.
    pub fn table(mut self, table: TableBuilder) -> Self {
        self.tables.push(table);
        self
    }

    /// Adds a table with columns and no rows.
    pub fn empty_table<I, S>(self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table(TableBuilder::new(name).columns(columns))
    }

    /// Builds the data set.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`TableBuilder::build`].
    pub fn build(self) -> DefaultDataSet {
        DefaultDataSet::from_tables(self.tables.into_iter().map(TableBuilder::build))
    }
}

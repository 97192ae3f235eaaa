//! Tables and their content equality.
//!
//! A [`Table`] is the unit a data set is made of. The data set core never
//! looks at rows itself: it asks one table whether it matches another and
//! leaves the definition of "matches" to this module.

use crate::{DataRow, DataSetError, DataValue, DefaultTableMetaData, Result, TableMetaData};
use std::fmt;
use tracing::warn;

const CELL_WIDTH: usize = 20;

/// A named, ordered collection of rows with column metadata.
///
/// Implementors provide metadata, a row count and cell access; equality,
/// row access and rendering come for free.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{DefaultTable, DefaultTableMetaData, Table};
///
/// let mut users = DefaultTable::new(DefaultTableMetaData::new("users", ["id", "name"]));
/// users.add_values(vec![1.into(), "alice".into()]).unwrap();
///
/// assert_eq!(users.table_name(), "users");
/// assert_eq!(users.row_count(), 1);
/// assert_eq!(users.value(0, "name").unwrap().to_string(), "alice");
/// ```
pub trait Table {
    /// Returns the table metadata.
    fn meta_data(&self) -> &dyn TableMetaData;

    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the value of a cell.
    ///
    /// # Errors
    ///
    /// `ColumnNotFound` if the column is not part of the metadata,
    /// `RowOutOfRange` if `row >= row_count()`.
    fn value(&self, row: usize, column: &str) -> Result<DataValue>;

    /// Returns the table name.
    fn table_name(&self) -> &str {
        self.meta_data().table_name()
    }

    /// Returns a whole row, keyed by column in column order.
    fn row(&self, row: usize) -> Result<DataRow> {
        let mut values = DataRow::new();
        for column in self.meta_data().columns() {
            values.insert(column.clone(), self.value(row, column)?);
        }
        Ok(values)
    }

    /// Returns true if some row holds all the given column values.
    ///
    /// Columns not mentioned in `expected` are ignored.
    fn contains_row(&self, expected: &DataRow) -> bool {
        (0..self.row_count()).any(|row| {
            expected.iter().all(|(column, value)| {
                self.value(row, column)
                    .is_ok_and(|actual| actual.loosely_eq(value))
            })
        })
    }

    /// Checks whether this table has the same content as `other`.
    ///
    /// Metadata must match, row counts must be equal, and every cell must be
    /// loosely equal row by row. Row order is significant. A cell that cannot
    /// be read counts as a mismatch.
    fn matches(&self, other: &dyn Table) -> bool {
        let meta = self.meta_data();
        if !meta.matches(other.meta_data()) || self.row_count() != other.row_count() {
            return false;
        }

        for row in 0..self.row_count() {
            for column in meta.columns() {
                match (self.value(row, column), other.value(row, column)) {
                    (Ok(this_value), Ok(other_value)) => {
                        if !this_value.loosely_eq(&other_value) {
                            return false;
                        }
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        warn!("Failed to read cell while matching tables: {}", e);
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Renders the table as a framed text grid.
    ///
    /// ```text
    /// +----------------------+----------------------+
    /// | users                                       |
    /// +----------------------+----------------------+
    /// | id                   | name                 |
    /// +----------------------+----------------------+
    /// | 1                    | alice                |
    /// +----------------------+----------------------+
    /// ```
    fn render(&self) -> String {
        let columns = self.meta_data().columns();
        let separator = format!(
            "{}+\n",
            format!("+{}", "-".repeat(CELL_WIDTH + 2)).repeat(columns.len().max(1))
        );
        let inner_width = separator.len() - 5;

        let mut out = separator.clone();
        out.push_str(&format!(
            "| {:<width$} |\n",
            self.table_name(),
            width = inner_width
        ));
        out.push_str(&separator);
        out.push_str(&render_line(columns.iter().map(String::as_str)));
        out.push_str(&separator);

        for row in 0..self.row_count() {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| match self.value(row, column) {
                    Ok(value) => value.to_string(),
                    Err(_) => String::from("?"),
                })
                .collect();
            out.push_str(&render_line(cells.iter().map(String::as_str)));
            out.push_str(&separator);
        }

        out
    }
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::new();
    for cell in cells {
        line.push_str(&format!("| {:<width$} ", cell, width = CELL_WIDTH));
    }
    line.push_str("|\n");
    line
}

/// In-memory table.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultTable {
    meta: DefaultTableMetaData,
    rows: Vec<DataRow>,
}

impl DefaultTable {
    /// Creates an empty table.
    pub fn new(meta: DefaultTableMetaData) -> Self {
        Self {
            meta,
            rows: Vec::new(),
        }
    }

    /// Copies any table into a `DefaultTable`.
    pub fn from_table(table: &dyn Table) -> Result<Self> {
        let mut copy = Self::new(DefaultTableMetaData::from_meta_data(table.meta_data()));
        copy.add_table_rows(table)?;
        Ok(copy)
    }

    /// Returns the concrete metadata.
    pub fn default_meta_data(&self) -> &DefaultTableMetaData {
        &self.meta
    }

    /// Returns the stored rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Appends a row keyed by column.
    ///
    /// Columns missing from the row read as null.
    ///
    /// # Errors
    ///
    /// `ColumnNotFound` if the row names a column outside the metadata.
    pub fn add_row(&mut self, row: DataRow) -> Result<()> {
        if let Some(column) = row.keys().find(|c| !self.meta.has_column(c)) {
            return Err(DataSetError::column_not_found(&self.meta.table_name, column));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends several rows keyed by column.
    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = DataRow>) -> Result<()> {
        for row in rows {
            self.add_row(row)?;
        }
        Ok(())
    }

    /// Appends a row given in column order.
    ///
    /// # Errors
    ///
    /// `ValueCount` if there are more values than columns. Fewer values
    /// leave the trailing columns null.
    pub fn add_values(&mut self, values: Vec<DataValue>) -> Result<()> {
        if values.len() > self.meta.columns.len() {
            return Err(DataSetError::ValueCount {
                table: self.meta.table_name.clone(),
                expected: self.meta.columns.len(),
                actual: values.len(),
            });
        }
        let row = self.meta.columns.iter().cloned().zip(values).collect();
        self.rows.push(row);
        Ok(())
    }

    /// Replaces the value of a cell.
    pub fn set_value(&mut self, row: usize, column: &str, value: DataValue) -> Result<()> {
        if !self.meta.has_column(column) {
            return Err(DataSetError::column_not_found(&self.meta.table_name, column));
        }
        let row_count = self.rows.len();
        let stored = self.rows.get_mut(row).ok_or_else(|| {
            DataSetError::row_out_of_range(&self.meta.table_name, row, row_count)
        })?;
        stored.insert(column.to_string(), value);
        Ok(())
    }

    /// Appends all rows of another table with the same columns.
    ///
    /// # Errors
    ///
    /// `IncompatibleTable` if the other table's metadata does not match.
    pub fn add_table_rows(&mut self, other: &dyn Table) -> Result<()> {
        if !self.meta.matches(other.meta_data()) {
            return Err(DataSetError::IncompatibleTable(
                other.table_name().to_string(),
            ));
        }
        for row in 0..other.row_count() {
            let values = other.row(row)?;
            self.rows.push(values);
        }
        Ok(())
    }
}

impl Table for DefaultTable {
    fn meta_data(&self) -> &dyn TableMetaData {
        &self.meta
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, row: usize, column: &str) -> Result<DataValue> {
        if !self.meta.has_column(column) {
            return Err(DataSetError::column_not_found(&self.meta.table_name, column));
        }
        let stored = self.rows.get(row).ok_or_else(|| {
            DataSetError::row_out_of_range(&self.meta.table_name, row, self.rows.len())
        })?;
        Ok(stored.get(column).cloned().unwrap_or(DataValue::Null))
    }
}

impl fmt::Display for DefaultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

//! In-memory data set.

use crate::{DataSet, Table, TableIterator};
use std::fmt;

/// A data set holding its tables in memory, in insertion order.
#[derive(Default)]
pub struct DefaultDataSet {
    tables: Vec<Box<dyn Table>>,
}

impl DefaultDataSet {
    /// Creates an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data set from a list of tables.
    pub fn from_tables<T>(tables: impl IntoIterator<Item = T>) -> Self
    where
        T: Table + 'static,
    {
        let mut data_set = Self::new();
        for table in tables {
            data_set.add_table(table);
        }
        data_set
    }

    /// Adds a table and returns the data set.
    pub fn with_table(mut self, table: impl Table + 'static) -> Self {
        self.add_table(table);
        self
    }

    /// Adds a table after the existing ones.
    ///
    /// A table whose name is already present is kept; lookups by name still
    /// return the earlier one.
    pub fn add_table(&mut self, table: impl Table + 'static) {
        self.tables.push(Box::new(table));
    }

    /// Returns the number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the data set has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl DataSet for DefaultDataSet {
    fn create_iterator(&self, reverse: bool) -> TableIterator<'_> {
        TableIterator::ordered(self.tables.iter().map(|t| &**t as &dyn Table), reverse)
    }
}

impl fmt::Debug for DefaultDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultDataSet")
            .field("tables", &self.table_names())
            .finish()
    }
}

impl fmt::Display for DefaultDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

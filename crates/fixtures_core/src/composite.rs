//! Data set built by merging other data sets.

use crate::{DataSet, DataSetError, DefaultTable, Result, Table, TableIterator};
use tracing::debug;

/// A data set combining the tables of several data sets.
///
/// Tables are copied in the order the data sets are added. A table whose
/// name was already seen has its rows appended to the earlier table, which
/// requires both to share the same definition.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{CompositeDataSet, DataSet, DefaultDataSet, Table, TableBuilder};
///
/// let first = DefaultDataSet::new()
///     .with_table(TableBuilder::new("users").columns(["id"]).values(vec![1.into()]).build());
/// let second = DefaultDataSet::new()
///     .with_table(TableBuilder::new("users").columns(["id"]).values(vec![2.into()]).build());
///
/// let merged = CompositeDataSet::from_data_sets([&first as &dyn DataSet, &second]).unwrap();
/// assert_eq!(merged.table("users").unwrap().row_count(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CompositeDataSet {
    tables: Vec<DefaultTable>,
}

impl CompositeDataSet {
    /// Creates an empty composite data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composite data set from several data sets, in order.
    pub fn from_data_sets<'a>(data_sets: impl IntoIterator<Item = &'a dyn DataSet>) -> Result<Self> {
        let mut composite = Self::new();
        for data_set in data_sets {
            composite.add_data_set(data_set)?;
        }
        Ok(composite)
    }

    /// Adds every table of `data_set` in forward order.
    ///
    /// A table without columns and rows, such as `users: []` in a fixture
    /// file, takes the definition of a same-named table added before or
    /// after it.
    ///
    /// # Errors
    ///
    /// `IncompatibleTable` if a table of the same name already exists with
    /// different columns. Tables added before the failing one stay merged.
    pub fn add_data_set(&mut self, data_set: &dyn DataSet) -> Result<()> {
        for table in data_set.iter() {
            let name = table.table_name();
            match self.tables.iter_mut().find(|t| t.table_name() == name) {
                Some(existing) if is_undefined(&*existing) => {
                    debug!("Table '{}' takes its columns from a later definition", name);
                    *existing = DefaultTable::from_table(table)?;
                }
                Some(_) if is_undefined(table) => {
                    debug!("Ignoring empty declaration of table '{}'", name);
                }
                Some(existing) => {
                    if !existing.meta_data().matches(table.meta_data()) {
                        return Err(DataSetError::IncompatibleTable(name.to_string()));
                    }
                    debug!("Appending {} rows to table '{}'", table.row_count(), name);
                    existing.add_table_rows(table)?;
                }
                None => self.tables.push(DefaultTable::from_table(table)?),
            }
        }
        Ok(())
    }

    /// Returns the number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if there are no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn is_undefined(table: &dyn Table) -> bool {
    table.meta_data().columns().is_empty() && table.row_count() == 0
}

impl DataSet for CompositeDataSet {
    fn create_iterator(&self, reverse: bool) -> TableIterator<'_> {
        TableIterator::ordered(self.tables.iter().map(|t| t as &dyn Table), reverse)
    }
}

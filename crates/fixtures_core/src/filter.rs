//! Filtered views over a data set.
//!
//! A [`DataSetFilter`] hides tables and columns of another data set without
//! copying rows. It is typically used to compare only the columns a test
//! controls, leaving out generated keys or timestamps.

use crate::{
    DataSet, DataSetError, DataValue, DefaultTableMetaData, Result, Table, TableIterator,
    TableMetaData,
};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

const TABLE_CONFLICT: &str = "you may not set both include and exclude tables";

/// Column selection for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnSelection {
    Include(Vec<String>),
    Exclude(Vec<String>),
}

/// Table selection for the whole data set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum TableSelection {
    #[default]
    All,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl TableSelection {
    fn keeps(&self, table_name: &str) -> bool {
        match self {
            TableSelection::All => true,
            TableSelection::Include(names) => names.iter().any(|n| n == table_name),
            TableSelection::Exclude(names) => !names.iter().any(|n| n == table_name),
        }
    }
}

/// Builder for a [`DataSetFilter`].
///
/// A scope (the table list, or the column list of one table) takes either an
/// include list or an exclude list. Asking for both is an error reported by
/// [`DataSetFilterBuilder::build`]. Repeated calls for the same list extend it.
pub struct DataSetFilterBuilder<'a> {
    inner: &'a dyn DataSet,
    tables: TableSelection,
    columns: HashMap<String, ColumnSelection>,
    conflicts: Vec<String>,
}

impl<'a> DataSetFilterBuilder<'a> {
    /// Keeps only these tables.
    pub fn include_tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into);
        self.tables = match std::mem::take(&mut self.tables) {
            TableSelection::All => TableSelection::Include(names.collect()),
            TableSelection::Include(mut existing) => {
                existing.extend(names);
                TableSelection::Include(existing)
            }
            exclude @ TableSelection::Exclude(_) => {
                self.conflicts.push(TABLE_CONFLICT.to_string());
                exclude
            }
        };
        self
    }

    /// Hides these tables.
    pub fn exclude_tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into);
        self.tables = match std::mem::take(&mut self.tables) {
            TableSelection::All => TableSelection::Exclude(names.collect()),
            TableSelection::Exclude(mut existing) => {
                existing.extend(names);
                TableSelection::Exclude(existing)
            }
            include @ TableSelection::Include(_) => {
                self.conflicts.push(TABLE_CONFLICT.to_string());
                include
            }
        };
        self
    }

    /// Keeps only these columns of `table`.
    pub fn include_columns<I, S>(self, table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        self.select_columns(table.into(), ColumnSelection::Include(columns))
    }

    /// Hides these columns of `table`.
    pub fn exclude_columns<I, S>(self, table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        self.select_columns(table.into(), ColumnSelection::Exclude(columns))
    }

    fn select_columns(mut self, table: String, selection: ColumnSelection) -> Self {
        match self.columns.entry(table) {
            Entry::Vacant(slot) => {
                slot.insert(selection);
            }
            Entry::Occupied(mut slot) => {
                let table = slot.key().clone();
                match (slot.get_mut(), selection) {
                    (ColumnSelection::Include(existing), ColumnSelection::Include(more))
                    | (ColumnSelection::Exclude(existing), ColumnSelection::Exclude(more)) => {
                        existing.extend(more);
                    }
                    _ => self.conflicts.push(format!(
                        "you may not set both include and exclude columns for table '{}'",
                        table
                    )),
                }
            }
        }
        self
    }

    /// Builds the filtered view.
    ///
    /// # Errors
    ///
    /// `InvalidFilter` if a scope was given both include and exclude lists.
    pub fn build(self) -> Result<DataSetFilter<'a>> {
        if let Some(conflict) = self.conflicts.into_iter().next() {
            return Err(DataSetError::InvalidFilter(conflict));
        }

        let tables = self
            .inner
            .iter()
            .filter(|table| self.tables.keeps(table.table_name()))
            .map(|table| FilteredTable::new(table, self.columns.get(table.table_name())))
            .collect();

        Ok(DataSetFilter { tables })
    }
}

/// A data set showing a subset of another data set's tables and columns.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{DataSet, DataSetFilter, DefaultDataSet, TableBuilder};
///
/// let actual = DefaultDataSet::new()
///     .with_table(TableBuilder::new("users").columns(["id", "created_at"]).values(vec![1.into(), "2024-01-01".into()]).build())
///     .with_table(TableBuilder::new("audit_log").columns(["id"]).build());
///
/// let filtered = DataSetFilter::builder(&actual)
///     .exclude_tables(["audit_log"])
///     .exclude_columns("users", ["created_at"])
///     .build()
///     .unwrap();
///
/// let expected = DefaultDataSet::new()
///     .with_table(TableBuilder::new("users").columns(["id"]).values(vec![1.into()]).build());
///
/// assert!(filtered.matches(&expected));
/// ```
#[derive(Debug)]
pub struct DataSetFilter<'a> {
    tables: Vec<FilteredTable<'a>>,
}

impl<'a> DataSetFilter<'a> {
    /// Starts a filter over `inner`. Without further calls every table and
    /// column stays visible.
    pub fn builder(inner: &'a dyn DataSet) -> DataSetFilterBuilder<'a> {
        DataSetFilterBuilder {
            inner,
            tables: TableSelection::All,
            columns: HashMap::new(),
            conflicts: Vec::new(),
        }
    }
}

impl DataSet for DataSetFilter<'_> {
    fn create_iterator(&self, reverse: bool) -> TableIterator<'_> {
        TableIterator::ordered(self.tables.iter().map(|t| t as &dyn Table), reverse)
    }
}

/// A table exposing a subset of another table's columns.
pub struct FilteredTable<'a> {
    inner: &'a dyn Table,
    meta: DefaultTableMetaData,
}

impl<'a> FilteredTable<'a> {
    fn new(inner: &'a dyn Table, selection: Option<&ColumnSelection>) -> Self {
        let source = inner.meta_data();
        let columns: Vec<String> = match selection {
            None => source.columns().to_vec(),
            Some(ColumnSelection::Include(keep)) => {
                let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();
                source
                    .columns()
                    .iter()
                    .filter(|c| keep.contains(c.as_str()))
                    .cloned()
                    .collect()
            }
            Some(ColumnSelection::Exclude(drop)) => {
                let drop: HashSet<&str> = drop.iter().map(String::as_str).collect();
                source
                    .columns()
                    .iter()
                    .filter(|c| !drop.contains(c.as_str()))
                    .cloned()
                    .collect()
            }
        };
        let primary_keys = source
            .primary_keys()
            .iter()
            .filter(|k| columns.contains(*k))
            .cloned()
            .collect::<Vec<_>>();

        Self {
            inner,
            meta: DefaultTableMetaData::new(source.table_name(), columns)
                .with_primary_keys(primary_keys),
        }
    }
}

impl Table for FilteredTable<'_> {
    fn meta_data(&self) -> &dyn TableMetaData {
        &self.meta
    }

    fn row_count(&self) -> usize {
        self.inner.row_count()
    }

    fn value(&self, row: usize, column: &str) -> Result<DataValue> {
        if !self.meta.has_column(column) {
            return Err(DataSetError::column_not_found(&self.meta.table_name, column));
        }
        self.inner.value(row, column)
    }
}

impl std::fmt::Debug for FilteredTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredTable")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

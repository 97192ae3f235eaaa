//! The fixture document shape shared by every format.
//!
//! ```yaml
//! users:
//!   - id: 1
//!     name: alice
//!   - id: 2
//!     name: bob
//! orders: []
//! ```
//!
//! Each top-level key is a table; its rows are mappings from column to
//! value. A table's columns are the union of its row keys in first-seen
//! order, and a key missing from a row reads as null. An empty list or a
//! null value is a table without rows (and therefore without columns).

use crate::Result;
use fixtures_core::{DataRow, DataSet, DefaultDataSet, DefaultTable, DefaultTableMetaData, Table};
use indexmap::IndexMap;

/// A parsed fixture: table name to optional row list, in document order.
pub type FixtureDocument = IndexMap<String, Option<Vec<DataRow>>>;

/// Converts a fixture document into an in-memory data set.
pub fn into_data_set(document: FixtureDocument) -> Result<DefaultDataSet> {
    let mut data_set = DefaultDataSet::new();

    for (table_name, rows) in document {
        let rows = rows.unwrap_or_default();

        let mut columns: Vec<String> = Vec::new();
        for column in rows.iter().flat_map(|row| row.keys()) {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }

        let mut table = DefaultTable::new(DefaultTableMetaData::new(table_name, columns));
        table.add_rows(rows)?;
        data_set.add_table(table);
    }

    Ok(data_set)
}

/// Converts any data set into a fixture document.
///
/// Tables sharing a name are written as one entry holding the rows of all
/// of them. Column names of tables without rows are not representable.
pub fn from_data_set(data_set: &dyn DataSet) -> Result<FixtureDocument> {
    let mut document = FixtureDocument::new();

    for table in data_set.iter() {
        let rows = document
            .entry(table.table_name().to_string())
            .or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new);

        for row in 0..table.row_count() {
            rows.push(table.row(row)?);
        }
    }

    Ok(document)
}

//! Assertion helpers for test suites.

use crate::{AssertionError, CompareContext, DataSetComparator};
use fixtures_core::{DataRow, DataSet, Table};

/// Asserts that `actual` holds the same tables as `expected`.
///
/// Returns the first failure, with both table renderings attached.
pub fn assert_data_sets_equal(
    expected: &dyn DataSet,
    actual: &dyn DataSet,
) -> Result<(), AssertionError> {
    let context = CompareContext::new()
        .with_fail_fast(true)
        .with_render_tables(true);
    DataSetComparator::new(context)
        .compare(expected, actual)
        .into_result()
}

/// Asserts that two tables have the same content.
pub fn assert_tables_equal(expected: &dyn Table, actual: &dyn Table) -> Result<(), AssertionError> {
    let context = CompareContext::new().with_render_tables(true);
    DataSetComparator::new(context)
        .compare_tables(expected, actual)
        .into_result()
}

/// Asserts that some row of `table` holds the given column values.
pub fn assert_table_contains_row(table: &dyn Table, row: &DataRow) -> Result<(), AssertionError> {
    if table.contains_row(row) {
        return Ok(());
    }

    let rendered: Vec<String> = row
        .iter()
        .map(|(column, value)| format!("{}: {}", column, value))
        .collect();

    Err(AssertionError::RowNotFound {
        table: table.table_name().to_string(),
        row: format!("{{{}}}", rendered.join(", ")),
    })
}

/// Panics unless two data sets match.
///
/// ```rust
/// use fixtures_assert::assert_data_sets_match;
/// use fixtures_core::{DataSetBuilder, TableBuilder};
///
/// let expected = DataSetBuilder::new()
///     .table(TableBuilder::new("users").row([("id", 1)]))
///     .build();
/// let actual = DataSetBuilder::new()
///     .table(TableBuilder::new("users").row([("id", "1")]))
///     .build();
///
/// assert_data_sets_match!(&expected, &actual);
/// ```
#[macro_export]
macro_rules! assert_data_sets_match {
    ($expected:expr, $actual:expr $(,)?) => {
        if let Err(e) = $crate::assert_data_sets_equal($expected, $actual) {
            panic!("{}", e);
        }
    };
}

/// Panics unless two tables match.
#[macro_export]
macro_rules! assert_tables_match {
    ($expected:expr, $actual:expr $(,)?) => {
        if let Err(e) = $crate::assert_tables_equal($expected, $actual) {
            panic!("{}", e);
        }
    };
}

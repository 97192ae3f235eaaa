//! Data set comparison with explained failures.
//!
//! The comparator follows the same two phases as `DataSet::matches`: the
//! sorted table names must agree, and only then are tables compared through
//! `Table::matches`. Where `matches` stops with `false`, the comparator goes
//! on to say why.

use crate::{AssertionError, CompareContext, MatchReport, MatchStats};
use fixtures_core::{DataSet, Table};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// Compares an expected data set with an actual one.
///
/// # Example
///
/// ```rust
/// use fixtures_assert::{CompareContext, DataSetComparator};
/// use fixtures_core::{DataSetBuilder, TableBuilder};
///
/// let expected = DataSetBuilder::new()
///     .table(TableBuilder::new("users").row([("id", 1)]))
///     .build();
/// let actual = DataSetBuilder::new()
///     .table(TableBuilder::new("users").row([("id", 2)]))
///     .build();
///
/// let comparator = DataSetComparator::new(CompareContext::new());
/// let report = comparator.compare(&expected, &actual);
///
/// assert!(!report.passed);
/// for failure in &report.failures {
///     println!("{}", failure);
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct DataSetComparator {
    context: CompareContext,
}

impl DataSetComparator {
    /// Creates a new comparator.
    pub fn new(context: CompareContext) -> Self {
        Self { context }
    }

    /// Returns the comparison options.
    pub fn context(&self) -> &CompareContext {
        &self.context
    }

    /// Compares two data sets.
    ///
    /// `report.passed` always equals `expected.matches(actual)`.
    pub fn compare(&self, expected: &dyn DataSet, actual: &dyn DataSet) -> MatchReport {
        let start = Instant::now();
        let mut report = MatchReport::success();

        let mut expected_names = expected.table_names();
        let mut actual_names = actual.table_names();
        expected_names.sort();
        actual_names.sort();

        report.stats = MatchStats {
            expected_tables: expected_names.len(),
            actual_tables: actual_names.len(),
            ..MatchStats::default()
        };

        if expected_names != actual_names {
            let (missing, unexpected) = name_difference(&expected_names, &actual_names);
            debug!("Table names differ: missing {:?}, unexpected {:?}", missing, unexpected);
            report.add_failure(AssertionError::TableSetMismatch {
                missing,
                unexpected,
            });
            return self.finish(report, start);
        }

        // Repeated names resolve to the same pair of tables.
        expected_names.dedup();

        for table_name in &expected_names {
            let (Some(expected_table), Some(actual_table)) =
                (expected.table(table_name), actual.table(table_name))
            else {
                continue;
            };

            report.stats.tables_compared += 1;
            report.stats.rows_compared += expected_table.row_count();

            if expected_table.matches(actual_table) {
                debug!("Table '{}' matches", table_name);
                continue;
            }

            debug!("Table '{}' does not match", table_name);
            report.add_failure(self.table_failure(expected_table, actual_table));

            if self.context.fail_fast {
                break;
            }
        }

        self.finish(report, start)
    }

    /// Compares two tables.
    pub fn compare_tables(&self, expected: &dyn Table, actual: &dyn Table) -> MatchReport {
        let start = Instant::now();
        let mut report = MatchReport::success();
        report.stats = MatchStats {
            expected_tables: 1,
            actual_tables: 1,
            tables_compared: 1,
            rows_compared: expected.row_count(),
            duration_ms: 0,
        };

        if !expected.matches(actual) {
            report.add_failure(self.table_failure(expected, actual));
        }

        self.finish(report, start)
    }

    fn table_failure(&self, expected: &dyn Table, actual: &dyn Table) -> AssertionError {
        let details = if self.context.render_tables {
            format!(
                "\nExpected:\n{}\nActual:\n{}",
                expected.render(),
                actual.render()
            )
        } else {
            String::new()
        };

        AssertionError::TableMismatch {
            table: expected.table_name().to_string(),
            reason: explain_mismatch(expected, actual),
            details,
        }
    }

    fn finish(&self, mut report: MatchReport, start: Instant) -> MatchReport {
        report.stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Compared {} tables: {}",
            report.stats.tables_compared,
            if report.passed { "match" } else { "mismatch" }
        );
        report
    }
}

/// Names present on one side only, counting repeated names.
fn name_difference(expected: &[String], actual: &[String]) -> (Vec<String>, Vec<String>) {
    let mut balance: BTreeMap<&str, i64> = BTreeMap::new();
    for name in expected {
        *balance.entry(name).or_default() += 1;
    }
    for name in actual {
        *balance.entry(name).or_default() -= 1;
    }

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for (name, count) in balance {
        for _ in 0..count.max(0) {
            missing.push(name.to_string());
        }
        for _ in 0..(-count).max(0) {
            unexpected.push(name.to_string());
        }
    }
    (missing, unexpected)
}

/// Describes the first difference between two tables.
fn explain_mismatch(expected: &dyn Table, actual: &dyn Table) -> String {
    let expected_meta = expected.meta_data();
    let actual_meta = actual.meta_data();

    if expected_meta.table_name() != actual_meta.table_name() {
        return format!(
            "table name differs (expected '{}', found '{}')",
            expected_meta.table_name(),
            actual_meta.table_name()
        );
    }

    if expected_meta.columns() != actual_meta.columns() {
        return format!(
            "columns differ (expected [{}], found [{}])",
            expected_meta.columns().join(", "),
            actual_meta.columns().join(", ")
        );
    }

    if expected.row_count() != actual.row_count() {
        return format!(
            "expected {} rows, found {}",
            expected.row_count(),
            actual.row_count()
        );
    }

    for row in 0..expected.row_count() {
        for column in expected_meta.columns() {
            match (expected.value(row, column), actual.value(row, column)) {
                (Ok(e), Ok(a)) if !e.loosely_eq(&a) => {
                    return format!(
                        "row {}, column '{}': expected {}, found {}",
                        row, column, e, a
                    );
                }
                (Err(e), _) | (_, Err(e)) => {
                    return format!("row {}, column '{}' cannot be read: {}", row, column, e);
                }
                _ => {}
            }
        }
    }

    "content differs".to_string()
}

//! Value substitution over a data set.

use crate::{DataSet, DataValue, Result, Table, TableIterator, TableMetaData};
use std::fmt;

/// Substitution rules applied to every cell read through a
/// [`ReplacementDataSet`].
///
/// Full replacements swap a whole value; they are checked first, in the
/// order they were added. Substring replacements then rewrite string values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replacements {
    full: Vec<(DataValue, DataValue)>,
    sub_strings: Vec<(String, String)>,
}

impl Replacements {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any cell strictly equal to `value` with `replacement`.
    pub fn full(mut self, value: impl Into<DataValue>, replacement: impl Into<DataValue>) -> Self {
        self.full.push((value.into(), replacement.into()));
        self
    }

    /// Replaces every occurrence of `pattern` inside string cells.
    pub fn sub_string(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.sub_strings.push((pattern.into(), replacement.into()));
        self
    }

    /// Applies the rules to one value.
    pub fn apply(&self, value: DataValue) -> DataValue {
        if let Some((_, replacement)) = self.full.iter().find(|(from, _)| *from == value) {
            return replacement.clone();
        }
        match value {
            DataValue::String(mut s) => {
                for (pattern, replacement) in &self.sub_strings {
                    if !pattern.is_empty() {
                        s = s.replace(pattern.as_str(), replacement);
                    }
                }
                DataValue::String(s)
            }
            other => other,
        }
    }
}

/// A data set whose cell values pass through [`Replacements`].
///
/// The usual use is a fixture format without a null literal, where a marker
/// string stands in for null.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{DataSet, DataValue, DefaultDataSet, ReplacementDataSet, Replacements, TableBuilder};
///
/// let fixture = DefaultDataSet::new()
///     .with_table(TableBuilder::new("users").columns(["id", "email"]).values(vec![1.into(), "[NULL]".into()]).build());
///
/// let replaced = ReplacementDataSet::new(&fixture, Replacements::new().full("[NULL]", DataValue::Null));
///
/// let users = replaced.table("users").unwrap();
/// assert_eq!(users.value(0, "email").unwrap(), DataValue::Null);
/// ```
pub struct ReplacementDataSet<'a> {
    tables: Vec<ReplacementTable<'a>>,
}

impl<'a> ReplacementDataSet<'a> {
    /// Wraps every table of `inner` with the given rules.
    pub fn new(inner: &'a dyn DataSet, replacements: Replacements) -> Self {
        let tables = inner
            .iter()
            .map(|table| ReplacementTable {
                inner: table,
                replacements: replacements.clone(),
            })
            .collect();
        Self { tables }
    }
}

impl DataSet for ReplacementDataSet<'_> {
    fn create_iterator(&self, reverse: bool) -> TableIterator<'_> {
        TableIterator::ordered(self.tables.iter().map(|t| t as &dyn Table), reverse)
    }
}

impl fmt::Debug for ReplacementDataSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplacementDataSet")
            .field("tables", &self.table_names())
            .finish()
    }
}

/// A table whose values pass through [`Replacements`].
pub struct ReplacementTable<'a> {
    inner: &'a dyn Table,
    replacements: Replacements,
}

impl Table for ReplacementTable<'_> {
    fn meta_data(&self) -> &dyn TableMetaData {
        self.inner.meta_data()
    }

    fn row_count(&self) -> usize {
        self.inner.row_count()
    }

    fn value(&self, row: usize, column: &str) -> Result<DataValue> {
        Ok(self.replacements.apply(self.inner.value(row, column)?))
    }
}

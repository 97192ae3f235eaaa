//! Comparison options and results.

use crate::AssertionError;

/// Options for a data set comparison.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompareContext {
    /// Stop at the first failing table
    pub fail_fast: bool,

    /// Attach the rendering of both tables to every table mismatch
    pub render_tables: bool,
}

impl CompareContext {
    /// Creates a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets fail-fast mode.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Sets whether mismatches carry table renderings.
    pub fn with_render_tables(mut self, render_tables: bool) -> Self {
        self.render_tables = render_tables;
        self
    }
}

/// Result of comparing an expected data set with an actual one.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// Whether the data sets match
    pub passed: bool,

    /// Failures found, in table name order
    pub failures: Vec<AssertionError>,

    /// Comparison statistics
    pub stats: MatchStats,
}

/// Statistics about a comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    /// Number of expected tables
    pub expected_tables: usize,

    /// Number of actual tables
    pub actual_tables: usize,

    /// Number of table pairs compared
    pub tables_compared: usize,

    /// Number of expected rows in the compared tables
    pub rows_compared: usize,

    /// Comparison duration in milliseconds
    pub duration_ms: u64,
}

impl MatchReport {
    /// Creates a new successful report.
    pub fn success() -> Self {
        Self {
            passed: true,
            failures: Vec::new(),
            stats: MatchStats::default(),
        }
    }

    /// Adds a failure to the report.
    pub fn add_failure(&mut self, failure: AssertionError) {
        self.failures.push(failure);
        self.passed = false;
    }

    /// Converts the report into the first failure, if any.
    pub fn into_result(self) -> Result<(), AssertionError> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let context = CompareContext::new()
            .with_fail_fast(true)
            .with_render_tables(true);
        assert!(context.fail_fast);
        assert!(context.render_tables);
        assert_eq!(CompareContext::new(), CompareContext::default());
    }

    #[test]
    fn test_add_failure_marks_report_failed() {
        let mut report = MatchReport::success();
        assert!(report.passed);

        report.add_failure(AssertionError::table_mismatch("users", "content differs"));
        assert!(!report.passed);
        assert!(report.into_result().is_err());
        assert!(MatchReport::success().into_result().is_ok());
    }
}

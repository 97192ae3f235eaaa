use anyhow::{Context, Result};
use fixtures_assert::{CompareContext, DataSetComparator};
use fixtures_core::DataSet;
use fixtures_parser::load;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(expected_path: &str, actual_path: &str, format: &str, fail_fast: bool) -> Result<()> {
    info!("Comparing {} with {}", expected_path, actual_path);
    info!("Fail fast: {}", fail_fast);

    let expected = load(Path::new(expected_path))
        .with_context(|| format!("Failed to load expected fixture: {}", expected_path))?;
    let actual = load(Path::new(actual_path))
        .with_context(|| format!("Failed to load actual fixture: {}", actual_path))?;

    if format != "json" {
        output::print_info(&format!(
            "Expected tables: {}",
            expected.table_names().join(", ")
        ));
        output::print_info(&format!(
            "Actual tables:   {}",
            actual.table_names().join(", ")
        ));
    }

    let context = CompareContext::new().with_fail_fast(fail_fast);
    let report = DataSetComparator::new(context).compare(&*expected, &*actual);

    output::print_match_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}

use anyhow::{Context, Result};
use fixtures_core::{DataSet, Table, TableMetaData};
use fixtures_parser::load;
use std::path::Path;
use tracing::info;

pub fn execute(fixture_path: &str, reverse: bool) -> Result<()> {
    info!("Listing tables of {}", fixture_path);

    let data_set = load(Path::new(fixture_path))
        .with_context(|| format!("Failed to load fixture: {}", fixture_path))?;

    let tables = if reverse {
        data_set.reverse_iter()
    } else {
        data_set.iter()
    };

    for table in tables {
        println!(
            "{} ({} columns, {} rows)",
            table.table_name(),
            table.meta_data().columns().len(),
            table.row_count()
        );
    }

    Ok(())
}

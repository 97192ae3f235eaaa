use anyhow::{Context, Result, anyhow};
use fixtures_core::{DataSet, DefaultDataSet, DefaultTable};
use fixtures_parser::{load, to_json, to_yaml};
use std::path::Path;
use tracing::info;

pub fn execute(fixture_path: &str, table: Option<&str>, format: &str) -> Result<()> {
    info!("Showing {}", fixture_path);

    let data_set = load(Path::new(fixture_path))
        .with_context(|| format!("Failed to load fixture: {}", fixture_path))?;

    let selected: Box<dyn DataSet> = match table {
        Some(name) => {
            let table = data_set
                .table(name)
                .ok_or_else(|| anyhow!("Table '{}' not found in {}", name, fixture_path))?;
            let copy = DefaultTable::from_table(table)
                .with_context(|| format!("Failed to read table '{}'", name))?;
            Box::new(DefaultDataSet::new().with_table(copy))
        }
        None => data_set,
    };

    match format {
        "yaml" => print!("{}", to_yaml(&*selected).context("Failed to write YAML")?),
        "json" => println!("{}", to_json(&*selected).context("Failed to write JSON")?),
        _ => print!("{}", selected.to_display_string()),
    }

    Ok(())
}

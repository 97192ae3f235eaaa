//! Parser for data set fixtures (YAML/JSON/TOML formats).
//!
//! This crate loads fixture documents into [`DefaultDataSet`]s and writes
//! data sets back out. See [`document`] for the document shape.
//!
//! # Example
//!
//! ```rust
//! use fixtures_core::DataSet;
//! use fixtures_parser::parse_yaml;
//!
//! let yaml = r#"
//! users:
//!   - id: 1
//!     name: alice
//! orders: []
//! "#;
//!
//! let data_set = parse_yaml(yaml).expect("Failed to parse fixture");
//! assert_eq!(data_set.table_names(), vec!["users", "orders"]);
//! ```

pub mod document;

pub use document::{FixtureDocument, from_data_set, into_data_set};

use fixtures_core::{CompositeDataSet, DataSet, DataSetError, DefaultDataSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during fixture parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The document does not describe valid tables
    #[error("Invalid fixture: {0}")]
    DataSet(#[from] DataSetError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported fixture file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// JSON format (.json)
    Json,
    /// TOML format (.toml)
    Toml,
}

/// Parse a fixture from a YAML string.
pub fn parse_yaml(content: &str) -> Result<DefaultDataSet> {
    let document: FixtureDocument = serde_yaml_ng::from_str(content)?;
    into_data_set(document)
}

/// Parse a fixture from a JSON string.
///
/// # Example
///
/// ```rust
/// use fixtures_core::{DataSet, DataValue, Table};
/// use fixtures_parser::parse_json;
///
/// let data_set = parse_json(r#"{"users": [{"id": 1, "email": null}]}"#).unwrap();
/// let users = data_set.table("users").unwrap();
/// assert_eq!(users.value(0, "email").unwrap(), DataValue::Null);
/// ```
pub fn parse_json(content: &str) -> Result<DefaultDataSet> {
    let document: FixtureDocument = serde_json::from_str(content)?;
    into_data_set(document)
}

/// Parse a fixture from a TOML string.
///
/// Tables are arrays of tables (`[[users]]`). An empty table is written as
/// `orders = []` before the first array header. TOML has no null.
///
/// # Example
///
/// ```rust
/// use fixtures_core::DataSet;
/// use fixtures_parser::parse_toml;
///
/// let toml = r#"
/// orders = []
///
/// [[users]]
/// id = 1
/// name = "alice"
/// "#;
///
/// let data_set = parse_toml(toml).unwrap();
/// assert!(data_set.table("users").is_some());
/// assert!(data_set.table("orders").is_some());
/// ```
pub fn parse_toml(content: &str) -> Result<DefaultDataSet> {
    let document: FixtureDocument =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    into_data_set(document)
}

/// Parse a fixture from a string in the given format.
pub fn parse_str(content: &str, format: FixtureFormat) -> Result<DefaultDataSet> {
    match format {
        FixtureFormat::Yaml => parse_yaml(content),
        FixtureFormat::Json => parse_json(content),
        FixtureFormat::Toml => parse_toml(content),
    }
}

/// Detect the fixture format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `FixtureFormat::Yaml`
/// * `.json` → `FixtureFormat::Json`
/// * `.toml` → `FixtureFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FixtureFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FixtureFormat::Yaml),
        "json" => Ok(FixtureFormat::Json),
        "toml" => Ok(FixtureFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a fixture from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use fixtures_core::DataSet;
/// use fixtures_parser::parse_file;
/// use std::path::Path;
///
/// let data_set = parse_file(Path::new("tests/fixtures/expected.yml")).unwrap();
/// println!("Loaded tables: {:?}", data_set.table_names());
/// ```
pub fn parse_file(path: &Path) -> Result<DefaultDataSet> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    info!("Loading {:?} fixture from {}", format, path.display());
    parse_str(&content, format)
}

/// Parse every fixture file of a directory into one data set.
///
/// Files are read in file-name order and merged as by
/// [`CompositeDataSet::add_data_set`]: a table appearing in several files
/// collects the rows of all of them, and an empty declaration such as
/// `users: []` defers to the file that gives the table rows. Files without
/// a supported extension and subdirectories are skipped.
pub fn parse_dir(path: &Path) -> Result<CompositeDataSet> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_file() && detect_format(&entry_path).is_ok() {
            files.push(entry_path);
        } else {
            debug!("Skipping {}", entry_path.display());
        }
    }
    files.sort();

    let mut composite = CompositeDataSet::new();
    for file in &files {
        let data_set = parse_file(file)?;
        composite.add_data_set(&data_set)?;
    }

    info!(
        "Loaded {} fixture files from {}",
        files.len(),
        path.display()
    );
    Ok(composite)
}

/// Load a fixture from a file or a directory of files.
pub fn load(path: &Path) -> Result<Box<dyn DataSet>> {
    if path.is_dir() {
        Ok(Box::new(parse_dir(path)?))
    } else {
        Ok(Box::new(parse_file(path)?))
    }
}

/// Write a data set as a YAML fixture.
pub fn to_yaml(data_set: &dyn DataSet) -> Result<String> {
    Ok(serde_yaml_ng::to_string(&from_data_set(data_set)?)?)
}

/// Write a data set as a pretty-printed JSON fixture.
pub fn to_json(data_set: &dyn DataSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&from_data_set(data_set)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures_core::{DataValue, Table, TableBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_yaml() {
        let yaml = r#"
users:
  - id: 1
    name: alice
    active: true
  - id: 2
    name: bob
    score: 4.5
orders:
"#;

        let data_set = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(data_set.table_names(), vec!["users", "orders"]);

        let users = data_set.table("users").unwrap();
        assert_eq!(
            users.meta_data().columns(),
            ["id", "name", "active", "score"]
        );
        assert_eq!(users.row_count(), 2);
        assert_eq!(users.value(0, "active").unwrap(), DataValue::Bool(true));
        assert_eq!(users.value(0, "score").unwrap(), DataValue::Null);
        assert_eq!(users.value(1, "score").unwrap(), DataValue::Float(4.5));

        let orders = data_set.table("orders").unwrap();
        assert_eq!(orders.row_count(), 0);
        assert!(orders.meta_data().columns().is_empty());
    }

    #[test]
    fn test_parse_yaml_null_values() {
        let yaml = r#"
users:
  - id: 1
    email: ~
  - id: 2
    email: null
"#;

        let data_set = parse_yaml(yaml).unwrap();
        let users = data_set.table("users").unwrap();
        assert_eq!(users.value(0, "email").unwrap(), DataValue::Null);
        assert_eq!(users.value(1, "email").unwrap(), DataValue::Null);
    }

    #[test]
    fn test_yaml_nan_cells_match_themselves() {
        let data_set = parse_yaml("measures:\n  - value: .nan\n").unwrap();
        let other = parse_yaml("measures:\n  - value: .NaN\n").unwrap();

        assert!(data_set.matches(&data_set));
        assert!(data_set.matches(&other));
        assert!(!data_set.matches(&parse_yaml("measures:\n  - value: 0.0\n").unwrap()));
    }

    #[test]
    fn test_parse_empty_yaml_document() {
        let data_set = parse_yaml("{}").unwrap();
        assert!(data_set.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let invalid_yaml = r#"
users: [{id: 1}
orders: []
"#;

        let result = parse_yaml(invalid_yaml);
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_yaml_rows_must_be_mappings() {
        let result = parse_yaml("users:\n  - 1\n  - 2\n");
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{
  "users": [{"id": 1, "name": "alice"}],
  "orders": []
}"#;

        let data_set = parse_json(json).expect("Failed to parse valid JSON");
        assert_eq!(data_set.table_names(), vec!["users", "orders"]);
        assert_eq!(
            data_set.table("users").unwrap().value(0, "name").unwrap(),
            DataValue::from("alice")
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_json(r#"{"users": [{"id": 1}"#);
        assert!(matches!(result.unwrap_err(), ParserError::JsonError(_)));
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
orders = []

[[users]]
id = 1
name = "alice"

[[users]]
id = 2
name = "bob"
"#;

        let data_set = parse_toml(toml).expect("Failed to parse valid TOML");
        let users = data_set.table("users").unwrap();
        assert_eq!(users.row_count(), 2);
        assert_eq!(users.value(1, "id").unwrap(), DataValue::Int(2));
        assert_eq!(data_set.table("orders").unwrap().row_count(), 0);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
[[users]
id = 1
"#;

        let result = parse_toml(invalid_toml);
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_same_fixture_in_every_format_matches() {
        let yaml = "users:\n  - id: 1\n    name: alice\n";
        let json = r#"{"users": [{"id": 1, "name": "alice"}]}"#;
        let toml = "[[users]]\nid = 1\nname = \"alice\"\n";

        let from_yaml = parse_yaml(yaml).unwrap();
        let from_json = parse_json(json).unwrap();
        let from_toml = parse_toml(toml).unwrap();

        assert!(from_yaml.matches(&from_json));
        assert!(from_json.matches(&from_toml));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("expected.yaml")).unwrap(),
            FixtureFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("expected.YML")).unwrap(),
            FixtureFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("expected.json")).unwrap(),
            FixtureFormat::Json
        );
        assert_eq!(
            detect_format(Path::new("expected.toml")).unwrap(),
            FixtureFormat::Toml
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("expected.csv"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("expected"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_write_yaml_and_read_back() {
        let original = fixtures_core::DataSetBuilder::new()
            .table(
                TableBuilder::new("users")
                    .columns(["id", "email"])
                    .values(vec![1.into(), DataValue::Null]),
            )
            .build();

        let yaml = to_yaml(&original).expect("Failed to serialize");
        assert!(yaml.contains("users:"));

        let parsed = parse_yaml(&yaml).expect("Failed to parse");
        assert!(parsed.matches(&original));
    }

    #[test]
    fn test_write_json_merges_duplicate_tables() {
        let data_set = fixtures_core::DataSetBuilder::new()
            .table(TableBuilder::new("t").row([("v", 1)]))
            .table(TableBuilder::new("t").row([("v", 2)]))
            .build();

        let document = from_data_set(&data_set).unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document["t"].as_ref().map(Vec::len), Some(2));

        let json = to_json(&data_set).unwrap();
        let parsed = parse_json(&json).unwrap();
        assert_eq!(parsed.table("t").unwrap().row_count(), 2);
    }
}

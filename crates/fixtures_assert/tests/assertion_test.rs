//! Comparison reports agree with `DataSet::matches` on parsed fixtures.

use fixtures_assert::{
    AssertionError, CompareContext, DataSetComparator, assert_data_sets_equal,
    assert_data_sets_match,
};
use fixtures_core::{DataSet, DataSetFilter, ReplacementDataSet, Replacements};
use fixtures_parser::{parse_json, parse_yaml};
use pretty_assertions::assert_eq;

const EXPECTED: &str = r#"
users:
  - id: 1
    name: alice
    active: true
  - id: 2
    name: bob
    active: false
orders:
  - id: 10
    user_id: 1
    total: 9.5
audit: []
"#;

fn fixtures() -> Vec<(&'static str, String)> {
    vec![
        ("identical", EXPECTED.to_string()),
        (
            "reordered tables",
            r#"{
                "audit": [],
                "orders": [{"id": 10, "user_id": 1, "total": 9.5}],
                "users": [
                    {"id": 1, "name": "alice", "active": true},
                    {"id": 2, "name": "bob", "active": false}
                ]
            }"#
            .to_string(),
        ),
        (
            "numeric strings",
            r#"{
                "users": [
                    {"id": "1", "name": "alice", "active": true},
                    {"id": "2", "name": "bob", "active": false}
                ],
                "orders": [{"id": 10, "user_id": 1, "total": "9.50"}],
                "audit": []
            }"#
            .to_string(),
        ),
        (
            "changed cell",
            EXPECTED.replace("name: bob", "name: carol"),
        ),
        (
            "reordered rows",
            r#"{
                "users": [
                    {"id": 2, "name": "bob", "active": false},
                    {"id": 1, "name": "alice", "active": true}
                ],
                "orders": [{"id": 10, "user_id": 1, "total": 9.5}],
                "audit": []
            }"#
            .to_string(),
        ),
        (
            "missing table",
            r#"{"users": [], "orders": []}"#.to_string(),
        ),
        (
            "extra table",
            format!("{}payments: []\n", EXPECTED),
        ),
    ]
}

fn parse(content: &str) -> fixtures_core::DefaultDataSet {
    if content.trim_start().starts_with('{') {
        parse_json(content).expect("Failed to parse JSON fixture")
    } else {
        parse_yaml(content).expect("Failed to parse YAML fixture")
    }
}

#[test]
fn test_report_verdict_equals_matches() {
    let expected = parse(EXPECTED);
    let comparator = DataSetComparator::default();

    for (label, content) in fixtures() {
        let actual = parse(&content);
        let report = comparator.compare(&expected, &actual);

        assert_eq!(
            report.passed,
            expected.matches(&actual),
            "verdicts disagree for '{}'",
            label
        );
        assert_eq!(report.passed, report.failures.is_empty(), "{}", label);
    }
}

#[test]
fn test_expected_verdicts() {
    let expected = parse(EXPECTED);
    let verdicts: Vec<(&str, bool)> = fixtures()
        .iter()
        .map(|(label, content)| (*label, expected.matches(&parse(content))))
        .collect();

    assert_eq!(
        verdicts,
        vec![
            ("identical", true),
            ("reordered tables", true),
            ("numeric strings", true),
            ("changed cell", false),
            ("reordered rows", false),
            ("missing table", false),
            ("extra table", false),
        ]
    );
}

#[test]
fn test_failures_explain_differences() {
    let expected = parse(EXPECTED);

    let changed = parse(&EXPECTED.replace("name: bob", "name: carol"));
    let err = assert_data_sets_equal(&expected, &changed).unwrap_err();
    assert!(
        err.to_string()
            .starts_with("Table 'users' does not match: row 1, column 'name': expected bob, found carol")
    );

    let missing = parse(r#"{"users": [], "orders": []}"#);
    assert_eq!(
        assert_data_sets_equal(&expected, &missing).unwrap_err(),
        AssertionError::TableSetMismatch {
            missing: vec!["audit".into()],
            unexpected: vec![],
        }
    );
}

#[test]
fn test_collects_every_failing_table() {
    let expected = parse(EXPECTED);
    let actual = parse(
        &EXPECTED
            .replace("name: bob", "name: carol")
            .replace("total: 9.5", "total: 12"),
    );

    let report = DataSetComparator::new(CompareContext::new()).compare(&expected, &actual);
    let tables: Vec<Option<&str>> = report.failures.iter().map(|f| f.table()).collect();

    assert_eq!(tables, vec![Some("orders"), Some("users")]);
    assert_eq!(report.stats.tables_compared, 3);
    assert_eq!(report.stats.rows_compared, 3);
}

#[test]
fn test_wrapped_data_sets_compare() {
    let expected = parse(EXPECTED);
    let actual = parse(&EXPECTED.replace("name: bob", "name: '[unknown]'"));

    let filtered_expected = DataSetFilter::builder(&expected)
        .exclude_columns("users", ["name"])
        .build()
        .expect("Failed to build filter");
    let filtered_actual = DataSetFilter::builder(&actual)
        .exclude_columns("users", ["name"])
        .build()
        .expect("Failed to build filter");
    assert_data_sets_match!(&filtered_expected, &filtered_actual);

    let replaced = ReplacementDataSet::new(&actual, Replacements::new().full("[unknown]", "bob"));
    assert_data_sets_match!(&expected, &replaced);
}

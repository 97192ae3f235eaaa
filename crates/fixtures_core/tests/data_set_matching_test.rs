//! Matching semantics of data sets.
//!
//! These tests pin down the behavior every data set shares through the
//! `DataSet` trait: order-independent matching, lookup by name, fresh
//! traversals, and the handling of repeated table names.

use fixtures_core::{
    DataSet, DataSetBuilder, DataValue, DefaultDataSet, DefaultTable, Table, TableBuilder,
    TableIterator,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn users(name: &str) -> TableBuilder {
    TableBuilder::new("users")
        .columns(["id", "name"])
        .values(vec![1.into(), name.into()])
}

fn orders() -> TableBuilder {
    TableBuilder::new("orders").columns(["id", "user_id"])
}

/// A data set that keeps its tables sorted by name, to check that the shared
/// algorithms only depend on `create_iterator`.
#[derive(Default)]
struct SortedDataSet {
    tables: BTreeMap<String, DefaultTable>,
}

impl SortedDataSet {
    fn with_table(mut self, table: DefaultTable) -> Self {
        self.tables.insert(table.table_name().to_string(), table);
        self
    }
}

impl DataSet for SortedDataSet {
    fn create_iterator(&self, reverse: bool) -> TableIterator<'_> {
        TableIterator::ordered(self.tables.values().map(|t| t as &dyn Table), reverse)
    }
}

#[test]
fn test_data_set_matches_itself() {
    let data_set = DataSetBuilder::new()
        .table(users("x"))
        .table(orders().values(vec![10.into(), 1.into()]))
        .build();

    assert!(data_set.matches(&data_set));
}

#[test]
fn test_matching_ignores_table_declaration_order() {
    let a = DataSetBuilder::new().table(users("x")).table(orders()).build();
    let b = DataSetBuilder::new().table(orders()).table(users("x")).build();

    assert!(a.matches(&b));
    assert!(b.matches(&a));
}

#[test]
fn test_missing_table_fails_match() {
    let a = DataSetBuilder::new().table(users("x")).table(orders()).build();
    let b = DataSetBuilder::new().table(users("x")).build();

    assert!(!a.matches(&b));
    assert!(!b.matches(&a));
}

#[test]
fn test_differing_cell_fails_match() {
    let a = DataSetBuilder::new().table(users("x")).build();
    let b = DataSetBuilder::new().table(users("y")).build();

    assert!(!a.matches(&b));
    assert!(!b.matches(&a));
}

#[test]
fn test_empty_data_sets_match() {
    assert!(DefaultDataSet::new().matches(&DefaultDataSet::new()));
    assert!(DefaultDataSet::new().matches(&SortedDataSet::default()));
}

#[test]
fn test_empty_does_not_match_data_set_with_empty_table() {
    let with_empty_table = DataSetBuilder::new().table(orders()).build();
    assert!(!DefaultDataSet::new().matches(&with_empty_table));
}

#[test]
fn test_matching_across_storage_strategies() {
    let default = DataSetBuilder::new().table(users("x")).table(orders()).build();
    let sorted = SortedDataSet::default()
        .with_table(users("x").build())
        .with_table(orders().build());

    assert_eq!(sorted.table_names(), vec!["orders", "users"]);
    assert!(default.matches(&sorted));
    assert!(sorted.matches(&default));
}

#[test]
fn test_forward_and_reverse_name_sets_agree() {
    let data_set = DataSetBuilder::new()
        .table(users("x"))
        .table(orders())
        .empty_table("payments", ["id"])
        .build();

    let mut forward = data_set.table_names();
    let mut reverse: Vec<String> = data_set
        .reverse_iter()
        .map(|t| t.table_name().to_string())
        .collect();

    assert_eq!(reverse, vec!["payments", "orders", "users"]);

    forward.sort();
    reverse.sort();
    assert_eq!(forward, reverse);
}

#[test]
fn test_lookup_of_unknown_table_is_absent() {
    let data_set = DataSetBuilder::new().table(users("x")).build();

    assert!(data_set.table("orders").is_none());
    assert!(data_set.table_meta_data("orders").is_none());
    assert!(data_set.table("Users").is_none(), "lookup is case-sensitive");

    for name in data_set.table_names() {
        assert!(data_set.table(&name).is_some());
    }
}

#[test]
fn test_lookup_returns_table_and_metadata() {
    let data_set = DataSetBuilder::new().table(users("x")).build();

    let table = data_set.table("users").expect("users should exist");
    assert_eq!(table.value(0, "name").unwrap(), DataValue::from("x"));

    let meta = data_set.table_meta_data("users").unwrap();
    assert_eq!(meta.columns(), ["id", "name"]);
}

#[test]
fn test_display_string_concatenates_tables_in_order() {
    let users_table = users("x").build();
    let orders_table = orders().build();
    let expected = format!("{}{}", users_table.render(), orders_table.render());

    let data_set = DefaultDataSet::new()
        .with_table(users_table)
        .with_table(orders_table);

    assert_eq!(data_set.to_display_string(), expected);
    assert_eq!(data_set.to_string(), expected);
}

#[test]
fn test_duplicate_names_match_pairwise_content() {
    // Both sides hold two tables named `t` with pairwise equal content.
    let first = || TableBuilder::new("t").columns(["v"]).values(vec![1.into()]);
    let second = || TableBuilder::new("t").columns(["v"]).values(vec![2.into()]);

    let a = DataSetBuilder::new().table(first()).table(second()).build();
    let b = DataSetBuilder::new().table(first()).table(second()).build();

    assert_eq!(a.table_names(), vec!["t", "t"]);
    assert!(a.matches(&b));
}

#[test]
fn test_duplicate_names_compare_first_occurrence_only() {
    // Lookup by name always resolves to the first `t`, so the second pair is
    // never compared and a difference there goes unnoticed.
    let a = DataSetBuilder::new()
        .table(TableBuilder::new("t").columns(["v"]).values(vec![1.into()]))
        .table(TableBuilder::new("t").columns(["v"]).values(vec![2.into()]))
        .build();
    let b = DataSetBuilder::new()
        .table(TableBuilder::new("t").columns(["v"]).values(vec![1.into()]))
        .table(TableBuilder::new("t").columns(["v"]).values(vec![3.into()]))
        .build();

    assert!(a.matches(&b));

    // The first occurrences differing is detected.
    let c = DataSetBuilder::new()
        .table(TableBuilder::new("t").columns(["v"]).values(vec![3.into()]))
        .table(TableBuilder::new("t").columns(["v"]).values(vec![1.into()]))
        .build();
    assert!(!a.matches(&c));
}

#[test]
fn test_duplicate_name_multiplicity_must_agree() {
    let twice = DataSetBuilder::new()
        .table(orders())
        .table(orders())
        .build();
    let once = DataSetBuilder::new().table(orders()).build();

    assert!(!twice.matches(&once));
    assert!(!once.matches(&twice));
}

#[test]
fn test_matching_is_symmetric_for_a_set_of_fixtures() {
    let fixtures = vec![
        DefaultDataSet::new(),
        DataSetBuilder::new().table(users("x")).build(),
        DataSetBuilder::new().table(users("y")).build(),
        DataSetBuilder::new().table(users("x")).table(orders()).build(),
        DataSetBuilder::new().table(orders()).table(users("x")).build(),
        DataSetBuilder::new()
            .table(users("x"))
            .table(orders().values(vec!["10".into(), 1.into()]))
            .build(),
        DataSetBuilder::new()
            .table(users("x"))
            .table(orders().values(vec![10.into(), 1.into()]))
            .build(),
    ];

    for a in &fixtures {
        assert!(a.matches(a));
        for b in &fixtures {
            assert_eq!(a.matches(b), b.matches(a));
        }
    }

    // Numeric cells compare by number, so "10" matches 10.
    assert!(fixtures[5].matches(&fixtures[6]));
}

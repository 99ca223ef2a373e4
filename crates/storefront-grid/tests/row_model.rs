//! Tests for the derived row model pipeline.

use storefront_grid::row_model::compute;
use storefront_grid::{
    CellValue, ColumnDef, ColumnFilterKind, ColumnId, FacetMode, FilterValue, GridModes,
    NumericRange, Schema, TableState,
};

#[derive(Debug, Clone)]
struct Item {
    name: String,
    category: String,
    price: f64,
}

fn item(name: &str, category: &str, price: f64) -> Item {
    Item {
        name: name.to_string(),
        category: category.to_string(),
        price,
    }
}

fn schema(sample: &[Item]) -> Schema<Item> {
    Schema::new(
        vec![
            ColumnDef::new("name", "Name", |i: &Item| CellValue::from(i.name.clone())),
            ColumnDef::new("category", "Category", |i: &Item| {
                CellValue::from(i.category.clone())
            }),
            ColumnDef::new("price", "Price", |i: &Item| CellValue::from(i.price)),
        ],
        sample,
    )
    .expect("valid schema")
}

fn names(rows: &[Item], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&ix| rows[ix].name.clone()).collect()
}

fn col(id: &str) -> ColumnId {
    ColumnId::new(id)
}

#[test]
fn schema_rejects_duplicates_and_empty() {
    let rows = vec![item("a", "x", 1.0)];
    let dup = Schema::new(
        vec![
            ColumnDef::new("name", "Name", |i: &Item| CellValue::from(i.name.clone())),
            ColumnDef::new("name", "Name again", |i: &Item| {
                CellValue::from(i.name.clone())
            }),
        ],
        &rows,
    );
    assert!(dup.is_err());

    let empty: Result<Schema<Item>, _> = Schema::new(vec![], &rows);
    assert!(empty.is_err());
}

#[test]
fn filter_kind_inferred_from_first_observed_value() {
    let rows = vec![item("a", "x", 1.0)];
    let schema = schema(&rows);
    assert_eq!(
        schema.filter_kind(&col("name")),
        Some(ColumnFilterKind::Text)
    );
    assert_eq!(
        schema.filter_kind(&col("price")),
        Some(ColumnFilterKind::NumericRange)
    );
}

#[test]
fn pipeline_applies_filter_then_sort_then_page() {
    let rows = vec![
        item("walnut desk", "furniture", 499.0),
        item("oak desk", "furniture", 399.0),
        item("desk lamp", "lighting", 49.0),
        item("floor lamp", "lighting", 89.0),
        item("walnut shelf", "furniture", 199.0),
    ];
    let schema = schema(&rows);
    let mut state = TableState::default();
    state
        .filters
        .set(col("category"), FilterValue::Text("furniture".into()));
    state.sort.toggle(col("price"));

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(model.filtered_count, 3);
    assert_eq!(names(&rows, &model.page_rows), ["walnut shelf", "oak desk", "walnut desk"]
    );
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let rows = vec![
        item("c", "same", 1.0),
        item("a", "same", 1.0),
        item("b", "same", 1.0),
    ];
    let schema = schema(&rows);
    let mut state = TableState::default();
    state.sort.toggle(col("category"));

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    // All keys equal: source order must be preserved.
    assert_eq!(names(&rows, &model.page_rows), ["c", "a", "b"]);
}

#[test]
fn descending_reverses_only_the_comparison() {
    let rows = vec![
        item("cheap", "x", 10.0),
        item("mid", "x", 50.0),
        item("dear", "x", 90.0),
    ];
    let schema = schema(&rows);
    let mut state = TableState::default();
    state.sort.toggle(col("price"));
    state.sort.toggle(col("price"));

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(names(&rows, &model.page_rows), ["dear", "mid", "cheap"]);
}

#[test]
fn numeric_range_filter_is_inclusive() {
    let rows = vec![
        item("a", "x", 9.0),
        item("b", "x", 10.0),
        item("c", "x", 15.0),
        item("d", "x", 20.0),
        item("e", "x", 21.0),
    ];
    let schema = schema(&rows);
    let mut state = TableState::default();
    state.filters.set(
        col("price"),
        FilterValue::Range(NumericRange {
            min: Some(10.0),
            max: Some(20.0),
        }),
    );

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(names(&rows, &model.page_rows), ["b", "c", "d"]);

    // Omitting the max bound removes that side of the constraint.
    state.filters.set(
        col("price"),
        FilterValue::Range(NumericRange {
            min: Some(10.0),
            max: None,
        }),
    );
    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(names(&rows, &model.page_rows), ["b", "c", "d", "e"]);
}

#[test]
fn global_filter_uses_fuzzy_case_insensitive_matching() {
    let rows = vec![
        item("abcdef", "x", 1.0),
        item("xyz", "x", 2.0),
        item("ABCzz", "x", 3.0),
    ];
    let schema = schema(&rows);
    let mut state = TableState::default();
    state.global_filter = "abc".into();

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(names(&rows, &model.page_rows), ["abcdef", "ABCzz"]);
}

#[test]
fn twenty_three_rows_paginate_as_ten_ten_three() {
    let rows: Vec<Item> = (0..23)
        .map(|i| item(&format!("item-{i:02}"), "x", f64::from(i)))
        .collect();
    let schema = schema(&rows);
    let mut state = TableState::default();

    let first = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(first.page_count, 3);
    assert_eq!(first.page_rows.len(), 10);

    state.pagination.page_index = 2;
    let last = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(last.page_index, 2);
    assert_eq!(last.page_rows.len(), 3);
    assert_eq!(names(&rows, &last.page_rows), [
        "item-20", "item-21", "item-22"
    ]);
}

#[test]
fn out_of_range_page_index_clamps() {
    let rows: Vec<Item> = (0..23).map(|i| item("row", "x", f64::from(i))).collect();
    let schema = schema(&rows);
    let mut state = TableState::default();
    state.pagination.page_index = 99;

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert_eq!(model.page_index, 2);
    assert_eq!(model.page_rows.len(), 3);
}

#[test]
fn manual_mode_trusts_the_snapshot_and_external_total() {
    // The data source returned one 20-row page out of 57 items.
    let rows: Vec<Item> = (0..20).map(|i| item("row", "x", f64::from(i))).collect();
    let schema = schema(&rows);
    let mut state = TableState::with_page_size(20);
    state.pagination.page_index = 1;
    // Filters/sort that the source already applied must not re-run.
    state.sort.toggle(col("price"));
    state.sort.toggle(col("price"));

    let model = compute(&schema, &rows, &state, GridModes::manual(), Some(57));
    assert_eq!(model.page_rows.len(), 20);
    assert_eq!(model.filtered_count, 57);
    assert_eq!(model.page_count, 3);
    assert_eq!(model.page_index, 1);
    // Snapshot order untouched by the (manual) descending sort.
    assert_eq!(model.page_rows, (0..20).collect::<Vec<_>>());
}

#[test]
fn manual_pagination_only_keeps_local_filtering() {
    let rows = vec![
        item("walnut desk", "furniture", 499.0),
        item("desk lamp", "lighting", 49.0),
    ];
    let schema = schema(&rows);
    let mut state = TableState::default();
    state
        .filters
        .set(col("category"), FilterValue::Text("lighting".into()));

    let modes = GridModes {
        pagination: FacetMode::Manual,
        ..GridModes::client()
    };
    let model = compute(&schema, &rows, &state, modes, Some(2));
    // Filtering still runs locally; the page is whatever survived.
    assert_eq!(names(&rows, &model.page_rows), ["desk lamp"]);
    assert_eq!(model.filtered_count, 2);
}

#[test]
fn empty_data_yields_empty_model() {
    let sample = vec![item("a", "x", 1.0)];
    let schema = schema(&sample);
    let rows: Vec<Item> = Vec::new();
    let state = TableState::default();

    let model = compute(&schema, &rows, &state, GridModes::client(), None);
    assert!(model.page_rows.is_empty());
    assert_eq!(model.filtered_count, 0);
    assert_eq!(model.page_count, 0);
    assert_eq!(model.page_index, 0);
}

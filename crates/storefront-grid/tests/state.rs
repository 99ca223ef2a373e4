//! Tests for table-state facets.

use storefront_grid::{
    ColumnFilters, ColumnId, FilterValue, NumericRange, Pagination, SortDirection, SortSpec,
    TableState, VisibilitySet, page_count,
};

fn col(id: &str) -> ColumnId {
    ColumnId::new(id)
}

#[test]
fn sort_cycle_is_none_asc_desc_none() {
    let mut sort = SortSpec::default();
    assert_eq!(sort.direction_of(&col("name")), None);

    sort.toggle(col("name"));
    assert_eq!(sort.direction_of(&col("name")), Some(SortDirection::Ascending));

    sort.toggle(col("name"));
    assert_eq!(
        sort.direction_of(&col("name")),
        Some(SortDirection::Descending)
    );

    sort.toggle(col("name"));
    assert_eq!(sort.direction_of(&col("name")), None);
    assert!(sort.is_empty());
}

#[test]
fn toggling_another_column_replaces_the_sort() {
    let mut sort = SortSpec::default();
    sort.toggle(col("name"));
    sort.toggle(col("price"));
    assert_eq!(sort.direction_of(&col("name")), None);
    assert_eq!(
        sort.direction_of(&col("price")),
        Some(SortDirection::Ascending)
    );
    assert_eq!(sort.keys().len(), 1);
}

#[test]
fn push_key_appends_secondary_sort() {
    let mut sort = SortSpec::default();
    sort.toggle(col("category"));
    sort.push_key(col("name"), SortDirection::Descending);
    assert_eq!(sort.keys().len(), 2);
    // Re-pushing an existing column is a no-op.
    sort.push_key(col("category"), SortDirection::Descending);
    assert_eq!(sort.keys().len(), 2);
    assert_eq!(
        sort.direction_of(&col("category")),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn vacuous_filters_are_dropped() {
    let mut filters = ColumnFilters::default();
    filters.set(col("name"), FilterValue::Text("desk".into()));
    assert_eq!(filters.len(), 1);

    filters.set(col("name"), FilterValue::Text("   ".into()));
    assert!(filters.is_empty());

    filters.set(
        col("price"),
        FilterValue::Range(NumericRange {
            min: None,
            max: None,
        }),
    );
    assert!(filters.is_empty());
}

#[test]
fn without_excludes_only_the_named_column() {
    let mut filters = ColumnFilters::default();
    filters.set(col("name"), FilterValue::Text("desk".into()));
    filters.set(
        col("price"),
        FilterValue::Range(NumericRange {
            min: Some(10.0),
            max: None,
        }),
    );

    let others = filters.without(&col("price"));
    assert!(others.get(&col("price")).is_none());
    assert!(others.get(&col("name")).is_some());
    // The original set is untouched.
    assert_eq!(filters.len(), 2);
}

#[test]
fn numeric_range_bounds_are_inclusive_and_optional() {
    let range = NumericRange {
        min: Some(10.0),
        max: Some(20.0),
    };
    assert!(range.contains(10.0));
    assert!(range.contains(20.0));
    assert!(!range.contains(9.999));
    assert!(!range.contains(20.001));

    let min_only = NumericRange {
        min: Some(10.0),
        max: None,
    };
    assert!(min_only.contains(1e12));
    assert!(!min_only.contains(9.0));

    let max_only = NumericRange {
        min: None,
        max: Some(20.0),
    };
    assert!(max_only.contains(-1e12));
    assert!(!max_only.contains(21.0));
}

#[test]
fn visibility_defaults_to_visible() {
    let mut visibility = VisibilitySet::default();
    assert!(visibility.is_visible(&col("name")));

    assert!(!visibility.toggle(col("name")));
    assert!(!visibility.is_visible(&col("name")));

    assert!(visibility.toggle(col("name")));
    assert!(visibility.is_visible(&col("name")));
}

#[test]
fn page_count_is_ceil_division() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(23, 10), 3);
    // Manual mode scenario: 57 items, 20 per page.
    assert_eq!(page_count(57, 20), 3);
}

#[test]
fn default_pagination_uses_fixed_page_size() {
    let pagination = Pagination::default();
    assert_eq!(pagination.page_index, 0);
    assert_eq!(pagination.page_size, 10);

    // Zero page size is coerced to something usable.
    assert_eq!(Pagination::with_page_size(0).page_size, 1);
}

#[test]
fn table_state_round_trips_through_serde() {
    let mut state = TableState::with_page_size(25);
    state.sort.toggle(col("price"));
    state
        .filters
        .set(col("name"), FilterValue::Text("lamp".into()));
    state.global_filter = "walnut".into();
    state.visibility.toggle(col("sku"));

    let json = serde_json::to_string(&state).expect("serialize state");
    let round: TableState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);
}

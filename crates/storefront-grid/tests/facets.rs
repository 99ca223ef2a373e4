//! Tests for faceted filter suggestions.

use storefront_grid::{
    CellValue, ColumnDef, ColumnFilters, ColumnId, FACET_VALUE_LIMIT, FacetValues, FilterValue,
    Schema, facet_cache, facet_values,
};

#[derive(Debug, Clone)]
struct Item {
    name: String,
    category: String,
    price: Option<f64>,
}

fn item(name: &str, category: &str, price: Option<f64>) -> Item {
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
            ColumnDef::new("price", "Price", |i: &Item| {
                i.price.map_or(CellValue::Missing, CellValue::from)
            }),
        ],
        sample,
    )
    .expect("valid schema")
}

fn col(id: &str) -> ColumnId {
    ColumnId::new(id)
}

#[test]
fn text_facets_are_deduplicated_and_sorted() {
    let rows = vec![
        item("z", "lighting", None),
        item("a", "furniture", None),
        item("m", "lighting", None),
        item("k", "furniture", None),
    ];
    let schema = schema(&rows);
    let facets = facet_values(&schema, &rows, &ColumnFilters::default(), &col("category"));
    assert_eq!(
        facets,
        Some(FacetValues::Text(vec![
            "furniture".to_string(),
            "lighting".to_string()
        ]))
    );
}

#[test]
fn numeric_facets_report_observed_bounds() {
    let rows = vec![
        item("a", "x", Some(12.5)),
        item("b", "x", Some(3.0)),
        item("c", "x", None),
        item("d", "x", Some(99.0)),
    ];
    let schema = schema(&rows);
    let facets = facet_values(&schema, &rows, &ColumnFilters::default(), &col("price"));
    assert_eq!(facets, Some(FacetValues::Range { min: 3.0, max: 99.0 }));
}

#[test]
fn facet_reflects_other_columns_filters_but_not_its_own() {
    let rows = vec![
        item("desk", "furniture", Some(100.0)),
        item("lamp", "lighting", Some(40.0)),
        item("shelf", "furniture", Some(60.0)),
    ];
    let schema = schema(&rows);
    let mut filters = ColumnFilters::default();
    filters.set(col("category"), FilterValue::Text("furniture".into()));

    // Price bounds narrow to the furniture rows.
    let price = facet_values(&schema, &rows, &filters, &col("price"));
    assert_eq!(
        price,
        Some(FacetValues::Range {
            min: 60.0,
            max: 100.0
        })
    );

    // The category facet ignores its own filter, so both values stay
    // offered and the selection can still widen.
    let category = facet_values(&schema, &rows, &filters, &col("category"));
    assert_eq!(
        category,
        Some(FacetValues::Text(vec![
            "furniture".to_string(),
            "lighting".to_string()
        ]))
    );
}

#[test]
fn facet_value_list_is_capped() {
    let rows: Vec<Item> = (0..FACET_VALUE_LIMIT + 7)
        .map(|i| item(&format!("sku-{i:05}"), "x", None))
        .collect();
    let schema = schema(&rows);
    let facets = facet_values(&schema, &rows, &ColumnFilters::default(), &col("name"));
    match facets {
        Some(FacetValues::Text(values)) => assert_eq!(values.len(), FACET_VALUE_LIMIT),
        other => panic!("expected text facets, got {other:?}"),
    }
}

#[test]
fn cache_covers_every_filterable_column() {
    let rows = vec![item("desk", "furniture", Some(10.0))];
    let schema = schema(&rows);
    let cache = facet_cache(&schema, &rows, &ColumnFilters::default());
    assert_eq!(cache.len(), 3);
    assert!(matches!(
        cache.get(&col("price")),
        Some(FacetValues::Range { .. })
    ));
}

#[test]
fn all_missing_column_has_no_facets() {
    let rows = vec![item("desk", "furniture", None)];
    let schema = schema(&rows);
    // Kind inference saw no number, so this is a text column, and the
    // only cell is missing.
    let facets = facet_values(&schema, &rows, &ColumnFilters::default(), &col("price"));
    assert_eq!(facets, None);
}

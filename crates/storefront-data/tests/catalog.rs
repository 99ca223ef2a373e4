//! Tests for the in-memory catalog source.

use storefront_data::{CatalogSource, DataError, DataSource, PageRequest};
use storefront_grid::{
    CellValue, ColumnDef, ColumnId, FilterValue, GridError, Schema, SortDirection, SortKey,
};
use storefront_model::Product;

fn product_schema(sample: &[Product]) -> Schema<Product> {
    Schema::new(
        vec![
            ColumnDef::new("name", "Name", |p: &Product| CellValue::from(p.name.clone())),
            ColumnDef::new("category", "Category", |p: &Product| {
                CellValue::from(p.category.clone())
            }),
            ColumnDef::new("price", "Price", |p: &Product| CellValue::from(p.price)),
        ],
        sample,
    )
    .expect("valid schema")
}

fn catalog() -> CatalogSource<Product> {
    let products = storefront_data::seed::products().expect("seed products");
    let schema = product_schema(&products);
    CatalogSource::new(schema, products)
}

#[test]
fn fifty_seven_products_page_as_three_twenties() {
    let source = catalog();
    assert_eq!(source.len(), 57);

    let first = source
        .fetch_page(&PageRequest::first_page(20))
        .expect("first page");
    assert_eq!(first.rows.len(), 20);
    assert_eq!(first.total_count, 57);
    assert_eq!(first.total_count.div_ceil(20), 3);

    let mut request = PageRequest::first_page(20);
    request.page_index = 2;
    let last = source.fetch_page(&request).expect("last page");
    assert_eq!(last.rows.len(), 17);
}

#[test]
fn sorted_page_request_is_applied_before_slicing() {
    let source = catalog();
    let mut request = PageRequest::first_page(20);
    request.sort = Some(SortKey {
        column: ColumnId::new("price"),
        direction: SortDirection::Descending,
    });

    let page = source.fetch_page(&request).expect("sorted page");
    let prices: Vec<f64> = page.rows.iter().map(|p| p.price).collect();
    let mut expected = prices.clone();
    expected.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(prices, expected);
}

#[test]
fn filtered_page_request_reports_filtered_total() {
    let source = catalog();
    let mut request = PageRequest::first_page(20);
    request
        .filters
        .set(ColumnId::new("category"), FilterValue::Text("Lighting".into()));

    let page = source.fetch_page(&request).expect("filtered page");
    assert!(page.total_count < 57);
    assert!(page.rows.iter().all(|p| p.category == "Lighting"));
}

#[test]
fn request_naming_an_unknown_column_is_rejected() {
    let source = catalog();

    let mut request = PageRequest::first_page(20);
    request
        .filters
        .set(ColumnId::new("warehouse"), FilterValue::Text("x".into()));
    assert!(matches!(
        source.fetch_page(&request),
        Err(DataError::Schema(GridError::UnknownColumn(_)))
    ));

    let mut request = PageRequest::first_page(20);
    request.sort = Some(SortKey {
        column: ColumnId::new("warehouse"),
        direction: SortDirection::Ascending,
    });
    assert!(matches!(
        source.fetch_page(&request),
        Err(DataError::Schema(GridError::UnknownColumn(_)))
    ));
}

#[test]
fn zero_page_size_is_rejected() {
    let source = catalog();
    let request = PageRequest::first_page(0);
    assert!(matches!(
        source.fetch_page(&request),
        Err(DataError::InvalidPageSize)
    ));
}

#[test]
fn fetch_all_returns_the_whole_row_set() {
    let source = catalog();
    let all = source.fetch_all().expect("all rows");
    assert_eq!(all.len(), 57);
}

//! Column schemas for the three dashboard sections.
//!
//! Schemas are built once per section from a sample of the rows they
//! will display; the sample drives filter-kind inference (text versus
//! numeric range).

use storefront_grid::{CellValue, ColumnDef, Schema};
use storefront_model::{Product, Store, User};

/// Columns for the user list.
///
/// The created-at column starts hidden; it can be revealed from the
/// visibility menu.
pub fn users_schema(sample: &[User]) -> Schema<User> {
    Schema::new(
        vec![
            ColumnDef::new("name", "Name", |u: &User| CellValue::from(u.name.clone())),
            ColumnDef::new("email", "Email", |u: &User| {
                CellValue::from(u.email.as_str())
            }),
            ColumnDef::new("role", "Role", |u: &User| CellValue::from(u.role.label())),
            ColumnDef::new("orders", "Orders", |u: &User| CellValue::from(u.orders)),
            ColumnDef::new("created", "Created", |u: &User| {
                CellValue::from(u.created_at.format("%Y-%m-%d").to_string())
            })
            .filterable(false)
            .hidden_by_default(),
        ],
        sample,
    )
    .expect("user column ids are unique")
}

/// Columns for the product catalog.
pub fn products_schema(sample: &[Product]) -> Schema<Product> {
    Schema::new(
        vec![
            ColumnDef::new("name", "Name", |p: &Product| CellValue::from(p.name.clone())),
            ColumnDef::new("category", "Category", |p: &Product| {
                CellValue::from(p.category.clone())
            }),
            ColumnDef::new("price", "Price", |p: &Product| CellValue::from(p.price)),
            ColumnDef::new("inventory", "Inventory", |p: &Product| {
                CellValue::from(p.inventory)
            }),
            ColumnDef::new("updated", "Updated", |p: &Product| {
                CellValue::from(p.updated_at.format("%Y-%m-%d").to_string())
            })
            .filterable(false)
            .hidden_by_default(),
        ],
        sample,
    )
    .expect("product column ids are unique")
}

/// Columns for the store list, with grouped headers: region sits under
/// "Location", the two metrics under "Performance".
pub fn stores_schema(sample: &[Store]) -> Schema<Store> {
    Schema::new(
        vec![
            ColumnDef::new("name", "Name", |s: &Store| CellValue::from(s.name.clone())),
            ColumnDef::new("region", "Region", |s: &Store| {
                CellValue::from(s.region.clone())
            })
            .group("Location"),
            ColumnDef::new("products", "Products", |s: &Store| {
                CellValue::from(s.product_count)
            })
            .group("Performance"),
            ColumnDef::new("revenue", "Revenue", |s: &Store| {
                CellValue::from(s.monthly_revenue)
            })
            .group("Performance"),
        ],
        sample,
    )
    .expect("store column ids are unique")
}

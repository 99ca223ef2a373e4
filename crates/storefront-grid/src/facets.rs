//! Faceted filter suggestions.
//!
//! For each filterable column the grid exposes the distinct values the
//! user could filter on: a deduplicated, sorted value list for text
//! columns, or observed `[min, max]` bounds for numeric columns.
//!
//! Semantics: a column's facet reflects every *other* column's active
//! filter but not its own (so widening a selection stays possible) and
//! not the global filter. See DESIGN.md for the rationale.

use std::collections::{BTreeMap, BTreeSet};

use crate::column::{ColumnFilterKind, ColumnId, Schema};
use crate::fuzzy::FuzzyMatcher;
use crate::row_model::{compile_filters, passes_column_filters};
use crate::state::ColumnFilters;

/// Suggestion-list cap; bounds dropdown rendering cost on wide data.
pub const FACET_VALUE_LIMIT: usize = 5000;

/// Distinct observed values for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetValues {
    /// Sorted, deduplicated display strings, capped at
    /// [`FACET_VALUE_LIMIT`].
    Text(Vec<String>),
    /// Observed inclusive bounds for a numeric column.
    Range { min: f64, max: f64 },
}

/// Compute facet values for a single column, honoring the other
/// columns' filters. Returns `None` for unknown or non-filterable
/// columns, or when no non-missing value is observed.
pub fn facet_values<R>(
    schema: &Schema<R>,
    rows: &[R],
    filters: &ColumnFilters,
    column_id: &ColumnId,
) -> Option<FacetValues> {
    let col = schema.column(column_id).filter(|c| c.is_filterable())?;
    let kind = schema.filter_kind(column_id)?;
    let others = filters.without(column_id);
    let compiled = compile_filters(schema, &others);
    let mut matcher = FuzzyMatcher::new();

    let cells = rows.iter().filter_map(|row| {
        if !passes_column_filters(row, &compiled, &mut matcher) {
            return None;
        }
        let cell = col.cell(row);
        (!cell.is_missing()).then_some(cell)
    });

    match kind {
        ColumnFilterKind::NumericRange => {
            let mut bounds: Option<(f64, f64)> = None;
            for cell in cells {
                let Some(v) = cell.as_number() else { continue };
                bounds = Some(match bounds {
                    Some((min, max)) => (min.min(v), max.max(v)),
                    None => (v, v),
                });
            }
            bounds.map(|(min, max)| FacetValues::Range { min, max })
        }
        ColumnFilterKind::Text => {
            let mut distinct = BTreeSet::new();
            for cell in cells {
                distinct.insert(cell.display());
                if distinct.len() >= FACET_VALUE_LIMIT {
                    break;
                }
            }
            if distinct.is_empty() {
                None
            } else {
                Some(FacetValues::Text(distinct.into_iter().collect()))
            }
        }
    }
}

/// Facets for every filterable column in one pass over the schema.
pub fn facet_cache<R>(
    schema: &Schema<R>,
    rows: &[R],
    filters: &ColumnFilters,
) -> BTreeMap<ColumnId, FacetValues> {
    schema
        .columns()
        .iter()
        .filter(|col| col.is_filterable())
        .filter_map(|col| {
            facet_values(schema, rows, filters, col.id()).map(|v| (col.id().clone(), v))
        })
        .collect()
}

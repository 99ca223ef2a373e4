//! Derived row model: filters → stable sort → pagination.
//!
//! The row model is ephemeral: a pure function of the latest state
//! and the latest data snapshot, recomputed on demand and never
//! stored. Manual-mode facets skip their local stage because the data
//! snapshot is assumed to already reflect them.

use std::cmp::Ordering;

use crate::cell::CellValue;
use crate::column::{ColumnDef, Schema};
use crate::fuzzy::{FuzzyMatcher, FuzzyQuery};
use crate::state::{ColumnFilters, FilterValue, NumericRange, SortDirection, TableState, page_count};

/// Whether a facet is computed locally or by the external data source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FacetMode {
    #[default]
    Auto,
    Manual,
}

impl FacetMode {
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual)
    }
}

/// Per-facet mode flags. All-auto is full client-side computation;
/// all-manual trusts the data source for everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridModes {
    pub sorting: FacetMode,
    pub filtering: FacetMode,
    pub pagination: FacetMode,
}

impl GridModes {
    pub fn client() -> Self {
        Self::default()
    }

    pub fn manual() -> Self {
        Self {
            sorting: FacetMode::Manual,
            filtering: FacetMode::Manual,
            pagination: FacetMode::Manual,
        }
    }
}

/// The ordered slice of rows to render, as indices into the source
/// snapshot, plus the pagination summary for the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    /// Indices of the rows on the current page, in render order.
    pub page_rows: Vec<usize>,
    /// Rows surviving the filter stage (total item count in manual
    /// pagination mode).
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`.
    pub page_count: usize,
    /// Requested page index clamped into range.
    pub page_index: usize,
}

/// Compute the row model for one data snapshot.
///
/// `external_total` supplies the total item count when pagination is
/// manual; it is ignored otherwise.
pub fn compute<R>(
    schema: &Schema<R>,
    rows: &[R],
    state: &TableState,
    modes: GridModes,
    external_total: Option<usize>,
) -> RowModel {
    let mut indices: Vec<usize> = (0..rows.len()).collect();

    if !modes.filtering.is_manual() {
        let compiled = compile_filters(schema, &state.filters);
        let global = FuzzyQuery::new(&state.global_filter);
        let mut matcher = FuzzyMatcher::new();
        indices.retain(|&ix| {
            let row = &rows[ix];
            passes_column_filters(row, &compiled, &mut matcher)
                && passes_global(schema, row, &global, &mut matcher)
        });
    }

    if !modes.sorting.is_manual() && !state.sort.is_empty() {
        sort_indices(schema, rows, state, &mut indices);
    }

    let page_size = state.pagination.page_size.max(1);
    if modes.pagination.is_manual() {
        // The snapshot already is the requested page.
        let total = external_total.unwrap_or(rows.len());
        let pages = page_count(total, page_size);
        RowModel {
            page_rows: indices,
            filtered_count: total,
            page_count: pages,
            page_index: state.pagination.page_index.min(pages.saturating_sub(1)),
        }
    } else {
        let filtered_count = indices.len();
        let pages = page_count(filtered_count, page_size);
        let page_index = state.pagination.page_index.min(pages.saturating_sub(1));
        let start = page_index * page_size;
        let end = (start + page_size).min(filtered_count);
        let page_rows = if start < filtered_count {
            indices[start..end].to_vec()
        } else {
            Vec::new()
        };
        RowModel {
            page_rows,
            filtered_count,
            page_count: pages,
            page_index,
        }
    }
}

/// One active column filter with its query parsed up front, so the
/// per-row pass never re-parses patterns.
pub(crate) enum ColumnPredicate {
    Fuzzy(FuzzyQuery),
    Range(NumericRange),
}

/// Resolve each active filter to its column and compiled predicate.
/// Stale entries for columns no longer in the schema are skipped.
pub(crate) fn compile_filters<'a, R>(
    schema: &'a Schema<R>,
    filters: &ColumnFilters,
) -> Vec<(&'a ColumnDef<R>, ColumnPredicate)> {
    filters
        .iter()
        .filter_map(|(column_id, filter)| {
            let col = schema.column(column_id)?;
            let predicate = match filter {
                FilterValue::Text(query) => ColumnPredicate::Fuzzy(FuzzyQuery::new(query)),
                FilterValue::Range(range) => ColumnPredicate::Range(*range),
            };
            Some((col, predicate))
        })
        .collect()
}

pub(crate) fn passes_column_filters<R>(
    row: &R,
    compiled: &[(&ColumnDef<R>, ColumnPredicate)],
    matcher: &mut FuzzyMatcher,
) -> bool {
    compiled.iter().all(|(col, predicate)| {
        let cell = col.cell(row);
        match predicate {
            ColumnPredicate::Fuzzy(query) => matcher.is_match(query, &cell.display()),
            ColumnPredicate::Range(range) => cell.as_number().is_some_and(|v| range.contains(v)),
        }
    })
}

fn passes_global<R>(
    schema: &Schema<R>,
    row: &R,
    global: &FuzzyQuery,
    matcher: &mut FuzzyMatcher,
) -> bool {
    if global.is_empty() {
        return true;
    }
    schema
        .columns()
        .iter()
        .filter(|col| col.is_filterable())
        .any(|col| {
            let cell = col.cell(row);
            !cell.is_missing() && matcher.is_match(global, &cell.display())
        })
}

fn sort_indices<R>(schema: &Schema<R>, rows: &[R], state: &TableState, indices: &mut [usize]) {
    // Resolve sort keys to columns once, skipping unknown/unsortable.
    let keys: Vec<_> = state
        .sort
        .keys()
        .iter()
        .filter_map(|key| {
            schema
                .column(&key.column)
                .filter(|col| col.is_sortable())
                .map(|col| (col, key.direction))
        })
        .collect();
    if keys.is_empty() {
        return;
    }

    // `sort_by` is stable, so equal-key rows keep source order.
    indices.sort_by(|&a, &b| {
        for (col, direction) in &keys {
            let left = col.cell(&rows[a]);
            let right = col.cell(&rows[b]);
            let ord = compare_cells(&left, &right, *direction);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

/// Missing cells sort last in both directions; only the non-missing
/// comparison is reversed for descending order.
fn compare_cells(left: &CellValue, right: &CellValue, direction: SortDirection) -> Ordering {
    if left.is_missing() || right.is_missing() {
        return left.cmp_cells(right);
    }
    match direction {
        SortDirection::Ascending => left.cmp_cells(right),
        SortDirection::Descending => left.cmp_cells(right).reverse(),
    }
}

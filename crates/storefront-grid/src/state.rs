use std::collections::{BTreeMap, BTreeSet};

use crate::column::ColumnId;

/// Default rows per page when the host supplies no pagination state.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// One entry in the sort specification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortKey {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// Ordered multi-column sort specification.
///
/// Sorting is stable; rows equal under every key keep their original
/// relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Direction of the given column, if it participates in the sort.
    pub fn direction_of(&self, column: &ColumnId) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|key| &key.column == column)
            .map(|key| key.direction)
    }

    /// Replace all keys with a single one.
    pub fn set_single(&mut self, column: ColumnId, direction: SortDirection) {
        self.0 = vec![SortKey { column, direction }];
    }

    /// Append a secondary key (ignored if the column already sorts).
    pub fn push_key(&mut self, column: ColumnId, direction: SortDirection) {
        if self.direction_of(&column).is_none() {
            self.0.push(SortKey { column, direction });
        }
    }

    /// Advance the column through the sort cycle
    /// `None → Ascending → Descending → None`, replacing any other
    /// sort keys (header clicks produce single-column sorts).
    pub fn toggle(&mut self, column: ColumnId) {
        match self.direction_of(&column) {
            None => self.set_single(column, SortDirection::Ascending),
            Some(SortDirection::Ascending) => self.set_single(column, SortDirection::Descending),
            Some(SortDirection::Descending) => self.clear(),
        }
    }
}

/// Inclusive numeric bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Active filter value for one column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FilterValue {
    Text(String),
    Range(NumericRange),
}

impl FilterValue {
    /// A filter that constrains nothing is dropped from the set.
    pub fn is_vacuous(&self) -> bool {
        match self {
            Self::Text(query) => query.trim().is_empty(),
            Self::Range(range) => range.is_unbounded(),
        }
    }
}

/// Per-column filter set; presence implies active.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnFilters(BTreeMap<ColumnId, FilterValue>);

impl ColumnFilters {
    pub fn get(&self, column: &ColumnId) -> Option<&FilterValue> {
        self.0.get(column)
    }

    /// Set or clear a column's filter. Vacuous values clear.
    pub fn set(&mut self, column: ColumnId, value: FilterValue) {
        if value.is_vacuous() {
            self.0.remove(&column);
        } else {
            self.0.insert(column, value);
        }
    }

    pub fn remove(&mut self, column: &ColumnId) -> Option<FilterValue> {
        self.0.remove(column)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &FilterValue)> {
        self.0.iter()
    }

    /// The filter set without one column's own entry, used when
    /// computing that column's facet suggestions.
    pub fn without(&self, column: &ColumnId) -> Self {
        let mut copy = self.clone();
        copy.0.remove(column);
        copy
    }
}

/// Hidden-column bookkeeping; columns default to visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VisibilitySet {
    hidden: BTreeSet<ColumnId>,
}

impl VisibilitySet {
    /// Seed hidden state from column defaults.
    pub fn with_hidden(hidden: impl IntoIterator<Item = ColumnId>) -> Self {
        Self {
            hidden: hidden.into_iter().collect(),
        }
    }

    pub fn is_visible(&self, column: &ColumnId) -> bool {
        !self.hidden.contains(column)
    }

    /// Returns the new visibility of the column.
    pub fn toggle(&mut self, column: ColumnId) -> bool {
        if self.hidden.remove(&column) {
            true
        } else {
            self.hidden.insert(column);
            false
        }
    }
}

/// Zero-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }
}

/// Number of pages needed for `total` items at `page_size` per page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// The grid's composite state: one value object per facet, each facet
/// independently ownable by the grid or by the host.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableState {
    pub sort: SortSpec,
    pub filters: ColumnFilters,
    pub global_filter: String,
    pub visibility: VisibilitySet,
    pub pagination: Pagination,
}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: Pagination::with_page_size(page_size),
            ..Self::default()
        }
    }

    /// True when any column filter or a non-blank global filter is set.
    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty() || !self.global_filter.trim().is_empty()
    }
}

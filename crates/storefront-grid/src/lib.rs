//! Headless data-grid engine.
//!
//! Column schema, per-facet table state, the derived row model
//! (filters → stable sort → pagination), faceted filter suggestions,
//! fuzzy text matching, and debounced input commits. No GUI types
//! appear here; the rendering layer lives in `storefront-gui` and
//! tests drive this crate directly.

pub mod cell;
pub mod column;
pub mod controller;
pub mod debounce;
pub mod display;
pub mod error;
pub mod facets;
pub mod fuzzy;
pub mod row_model;
pub mod state;

pub use cell::CellValue;
pub use column::{ColumnDef, ColumnFilterKind, ColumnId, Schema, header_groups};
pub use controller::{DebounceTicket, GridController, StateChange};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use display::{DisplayFlags, DisplayState};
pub use error::{GridError, Result};
pub use facets::{FACET_VALUE_LIMIT, FacetValues, facet_cache, facet_values};
pub use fuzzy::{FuzzyMatcher, FuzzyQuery};
pub use row_model::{FacetMode, GridModes, RowModel, compute};
pub use state::{
    ColumnFilters, DEFAULT_PAGE_SIZE, FilterValue, NumericRange, Pagination, SortDirection,
    SortKey, SortSpec, TableState, VisibilitySet, page_count,
};

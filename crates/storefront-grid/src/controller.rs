//! Grid controller: one process-local owner for the table state.
//!
//! Every user interaction becomes a pure state transition on this
//! struct; each transition reports which facet changed so the host can
//! react (persist the state, or refetch when that facet is manual).
//! This is the strategy/observer seam from the component contract:
//! internal facets are fully handled here, external facets are pushed
//! in via [`GridController::apply_state`] and observed via the
//! returned [`StateChange`] values.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::column::{ColumnDef, ColumnId, Schema};
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::display::{DisplayFlags, DisplayState};
use crate::facets::{FacetValues, facet_cache};
use crate::row_model::{GridModes, RowModel, compute};
use crate::state::{FilterValue, NumericRange, TableState, VisibilitySet};

/// Which facet a transition changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Sort,
    Filters,
    GlobalFilter,
    Pagination,
    Visibility,
}

/// Ticket handed out for a debounced input; present it back via
/// `commit_filter` / `commit_global_filter` after the quiet period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(pub u64);

pub struct GridController<R> {
    schema: Schema<R>,
    state: TableState,
    modes: GridModes,
    /// Total item count reported by the data source (manual
    /// pagination only).
    external_total: Option<usize>,
    flags: DisplayFlags,
    column_inputs: BTreeMap<ColumnId, Debouncer>,
    global_input: Debouncer,
    debounce: Duration,
}

impl<R> GridController<R> {
    pub fn new(schema: Schema<R>, modes: GridModes) -> Self {
        let hidden = schema
            .columns()
            .iter()
            .filter(|col| !col.default_visible())
            .map(|col| col.id().clone())
            .collect::<Vec<_>>();
        let state = TableState {
            visibility: VisibilitySet::with_hidden(hidden),
            ..TableState::default()
        };
        Self {
            schema,
            state,
            modes,
            external_total: None,
            flags: DisplayFlags::default(),
            column_inputs: BTreeMap::new(),
            global_input: Debouncer::new(DEFAULT_DEBOUNCE),
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the debounce quiet period (default 500 ms).
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self.global_input = Debouncer::new(delay);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.state.pagination.page_size = page_size.max(1);
        self
    }

    // -------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------

    pub fn schema(&self) -> &Schema<R> {
        &self.schema
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn modes(&self) -> GridModes {
        self.modes
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn display_state(&self) -> DisplayState {
        self.flags.state()
    }

    /// Columns currently shown, in schema order.
    pub fn visible_columns(&self) -> Vec<&ColumnDef<R>> {
        self.schema
            .columns()
            .iter()
            .filter(|col| self.state.visibility.is_visible(col.id()))
            .collect()
    }

    /// The text to echo in a column's filter input: the uncommitted
    /// keystrokes if a debounce is pending, else the committed filter.
    pub fn filter_input_text(&self, column: &ColumnId) -> String {
        if let Some(pending) = self.column_inputs.get(column).and_then(Debouncer::pending) {
            return pending.to_string();
        }
        match self.state.filters.get(column) {
            Some(FilterValue::Text(query)) => query.clone(),
            _ => String::new(),
        }
    }

    pub fn global_input_text(&self) -> String {
        self.global_input
            .pending()
            .map_or_else(|| self.state.global_filter.clone(), str::to_string)
    }

    // -------------------------------------------------------------
    // Derived models
    // -------------------------------------------------------------

    pub fn row_model(&self, rows: &[R]) -> RowModel {
        compute(
            &self.schema,
            rows,
            &self.state,
            self.modes,
            self.external_total,
        )
    }

    pub fn facets(&self, rows: &[R]) -> BTreeMap<ColumnId, FacetValues> {
        facet_cache(&self.schema, rows, &self.state.filters)
    }

    // -------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------

    /// Header click: advance the sort cycle for a sortable column.
    /// Resets to the first page, since the row order changed.
    pub fn toggle_sort(&mut self, column: &ColumnId) -> Option<StateChange> {
        let sortable = self
            .schema
            .column(column)
            .is_some_and(ColumnDef::is_sortable);
        if !sortable {
            tracing::warn!(%column, "ignoring sort toggle for unsortable column");
            return None;
        }
        self.state.sort.toggle(column.clone());
        self.state.pagination.page_index = 0;
        Some(StateChange::Sort)
    }

    pub fn set_page_index(&mut self, page_index: usize) -> Option<StateChange> {
        if self.state.pagination.page_index == page_index {
            return None;
        }
        self.state.pagination.page_index = page_index;
        Some(StateChange::Pagination)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Option<StateChange> {
        let page_size = page_size.max(1);
        if self.state.pagination.page_size == page_size {
            return None;
        }
        self.state.pagination.page_size = page_size;
        self.state.pagination.page_index = 0;
        Some(StateChange::Pagination)
    }

    /// Record a keystroke in a column's text filter input. The caller
    /// sleeps for [`Self::debounce_delay`] and then presents the
    /// ticket to [`Self::commit_filter`].
    pub fn filter_input(&mut self, column: &ColumnId, text: impl Into<String>) -> DebounceTicket {
        let debounce = self.debounce;
        let entry = self
            .column_inputs
            .entry(column.clone())
            .or_insert_with(|| Debouncer::new(debounce));
        DebounceTicket(entry.input(text))
    }

    pub fn commit_filter(&mut self, column: &ColumnId, ticket: DebounceTicket) -> Option<StateChange> {
        let value = self.column_inputs.get_mut(column)?.commit(ticket.0)?;
        self.state
            .filters
            .set(column.clone(), FilterValue::Text(value));
        self.state.pagination.page_index = 0;
        Some(StateChange::Filters)
    }

    /// Numeric range inputs commit immediately; only free-text inputs
    /// are debounced.
    pub fn set_range_filter(
        &mut self,
        column: &ColumnId,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Option<StateChange> {
        self.state
            .filters
            .set(column.clone(), FilterValue::Range(NumericRange { min, max }));
        self.state.pagination.page_index = 0;
        Some(StateChange::Filters)
    }

    pub fn clear_filter(&mut self, column: &ColumnId) -> Option<StateChange> {
        if let Some(deb) = self.column_inputs.get_mut(column) {
            deb.cancel();
        }
        self.state.filters.remove(column)?;
        self.state.pagination.page_index = 0;
        Some(StateChange::Filters)
    }

    pub fn clear_all_filters(&mut self) -> Option<StateChange> {
        for deb in self.column_inputs.values_mut() {
            deb.cancel();
        }
        self.global_input.cancel();
        if self.state.filters.is_empty() && self.state.global_filter.is_empty() {
            return None;
        }
        self.state.filters.clear();
        self.state.global_filter.clear();
        self.state.pagination.page_index = 0;
        Some(StateChange::Filters)
    }

    pub fn global_filter_input(&mut self, text: impl Into<String>) -> DebounceTicket {
        DebounceTicket(self.global_input.input(text))
    }

    pub fn commit_global_filter(&mut self, ticket: DebounceTicket) -> Option<StateChange> {
        let value = self.global_input.commit(ticket.0)?;
        self.state.global_filter = value;
        self.state.pagination.page_index = 0;
        Some(StateChange::GlobalFilter)
    }

    pub fn toggle_column(&mut self, column: &ColumnId) -> Option<StateChange> {
        if self.schema.column(column).is_none() {
            tracing::warn!(%column, "ignoring visibility toggle for unknown column");
            return None;
        }
        self.state.visibility.toggle(column.clone());
        Some(StateChange::Visibility)
    }

    // -------------------------------------------------------------
    // External ownership
    // -------------------------------------------------------------

    /// Push externally owned state in wholesale (host-owned facets).
    pub fn apply_state(&mut self, state: TableState) {
        self.state = state;
    }

    /// Manual pagination: the data source's total item count, from
    /// which the external page count is derived.
    pub fn set_total_items(&mut self, total: usize) {
        self.external_total = Some(total);
    }

    pub fn total_items(&self) -> Option<usize> {
        self.external_total
    }

    pub fn set_flags(&mut self, flags: DisplayFlags) {
        self.flags = flags;
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce
    }

    /// Whether a reported change requires the host to refetch because
    /// the changed facet is computed by the data source.
    pub fn requires_refetch(&self, change: StateChange) -> bool {
        match change {
            StateChange::Sort => self.modes.sorting.is_manual(),
            StateChange::Filters | StateChange::GlobalFilter => self.modes.filtering.is_manual(),
            StateChange::Pagination => self.modes.pagination.is_manual(),
            StateChange::Visibility => false,
        }
    }
}

impl<R> std::fmt::Debug for GridController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridController")
            .field("state", &self.state)
            .field("modes", &self.modes)
            .field("external_total", &self.external_total)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

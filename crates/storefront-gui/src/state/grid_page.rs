//! Per-section grid page state.
//!
//! Bundles a grid controller with the row snapshot it renders plus the
//! view-only bits the controller does not own: raw range-input text,
//! the visibility menu toggle, and the selected row for detail views.

use std::collections::BTreeMap;

use storefront_grid::{
    ColumnId, DisplayFlags, FacetValues, GridController, GridModes, RowModel, Schema,
};

/// Raw text of a numeric range filter's two inputs.
///
/// Kept as raw text so partial entries like `"12."` survive a re-render;
/// only parseable numbers reach the filter state.
#[derive(Debug, Clone, Default)]
pub struct RangeInput {
    pub min: String,
    pub max: String,
}

/// One section's grid: controller, data snapshot, and view state.
#[derive(Debug)]
pub struct GridPage<R> {
    pub controller: GridController<R>,
    /// Current data snapshot. In client mode this is the full row set;
    /// in manual mode it is the page most recently served.
    pub rows: Vec<R>,
    pub range_inputs: BTreeMap<ColumnId, RangeInput>,
    pub menu_open: bool,
    pub selected: Option<R>,
    /// Message of the last failed fetch, shown in the error region.
    pub error: Option<String>,
}

impl<R> GridPage<R> {
    pub fn new(schema: Schema<R>, modes: GridModes, page_size: usize) -> Self {
        Self {
            controller: GridController::new(schema, modes).with_page_size(page_size),
            rows: Vec::new(),
            range_inputs: BTreeMap::new(),
            menu_open: false,
            selected: None,
            error: None,
        }
    }

    /// Override the text-filter debounce delay.
    pub fn with_debounce(mut self, delay: std::time::Duration) -> Self {
        self.controller = self.controller.with_debounce(delay);
        self
    }

    /// Replace the data snapshot.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn row_model(&self) -> RowModel {
        self.controller.row_model(&self.rows)
    }

    pub fn facets(&self) -> BTreeMap<ColumnId, FacetValues> {
        self.controller.facets(&self.rows)
    }

    /// Current text of one side of a range input.
    pub fn range_input(&self, column: &ColumnId) -> RangeInput {
        self.range_inputs.get(column).cloned().unwrap_or_default()
    }

    /// Parse the stored range-input text into bounds. Unparseable or
    /// blank sides are open.
    pub fn parsed_range(&self, column: &ColumnId) -> (Option<f64>, Option<f64>) {
        let input = self.range_input(column);
        (
            input.min.trim().parse::<f64>().ok(),
            input.max.trim().parse::<f64>().ok(),
        )
    }

    pub fn set_flags(&mut self, flags: DisplayFlags) {
        self.controller.set_flags(flags);
    }

    pub fn mark_loading(&mut self) {
        self.error = None;
        self.controller.set_flags(DisplayFlags {
            is_loading: true,
            ..DisplayFlags::default()
        });
    }

    /// A refetch keeps the stale rows visible under the loading state.
    pub fn mark_refetching(&mut self) {
        self.error = None;
        self.controller.set_flags(DisplayFlags {
            is_refetching: true,
            ..DisplayFlags::default()
        });
    }

    pub fn mark_ready(&mut self) {
        self.error = None;
        self.controller.set_flags(DisplayFlags::default());
    }

    pub fn mark_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.controller.set_flags(DisplayFlags {
            is_error: true,
            ..DisplayFlags::default()
        });
    }
}

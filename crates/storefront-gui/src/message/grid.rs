//! Messages shared by every section grid.
//!
//! One enum covers all grid interactions; the root message wraps it
//! per section so handlers know which page to mutate.

use storefront_grid::{ColumnId, DebounceTicket};

/// Interactions with a data grid.
#[derive(Debug, Clone)]
pub enum GridMessage {
    /// Header click on a sortable column
    SortToggled(ColumnId),

    /// Pagination chevron pressed
    PageChanged(usize),

    /// Page size picked from the footer dropdown
    PageSizeSelected(usize),

    /// Keystroke in a column's text filter
    FilterInput(ColumnId, String),

    /// The quiet period after a column filter keystroke elapsed
    FilterElapsed(ColumnId, DebounceTicket),

    /// Keystroke in a numeric range filter's min input
    RangeMinInput(ColumnId, String),

    /// Keystroke in a numeric range filter's max input
    RangeMaxInput(ColumnId, String),

    /// Keystroke in the global search box
    GlobalInput(String),

    /// The quiet period after a global search keystroke elapsed
    GlobalElapsed(DebounceTicket),

    /// Clear every active filter
    FiltersCleared,

    /// A column was toggled in the visibility menu
    ColumnToggled(ColumnId),

    /// The visibility menu was opened or closed
    VisibilityMenuToggled,

    /// A body row was clicked; the index points into the data snapshot
    RowActivated(usize),

    /// Back from the detail card to the list
    DetailClosed,
}

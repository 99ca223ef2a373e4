//! Shared grid transition logic.
//!
//! All three section grids speak the same [`GridMessage`] language;
//! this module applies a message to a [`GridPage`] and reports what
//! follow-up the section handler must schedule. Text inputs come back
//! as [`GridAction::Debounce`]; transitions that invalidate a manual
//! facet come back as [`GridAction::Refetch`].

use std::time::Duration;

use iced::Task;
use storefront_grid::{ColumnId, DebounceTicket, StateChange};

use crate::message::{GridMessage, Message};
use crate::state::grid_page::{GridPage, RangeInput};

/// Follow-up work a grid transition requires from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// Nothing further; the view re-renders from the new state.
    None,
    /// Sleep for `delay`, then send the elapsed message carrying this
    /// ticket back into the same grid.
    Debounce {
        column: Option<ColumnId>,
        ticket: DebounceTicket,
        delay: Duration,
    },
    /// A manual facet changed; the data source must serve a new page.
    Refetch,
}

/// Apply one grid message to a page.
pub fn apply<R: Clone>(page: &mut GridPage<R>, msg: GridMessage) -> GridAction {
    match msg {
        GridMessage::SortToggled(column) => {
            let change = page.controller.toggle_sort(&column);
            follow_up(page, change)
        }

        GridMessage::PageChanged(index) => {
            let change = page.controller.set_page_index(index);
            follow_up(page, change)
        }

        GridMessage::PageSizeSelected(size) => {
            let change = page.controller.set_page_size(size);
            follow_up(page, change)
        }

        GridMessage::FilterInput(column, text) => {
            let ticket = page.controller.filter_input(&column, text);
            GridAction::Debounce {
                column: Some(column),
                ticket,
                delay: page.controller.debounce_delay(),
            }
        }

        GridMessage::FilterElapsed(column, ticket) => {
            let change = page.controller.commit_filter(&column, ticket);
            follow_up(page, change)
        }

        GridMessage::RangeMinInput(column, text) => {
            let mut input = page.range_inputs.remove(&column).unwrap_or_default();
            input.min = text;
            set_range(page, column, input)
        }

        GridMessage::RangeMaxInput(column, text) => {
            let mut input = page.range_inputs.remove(&column).unwrap_or_default();
            input.max = text;
            set_range(page, column, input)
        }

        GridMessage::GlobalInput(text) => {
            let ticket = page.controller.global_filter_input(text);
            GridAction::Debounce {
                column: None,
                ticket,
                delay: page.controller.debounce_delay(),
            }
        }

        GridMessage::GlobalElapsed(ticket) => {
            let change = page.controller.commit_global_filter(ticket);
            follow_up(page, change)
        }

        GridMessage::FiltersCleared => {
            page.range_inputs.clear();
            let change = page.controller.clear_all_filters();
            follow_up(page, change)
        }

        GridMessage::ColumnToggled(column) => {
            let change = page.controller.toggle_column(&column);
            follow_up(page, change)
        }

        GridMessage::VisibilityMenuToggled => {
            page.menu_open = !page.menu_open;
            GridAction::None
        }

        GridMessage::RowActivated(source_ix) => {
            page.selected = page.rows.get(source_ix).cloned();
            GridAction::None
        }

        GridMessage::DetailClosed => {
            page.selected = None;
            GridAction::None
        }
    }
}

/// Store the raw range text, push the parsed bounds into the filter
/// state, and report the follow-up. Range inputs commit immediately.
fn set_range<R: Clone>(
    page: &mut GridPage<R>,
    column: ColumnId,
    input: RangeInput,
) -> GridAction {
    page.range_inputs.insert(column.clone(), input);
    let (min, max) = page.parsed_range(&column);
    let change = if min.is_none() && max.is_none() {
        page.controller.clear_filter(&column)
    } else {
        page.controller.set_range_filter(&column, min, max)
    };
    follow_up(page, change)
}

fn follow_up<R>(page: &GridPage<R>, change: Option<StateChange>) -> GridAction {
    match change {
        Some(change) if page.controller.requires_refetch(change) => GridAction::Refetch,
        _ => GridAction::None,
    }
}

/// Sleep out the quiet period, then feed the elapsed message back into
/// the section's grid. A stale ticket makes the commit a no-op, so
/// rapid keystrokes collapse into one committed filter.
pub fn debounce_task(
    column: Option<ColumnId>,
    ticket: DebounceTicket,
    delay: Duration,
    wrap: fn(GridMessage) -> Message,
) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |()| {
        let elapsed = match &column {
            Some(column) => GridMessage::FilterElapsed(column.clone(), ticket),
            None => GridMessage::GlobalElapsed(ticket),
        };
        wrap(elapsed)
    })
}

//! Handler for the stores grid.

use iced::Task;

use crate::handler::grid::{self, GridAction};
use crate::handler::MessageHandler;
use crate::message::{GridMessage, Message};
use crate::state::AppState;

pub struct StoresHandler;

impl MessageHandler<GridMessage> for StoresHandler {
    fn handle(&self, state: &mut AppState, msg: GridMessage) -> Task<Message> {
        match grid::apply(&mut state.stores, msg) {
            GridAction::Debounce {
                column,
                ticket,
                delay,
            } => grid::debounce_task(column, ticket, delay, Message::Stores),
            // The stores grid computes every facet locally.
            GridAction::Refetch | GridAction::None => Task::none(),
        }
    }
}

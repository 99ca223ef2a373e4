//! Handler for the users grid.

use iced::Task;

use crate::handler::grid::{self, GridAction};
use crate::handler::MessageHandler;
use crate::message::{GridMessage, Message};
use crate::state::AppState;

pub struct UsersHandler;

impl MessageHandler<GridMessage> for UsersHandler {
    fn handle(&self, state: &mut AppState, msg: GridMessage) -> Task<Message> {
        match grid::apply(&mut state.users, msg) {
            GridAction::Debounce {
                column,
                ticket,
                delay,
            } => grid::debounce_task(column, ticket, delay, Message::Users),
            // The users grid computes every facet locally.
            GridAction::Refetch | GridAction::None => Task::none(),
        }
    }
}

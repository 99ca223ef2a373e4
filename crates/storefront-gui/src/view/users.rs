//! Users section.

use iced::Element;

use crate::component::data_grid;
use crate::message::{GridMessage, Message};
use crate::state::AppState;

use super::{detail_card, detail_field, page};

pub fn view_users(state: &AppState) -> Element<'_, Message> {
    if let Some(user) = &state.users.selected {
        let fields = vec![
            detail_field("Email", user.email.to_string()),
            detail_field("Role", user.role.label().to_string()),
            detail_field("Orders", user.orders.to_string()),
            detail_field("Created", user.created_at.format("%Y-%m-%d %H:%M").to_string()),
            detail_field("Id", user.id.to_string()),
        ];
        return page(
            "Users",
            detail_card(
                user.name.clone(),
                Message::Users(GridMessage::DetailClosed),
                fields,
            ),
        );
    }

    page("Users", data_grid(&state.users).map(Message::Users))
}

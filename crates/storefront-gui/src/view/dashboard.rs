//! Dashboard section: one summary tile per section.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{AppState, View};
use crate::theme::{SPACING_MD, SPACING_XS, TEXT_HEADING, TEXT_SM, card, text_muted};

use super::page;

pub fn view_dashboard(state: &AppState) -> Element<'_, Message> {
    let product_total = state
        .products
        .controller
        .total_items()
        .unwrap_or(state.products.rows.len());

    let tiles = row![
        tile("Users", state.users.rows.len(), View::Users),
        tile("Products", product_total, View::Products),
        tile("Stores", state.stores.rows.len(), View::Stores),
    ]
    .spacing(SPACING_MD);

    page(
        "Dashboard",
        column![tiles, Space::new().height(Length::Fill)].into(),
    )
}

fn tile(label: &str, count: usize, target: View) -> Element<'static, Message> {
    let content = column![
        text(count.to_string()).size(TEXT_HEADING + 8.0),
        text(label.to_string()).size(TEXT_SM).style(text_muted),
    ]
    .spacing(SPACING_XS);

    button(
        container(content)
            .padding(SPACING_MD)
            .width(Length::Fixed(180.0))
            .style(card),
    )
    .on_press(Message::Navigate(target))
    .padding(0)
    .style(crate::theme::button_ghost)
    .into()
}

//! Section views.
//!
//! Pure functions from application state to elements. Each section
//! shows either its grid or, when a row is selected, a detail card.

pub mod dashboard;
pub mod products;
pub mod stores;
pub mod users;

pub use dashboard::view_dashboard;
pub use products::view_products;
pub use stores::view_stores;
pub use users::view_users;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, TEXT_BODY, TEXT_SM, TEXT_TITLE, button_ghost,
    card, text_muted,
};

/// Section title above the content.
fn page_header(title: &str) -> Element<'static, Message> {
    text(title.to_string()).size(TEXT_TITLE).into()
}

/// Standard page scaffold: header, then content, with page margins.
fn page<'a>(title: &str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![page_header(title), content]
            .spacing(SPACING_MD)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// One label/value line in a detail card.
fn detail_field<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(TEXT_SM).style(text_muted).width(Length::Fixed(120.0)),
        text(value).size(TEXT_BODY),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

/// Detail card scaffold with a back button.
fn detail_card<'a>(
    title: String,
    on_back: Message,
    fields: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let back = button(
        row![lucide::arrow_left().size(12), text("Back").size(TEXT_SM)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(on_back)
    .padding([4.0, 10.0])
    .style(button_ghost);

    let mut body = column![
        back,
        Space::new().height(SPACING_XS),
        text(title).size(TEXT_TITLE - 6.0),
        Space::new().height(SPACING_SM),
    ]
    .spacing(SPACING_XS);
    for field in fields {
        body = body.push(field);
    }

    container(container(body).padding(SPACING_LG).style(card).width(Length::Fixed(480.0)))
        .width(Length::Fill)
        .into()
}

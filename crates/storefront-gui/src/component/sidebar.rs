//! Sidebar navigation component.
//!
//! A fixed-width vertical list of the dashboard sections plus the dark
//! mode toggle at the bottom.

use iced::widget::{Space, button, checkbox, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::message::Message;
use crate::state::View;
use crate::theme::{BORDER_RADIUS_SM, SPACING_SM, SPACING_XS, TEXT_SM, TEXT_TITLE, text_muted};

const SIDEBAR_WIDTH: f32 = 200.0;

/// Render the section navigation.
pub fn sidebar(active: View, dark_mode: bool) -> Element<'static, Message> {
    let mut items = column![
        text("Storefront Studio").size(TEXT_TITLE - 6.0),
        Space::new().height(SPACING_SM),
    ]
    .spacing(SPACING_XS);

    for view in View::ALL {
        let is_active = view == active;
        items = items.push(
            button(
                container(text(view.label()).size(14))
                    .padding([SPACING_XS, 12.0])
                    .width(Length::Fill),
            )
            .on_press(Message::Navigate(view))
            .width(Length::Fill)
            .style(move |theme: &Theme, status| nav_item(theme, status, is_active)),
        );
    }

    let dark_toggle = row![
        checkbox(dark_mode).on_toggle(Message::DarkModeToggled),
        text("Dark mode").size(TEXT_SM).style(text_muted),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    items = items.push(Space::new().height(Length::Fill));
    items = items.push(dark_toggle);

    container(items)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(SPACING_SM)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

fn nav_item(theme: &Theme, status: button::Status, is_active: bool) -> button::Style {
    let palette = theme.extended_palette();
    if is_active {
        // Light tint of the accent for the active background.
        let accent_light = Color {
            a: 0.15,
            ..palette.primary.base.color
        };
        button::Style {
            background: Some(accent_light.into()),
            text_color: palette.primary.strong.color,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    } else {
        let background = match status {
            button::Status::Hovered => Some(palette.background.strong.color.into()),
            _ => None,
        };
        button::Style {
            background,
            text_color: palette.background.base.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

//! Stores section.

use iced::Element;

use crate::component::data_grid;
use crate::message::{GridMessage, Message};
use crate::state::AppState;

use super::{detail_card, detail_field, page};

pub fn view_stores(state: &AppState) -> Element<'_, Message> {
    if let Some(store) = &state.stores.selected {
        let fields = vec![
            detail_field("Region", store.region.clone()),
            detail_field("Products", store.product_count.to_string()),
            detail_field("Revenue", format!("{:.2}", store.monthly_revenue)),
            detail_field("Id", store.id.to_string()),
        ];
        return page(
            "Stores",
            detail_card(
                store.name.clone(),
                Message::Stores(GridMessage::DetailClosed),
                fields,
            ),
        );
    }

    page("Stores", data_grid(&state.stores).map(Message::Stores))
}

//! Products section.

use iced::Element;

use crate::component::data_grid;
use crate::message::{GridMessage, Message};
use crate::state::AppState;

use super::{detail_card, detail_field, page};

pub fn view_products(state: &AppState) -> Element<'_, Message> {
    if let Some(product) = &state.products.selected {
        let fields = vec![
            detail_field("Category", product.category.clone()),
            detail_field("Price", format!("{:.2}", product.price)),
            detail_field("Inventory", product.inventory.to_string()),
            detail_field(
                "Updated",
                product.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            ),
            detail_field("Id", product.id.to_string()),
        ];
        return page(
            "Products",
            detail_card(
                product.name.clone(),
                Message::Products(GridMessage::DetailClosed),
                fields,
            ),
        );
    }

    page("Products", data_grid(&state.products).map(Message::Products))
}

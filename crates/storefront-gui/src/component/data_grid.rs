//! Data grid component.
//!
//! Renders a [`GridPage`] as a full-featured table: optional grouped
//! header row, sortable headers, per-column filter inputs, zebra body
//! rows, and pagination footer. All interactions surface as
//! [`GridMessage`] values; the component holds no state of its own.

use iced::widget::{button, checkbox, column, container, pick_list, row, rule, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use storefront_grid::{
    ColumnDef, ColumnFilterKind, ColumnId, DisplayState, FacetValues, RowModel,
};

use crate::message::GridMessage;
use crate::state::grid_page::GridPage;
use crate::theme::{
    SPACING_SM, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, TEXT_BODY, TEXT_SM,
    body_cell, button_ghost, button_secondary, header_cell, text_danger, text_muted,
};

/// Page sizes offered in the footer dropdown.
const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Render a grid page.
pub fn data_grid<R>(page: &GridPage<R>) -> Element<'_, GridMessage> {
    let visible = page.controller.visible_columns();
    let model = page.row_model();
    let facets = page.facets();

    let mut content = column![toolbar(page)].spacing(SPACING_SM);

    if page.menu_open {
        content = content.push(visibility_menu(page));
    }

    let mut table = column![].spacing(0);
    if visible.iter().any(|col| col.group_label().is_some()) {
        table = table.push(group_header_row(&visible));
    }
    table = table.push(header_row(page, &visible));
    table = table.push(filter_row(page, &visible, &facets));
    table = table.push(rule::horizontal(1));

    let body: Element<'_, GridMessage> = match page.controller.display_state() {
        DisplayState::Loading => status_line("Loading..."),
        DisplayState::Error => container(
            text(page.error.clone().unwrap_or_else(|| "Request failed".to_string()))
                .size(TEXT_BODY)
                .style(text_danger),
        )
        .width(Length::Fill)
        .padding(SPACING_SM)
        .center_x(Length::Fill)
        .into(),
        DisplayState::Ready if model.page_rows.is_empty() => status_line("No results"),
        DisplayState::Ready => body_rows(page, &visible, &model),
    };
    table = table.push(body);

    content = content.push(table);
    content = content.push(footer(page, &model));
    content.into()
}

fn status_line(label: &str) -> Element<'_, GridMessage> {
    container(text(label).size(TEXT_BODY).style(text_muted))
        .width(Length::Fill)
        .padding(SPACING_SM)
        .center_x(Length::Fill)
        .into()
}

/// Global search, clear-filters, and the columns menu toggle.
fn toolbar<R>(page: &GridPage<R>) -> Element<'_, GridMessage> {
    let search = text_input("Search all columns...", &page.controller.global_input_text())
        .on_input(GridMessage::GlobalInput)
        .size(TEXT_BODY)
        .padding([6.0, 10.0])
        .width(Length::Fixed(260.0));

    let mut bar = row![search].spacing(SPACING_SM).align_y(Alignment::Center);

    if page.controller.state().has_active_filters() {
        bar = bar.push(
            button(
                row![lucide::x().size(12), text("Clear filters").size(TEXT_SM)]
                    .spacing(SPACING_XS)
                    .align_y(Alignment::Center),
            )
            .on_press(GridMessage::FiltersCleared)
            .padding([4.0, 10.0])
            .style(button_ghost),
        );
    }

    bar = bar.push(iced::widget::Space::new().width(Length::Fill));
    bar = bar.push(
        button(
            row![lucide::list().size(12), text("Columns").size(TEXT_SM)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .on_press(GridMessage::VisibilityMenuToggled)
        .padding([4.0, 10.0])
        .style(button_secondary),
    );

    bar.into()
}

/// One checkbox per schema column, in schema order.
fn visibility_menu<R>(page: &GridPage<R>) -> Element<'_, GridMessage> {
    let mut entries = row![].spacing(SPACING_SM).align_y(Alignment::Center);
    for col in page.controller.schema().columns() {
        let id = col.id().clone();
        let visible = page.controller.state().visibility.is_visible(&id);
        entries = entries.push(
            row![
                checkbox(visible).on_toggle(move |_| GridMessage::ColumnToggled(id.clone())),
                text(col.header().to_string()).size(TEXT_SM),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        );
    }
    container(entries)
        .width(Length::Fill)
        .padding(SPACING_XS)
        .style(header_cell)
        .into()
}

/// Shared parent labels spanning their adjacent columns.
fn group_header_row<'a, R>(visible: &[&'a ColumnDef<R>]) -> Element<'a, GridMessage> {
    let mut header = row![].spacing(0);
    for (label, span) in storefront_grid::header_groups(visible) {
        header = header.push(
            container(
                text(label.unwrap_or_default())
                    .size(TEXT_SM)
                    .style(text_muted),
            )
            .width(Length::FillPortion(span as u16))
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
            .style(header_cell),
        );
    }
    header.into()
}

/// Column headers; sortable ones are buttons cycling the sort state.
fn header_row<'a, R>(
    page: &'a GridPage<R>,
    visible: &[&'a ColumnDef<R>],
) -> Element<'a, GridMessage> {
    let sort = &page.controller.state().sort;
    let mut header = row![].spacing(0);
    for col in visible {
        let label = match sort.direction_of(col.id()) {
            Some(direction) => format!("{} {}", col.header(), direction.indicator()),
            None => col.header().to_string(),
        };
        let id = col.id().clone();
        let cell = button(text(label).size(TEXT_SM))
            .on_press_maybe(col.is_sortable().then(|| GridMessage::SortToggled(id)))
            .width(Length::Fill)
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
            .style(button_ghost);
        header = header.push(
            container(cell)
                .width(Length::FillPortion(1))
                .style(header_cell),
        );
    }
    header.into()
}

/// Per-column filter inputs: fuzzy text or numeric min/max, chosen by
/// the column's inferred filter kind. Facet values feed the
/// placeholders so users see the available range before typing.
fn filter_row<'a, R>(
    page: &'a GridPage<R>,
    visible: &[&'a ColumnDef<R>],
    facets: &std::collections::BTreeMap<ColumnId, FacetValues>,
) -> Element<'a, GridMessage> {
    let schema = page.controller.schema();
    let mut filters = row![].spacing(0);
    for col in visible {
        let id = col.id().clone();
        let cell: Element<'_, GridMessage> = if !col.is_filterable() {
            iced::widget::Space::new().width(Length::Fill).into()
        } else {
            match schema.filter_kind(&id) {
                Some(ColumnFilterKind::NumericRange) => {
                    let (min_hint, max_hint) = match facets.get(&id) {
                        Some(FacetValues::Range { min, max }) => {
                            (format!("min {min}"), format!("max {max}"))
                        }
                        _ => ("min".to_string(), "max".to_string()),
                    };
                    let input = page.range_input(&id);
                    let min_id = id.clone();
                    let max_id = id.clone();
                    row![
                        text_input(&min_hint, &input.min)
                            .on_input(move |s| GridMessage::RangeMinInput(min_id.clone(), s))
                            .size(TEXT_SM)
                            .padding([4.0, 6.0]),
                        text_input(&max_hint, &input.max)
                            .on_input(move |s| GridMessage::RangeMaxInput(max_id.clone(), s))
                            .size(TEXT_SM)
                            .padding([4.0, 6.0]),
                    ]
                    .spacing(SPACING_XS)
                    .into()
                }
                _ => {
                    let hint = match facets.get(&id) {
                        Some(FacetValues::Text(values)) => {
                            format!("Filter ({} values)...", values.len())
                        }
                        _ => "Filter...".to_string(),
                    };
                    let value = page.controller.filter_input_text(&id);
                    let input_id = id.clone();
                    text_input(&hint, &value)
                        .on_input(move |s| GridMessage::FilterInput(input_id.clone(), s))
                        .size(TEXT_SM)
                        .padding([4.0, 6.0])
                        .into()
                }
            }
        };
        filters = filters.push(
            container(cell)
                .width(Length::FillPortion(1))
                .padding([SPACING_XS, SPACING_XS]),
        );
    }
    filters.into()
}

/// Zebra-striped body rows; clicking a row opens its detail card.
fn body_rows<'a, R>(
    page: &'a GridPage<R>,
    visible: &[&'a ColumnDef<R>],
    model: &RowModel,
) -> Element<'a, GridMessage> {
    let mut body = column![].spacing(0);
    for (render_ix, &source_ix) in model.page_rows.iter().enumerate() {
        let Some(row_data) = page.rows.get(source_ix) else {
            continue;
        };
        let is_even = render_ix % 2 == 0;
        let mut cells = row![].spacing(0);
        for col in visible {
            cells = cells.push(
                container(text(col.cell(row_data).display()).size(TEXT_BODY))
                    .width(Length::FillPortion(1))
                    .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
                    .style(move |theme: &Theme| body_cell(theme, is_even)),
            );
        }
        body = body.push(
            button(cells)
                .on_press(GridMessage::RowActivated(source_ix))
                .width(Length::Fill)
                .padding(0)
                .style(button_ghost),
        );
    }
    scrollable(body).height(Length::Fill).into()
}

/// Pagination summary, chevrons, and the page size dropdown.
fn footer<'a, R>(page: &'a GridPage<R>, model: &RowModel) -> Element<'a, GridMessage> {
    let page_size = page.controller.state().pagination.page_size;
    let pages = model.page_count.max(1);
    let prev_enabled = model.page_index > 0;
    let next_enabled = model.page_index + 1 < pages;

    let prev = button(lucide::chevron_left().size(14))
        .on_press_maybe(prev_enabled.then(|| GridMessage::PageChanged(model.page_index - 1)))
        .padding([4.0, 10.0])
        .style(button_ghost);
    let next = button(lucide::chevron_right().size(14))
        .on_press_maybe(next_enabled.then(|| GridMessage::PageChanged(model.page_index + 1)))
        .padding([4.0, 10.0])
        .style(button_ghost);

    let summary = text(format!(
        "Page {} of {} ({} items)",
        model.page_index + 1,
        pages,
        model.filtered_count,
    ))
    .size(TEXT_SM)
    .style(text_muted);

    let sizes = pick_list(
        PAGE_SIZES.to_vec(),
        Some(page_size),
        GridMessage::PageSizeSelected,
    )
    .text_size(TEXT_SM)
    .padding([4.0, 8.0]);

    row![
        sizes,
        iced::widget::Space::new().width(Length::Fill),
        prev,
        summary,
        next,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

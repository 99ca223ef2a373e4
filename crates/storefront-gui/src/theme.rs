//! Theme: spacing scale, typography sizes, and shared widget styles.
//!
//! Colors come from the active Iced theme's extended palette so light
//! and dark mode both work without a parallel color table.

use iced::widget::{button, container, text};
use iced::{Border, Theme};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub const TEXT_SM: f32 = 11.0;
pub const TEXT_BODY: f32 = 13.0;
pub const TEXT_HEADING: f32 = 18.0;
pub const TEXT_TITLE: f32 = 24.0;

/// Table cell padding, horizontal then vertical.
pub const TABLE_CELL_PADDING_X: f32 = 12.0;
pub const TABLE_CELL_PADDING_Y: f32 = 6.0;

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Muted secondary text.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    }
}

/// Danger-colored text for the error region.
pub fn text_danger(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

/// Borderless button that only tints on hover; used for pagination
/// chevrons and header sort buttons.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
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

/// Outlined secondary button.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
        _ => palette.background.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            color: palette.background.strong.color,
            width: 1.0,
        },
        ..Default::default()
    }
}

/// Filled primary button.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Header cell background.
pub fn header_cell(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        ..Default::default()
    }
}

/// Zebra striping for table body rows.
pub fn body_cell(theme: &Theme, is_even: bool) -> container::Style {
    let palette = theme.extended_palette();
    let background = if is_even {
        palette.background.weak.color
    } else {
        palette.background.base.color
    };
    container::Style {
        background: Some(background.into()),
        ..Default::default()
    }
}

/// Card surround for detail views and the dashboard tiles.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            color: palette.background.strong.color,
            width: 1.0,
        },
        ..Default::default()
    }
}

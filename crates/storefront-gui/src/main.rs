//! Storefront Studio - Desktop Admin Dashboard
//!
//! A desktop application for browsing and managing a storefront's
//! users, product catalog, and stores.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::Size;
use iced::window;

use storefront_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Storefront Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .run()
}

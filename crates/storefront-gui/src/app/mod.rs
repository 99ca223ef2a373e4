//! Main application module for Storefront Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update
//! → View. All state changes happen in `update`; views are pure
//! functions; async work goes through `Task::perform`.

use iced::widget::row;
use iced::{Element, Task, Theme};

use crate::component::sidebar;
use crate::handler::{MessageHandler, ProductsHandler, StoresHandler, UsersHandler, products};
use crate::message::Message;
use crate::state::{AppState, Settings, View};
use crate::view::{view_dashboard, view_products, view_stores, view_users};

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the task
    /// that fetches the first product page.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            dark_mode = settings.general.dark_mode,
            page_size = settings.general.page_size,
            "Loaded settings"
        );

        let app = Self {
            state: AppState::with_settings(settings),
        };
        let startup = products::fetch_page(&app.state);
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(view) => {
                self.state.view = view;
                Task::none()
            }

            // =================================================================
            // Section grids
            // =================================================================
            Message::Users(msg) => UsersHandler.handle(&mut self.state, msg),

            Message::Products(msg) => ProductsHandler.handle(&mut self.state, msg),

            Message::Stores(msg) => StoresHandler.handle(&mut self.state, msg),

            // =================================================================
            // Background task results
            // =================================================================
            Message::ProductsPageLoaded(result) => {
                match result {
                    Ok(response) => {
                        tracing::info!(
                            rows = response.rows.len(),
                            total = response.total_count,
                            "Product page loaded"
                        );
                        self.state
                            .products
                            .controller
                            .set_total_items(response.total_count);
                        self.state.products.set_rows(response.rows);
                        self.state.products.mark_ready();
                    }
                    Err(err) => {
                        tracing::error!("Failed to load product page: {}", err);
                        self.state.products.mark_error(err);
                    }
                }
                Task::none()
            }

            // =================================================================
            // Settings
            // =================================================================
            Message::DarkModeToggled(dark) => {
                self.state.settings.general.dark_mode = dark;
                if let Err(e) = self.state.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.state.view {
            View::Dashboard => view_dashboard(&self.state),
            View::Users => view_users(&self.state),
            View::Products => view_products(&self.state),
            View::Stores => view_stores(&self.state),
        };

        row![
            sidebar(self.state.view, self.state.settings.general.dark_mode),
            content,
        ]
        .into()
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.view {
            View::Dashboard => "Storefront Studio".to_string(),
            view => format!("{} - Storefront Studio", view.label()),
        }
    }

    /// Active theme, from the persisted dark mode preference.
    pub fn theme(&self) -> Theme {
        if self.state.settings.general.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

//! Navigation state - which section of the dashboard is shown.

/// Top-level sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Users,
    Products,
    Stores,
}

impl View {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Users, Self::Products, Self::Stores];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Products => "Products",
            Self::Stores => "Stores",
        }
    }
}

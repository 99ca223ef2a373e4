use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ModelError;

/// A validated email address.
///
/// Validation is deliberately shallow (one `@`, non-empty local and
/// domain parts); real deliverability checks belong to the backend.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ModelError::InvalidEmail(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role assigned to a dashboard user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum UserRole {
    Admin,
    Manager,
    Customer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Customer => "Customer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dashboard-managed user account.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    /// Lifetime order count, denormalized for display.
    pub orders: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: Email,
        role: UserRole,
        orders: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
            orders,
            created_at,
        })
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// Unit price in the shop currency.
    pub price: f64,
    pub inventory: i64,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        inventory: i64,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category: category.into(),
            price,
            inventory,
            updated_at,
        })
    }
}

/// A physical or virtual storefront.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    pub product_count: i64,
    /// Trailing 30-day revenue in the shop currency.
    pub monthly_revenue: f64,
}

impl Store {
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        product_count: i64,
        monthly_revenue: f64,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            region: region.into(),
            product_count,
            monthly_revenue,
        })
    }
}

//! Deterministic demo fixtures.
//!
//! Row counts are chosen to exercise the pagination edge cases the
//! dashboard cares about: 23 users page as [10, 10, 3] at the default
//! page size, and 57 products give 3 pages at the products view's
//! page size of 20.

use chrono::{Duration, TimeZone, Utc};

use storefront_model::{Email, Product, Store, User, UserRole};

use crate::error::Result;

const FIRST_NAMES: [&str; 23] = [
    "Ada", "Bram", "Carla", "Dmitri", "Elena", "Farid", "Greta", "Hugo", "Ines", "Jonas", "Kiara",
    "Lars", "Mina", "Noor", "Otto", "Priya", "Quinn", "Rosa", "Sven", "Tara", "Umar", "Vera",
    "Wim",
];

const PRODUCT_ADJECTIVES: [&str; 8] = [
    "Walnut", "Oak", "Brass", "Linen", "Ceramic", "Matte", "Slate", "Copper",
];

const PRODUCT_NOUNS: [&str; 8] = [
    "Desk", "Lamp", "Shelf", "Chair", "Vase", "Mirror", "Bench", "Planter",
];

const CATEGORIES: [&str; 4] = ["Furniture", "Lighting", "Decor", "Storage"];

const REGIONS: [&str; 4] = ["EU West", "EU North", "US East", "US West"];

/// 23 dashboard users with a fixed role rotation.
pub fn users() -> Result<Vec<User>> {
    let base = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).single().unwrap_or_default();
    FIRST_NAMES
        .iter()
        .enumerate()
        .map(|(ix, first)| {
            let role = match ix % 7 {
                0 => UserRole::Admin,
                1 | 2 => UserRole::Manager,
                _ => UserRole::Customer,
            };
            let email = Email::new(format!("{}@storefront.example", first.to_lowercase()))?;
            let user = User::new(
                *first,
                email,
                role,
                // Spread order counts so sorting has ties to exercise.
                i64::from(ix as u32 % 9) * 3,
                base + Duration::days(ix as i64 * 11),
            )?;
            Ok(user)
        })
        .collect()
}

/// 57 catalog products over the adjective × noun grid.
pub fn products() -> Result<Vec<Product>> {
    let base = Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).single().unwrap_or_default();
    (0..57)
        .map(|ix: usize| {
            let adjective = PRODUCT_ADJECTIVES[ix % PRODUCT_ADJECTIVES.len()];
            let noun = PRODUCT_NOUNS[(ix / PRODUCT_ADJECTIVES.len() + ix) % PRODUCT_NOUNS.len()];
            let category = CATEGORIES[ix % CATEGORIES.len()];
            let product = Product::new(
                format!("{adjective} {noun}"),
                category,
                19.0 + (ix as f64 * 17.0) % 480.0,
                ((ix * 13) % 120) as i64,
                base + Duration::hours(ix as i64 * 7),
            )?;
            Ok(product)
        })
        .collect()
}

/// 12 storefronts across four regions.
pub fn stores() -> Result<Vec<Store>> {
    (0..12)
        .map(|ix: usize| {
            let region = REGIONS[ix % REGIONS.len()];
            let store = Store::new(
                format!("Storefront {:02}", ix + 1),
                region,
                24 + ((ix * 19) % 140) as i64,
                12_500.0 + (ix as f64 * 3_777.0) % 88_000.0,
            )?;
            Ok(store)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_pagination_scenarios() {
        assert_eq!(users().expect("seed users").len(), 23);
        assert_eq!(products().expect("seed products").len(), 57);
        assert_eq!(stores().expect("seed stores").len(), 12);
    }

    #[test]
    fn product_names_are_not_all_distinct_categories() {
        let products = products().expect("seed products");
        assert!(products.iter().any(|p| p.category == "Lighting"));
        assert!(products.iter().all(|p| p.price >= 19.0));
    }
}

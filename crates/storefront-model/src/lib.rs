pub mod catalog;
pub mod error;

pub use catalog::{Email, Product, Store, User, UserRole};
pub use error::{ModelError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_local_and_domain_parts() {
        assert!(Email::new("ada@example.com").is_ok());
        assert!(Email::new("  ada@example.com  ").is_ok());
        assert!(Email::new("ada").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("ada@nodot").is_err());
    }

    #[test]
    fn user_rejects_blank_name() {
        let email = Email::new("ada@example.com").expect("valid email");
        let result = User::new(
            "   ",
            email,
            UserRole::Admin,
            0,
            chrono::Utc::now(),
        );
        assert!(matches!(result, Err(ModelError::EmptyName)));
    }

    #[test]
    fn product_serializes() {
        let product = Product::new("Walnut Desk", "Furniture", 499.0, 12, chrono::Utc::now())
            .expect("valid product");
        let json = serde_json::to_string(&product).expect("serialize product");
        let round: Product = serde_json::from_str(&json).expect("deserialize product");
        assert_eq!(round.name, "Walnut Desk");
        assert_eq!(round.id, product.id);
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A registered principal. The hash never leaves the server: it is skipped
/// on serialization and repositories never expose it except for login.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// A catalog record. `price` crosses the wire as a JSON number and is held
/// as a decimal so two fractional digits round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Field set for creating or overwriting a product; the id is assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_price_round_trips_as_number() {
        let product = Product {
            id: 7,
            name: "Widget".to_string(),
            description: Some("A thing".to_string()),
            price: Decimal::new(999, 2), // 9.99
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("9.99"));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_null_description_round_trips() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(1250, 2),
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.description, None);
        assert_eq!(back.price, Decimal::new(1250, 2));
    }
}

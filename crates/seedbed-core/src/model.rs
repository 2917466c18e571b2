use crate::errors::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

/// One of the three independent entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    User,
    Product,
    Order,
}

impl EntityKind {
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Product => "products",
            EntityKind::Order => "orders",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntityKind::User => "user",
            EntityKind::Product => "product",
            EntityKind::Order => "order",
        })
    }
}

/// Pure, deterministic, I/O-free pre-check applied before any storage
/// mutation. Never mutates the entity.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        if self.email.is_empty() || !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        // Non-strict bound: free items are legal, negative prices are not.
        if self.price < 0.0 || self.price.is_nan() {
            return Err(ValidationError::InvalidPrice { price: self.price });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl Validate for Order {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity < 0 {
            return Err(ValidationError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        // Range check only. Whether the referenced rows exist is deliberately
        // not consulted: referential integrity is advisory, not enforced.
        if self.user_id < 1 || self.product_id < 1 {
            return Err(ValidationError::InvalidReference);
        }
        Ok(())
    }
}

/// The result of one insert attempt, keyed by the record's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: i64,
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(id: i64) -> Self {
        Self {
            id,
            success: true,
            message: "inserted".to_string(),
        }
    }

    pub fn failure(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user_passes() {
        let u = User {
            id: 1,
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        assert_eq!(u.validate(), Ok(()));
    }

    #[test]
    fn empty_name_is_invalid() {
        let u = User {
            id: 1,
            name: String::new(),
            email: "alice@example.com".into(),
        };
        assert_eq!(u.validate(), Err(ValidationError::InvalidName));
    }

    #[test]
    fn malformed_emails_are_invalid() {
        for email in ["", "alice", "alice@", "@example.com", "alice@example", "a b@example.com"] {
            let u = User {
                id: 1,
                name: "Alice".into(),
                email: email.into(),
            };
            assert!(
                matches!(u.validate(), Err(ValidationError::InvalidEmail { .. })),
                "expected InvalidEmail for {:?}",
                email
            );
        }
    }

    #[test]
    fn subdomain_and_plus_addressing_are_valid() {
        for email in ["a.b+c@mail.example.co", "x_y%z@sub.example.com"] {
            let u = User {
                id: 1,
                name: "Alice".into(),
                email: email.into(),
            };
            assert_eq!(u.validate(), Ok(()), "expected valid for {:?}", email);
        }
    }

    #[test]
    fn zero_price_is_valid_negative_is_not() {
        let free = Product {
            id: 1,
            name: "Sticker".into(),
            price: 0.0,
        };
        assert_eq!(free.validate(), Ok(()));

        let bad = Product {
            id: 10,
            name: "Earbuds".into(),
            price: -50.0,
        };
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn zero_quantity_is_valid_negative_is_not() {
        let zero = Order {
            id: 8,
            user_id: 8,
            product_id: 8,
            quantity: 0,
        };
        assert_eq!(zero.validate(), Ok(()));

        let bad = Order {
            id: 9,
            user_id: 9,
            product_id: 1,
            quantity: -1,
        };
        assert!(matches!(
            bad.validate(),
            Err(ValidationError::InvalidQuantity { quantity: -1 })
        ));
    }

    #[test]
    fn reference_range_is_checked_but_existence_is_not() {
        let zero_ref = Order {
            id: 1,
            user_id: 0,
            product_id: 1,
            quantity: 1,
        };
        assert_eq!(zero_ref.validate(), Err(ValidationError::InvalidReference));

        // A dangling-but-positive reference passes validation: existence
        // checks are out of scope for the pure validator.
        let dangling = Order {
            id: 10,
            user_id: 10,
            product_id: 11,
            quantity: 2,
        };
        assert_eq!(dangling.validate(), Ok(()));
    }

    #[test]
    fn entity_kind_table_names() {
        assert_eq!(EntityKind::User.table(), "users");
        assert_eq!(EntityKind::Product.table(), "products");
        assert_eq!(EntityKind::Order.table(), "orders");
    }
}

use crate::model::EntityKind;
use thiserror::Error;

/// Validation failures. Pure pre-checks, raised before any storage mutation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid name: must not be empty")]
    InvalidName,

    #[error("invalid email format: {email:?}")]
    InvalidEmail { email: String },

    #[error("invalid price: must be non-negative, got {price}")]
    InvalidPrice { price: f64 },

    #[error("invalid quantity: must be non-negative, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    #[error("invalid reference: user_id and product_id must be >= 1")]
    InvalidReference,
}

/// Per-record insert failures. Converted to an [`crate::model::Outcome`] at
/// the store boundary; never propagated to the driver as a hard error.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("duplicate id: {kind} {id} already exists")]
    DuplicateId { kind: EntityKind, id: i64 },

    #[error("storage error: {0}")]
    Storage(String),
}

impl InsertError {
    /// Map an engine error to the taxonomy. The only constraint our inserts
    /// can trip is the `id INTEGER PRIMARY KEY` uniqueness check.
    pub(crate) fn from_sqlite(kind: EntityKind, id: i64, e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                InsertError::DuplicateId { kind, id }
            }
            _ => InsertError::Storage(e.to_string()),
        }
    }
}

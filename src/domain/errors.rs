//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// A single field that failed shape validation
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found, described by entity kind and ID
    NotFound(String),
    /// Request fields failed shape validation
    Validation(Vec<FieldError>),
    /// Database/persistence error
    Database(String),
}

impl DomainError {
    pub fn collection_not_found(id: i32) -> Self {
        DomainError::NotFound(format!("Collection with ID {} not found", id))
    }

    pub fn quotation_not_found(id: i32) -> Self {
        DomainError::NotFound(format!("Quotation with ID {} not found", id))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "{}", msg),
            DomainError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Validation error on: {}", fields.join(", "))
            }
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

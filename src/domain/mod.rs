//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM entities, no Axum).
//! Only record types, repository trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::{DomainError, FieldError};
pub use repositories::*;

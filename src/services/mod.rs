//! Services Layer
//!
//! Existence checks and partial-update merging for collections and
//! quotations. Services own no state besides their injected repositories.

pub mod collection_service;
pub mod quotation_service;

#[cfg(test)]
mod test_support;

pub use collection_service::CollectionService;
pub use quotation_service::QuotationService;

/// Treat empty strings as "not supplied" when merging partial updates
pub(crate) fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

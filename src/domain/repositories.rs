//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.
//!
//! Records serialize with the Portuguese wire names used by the API
//! (`titulo`, `autor`, `id_colecao`, ...).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// Collection record as stored, without joined data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Collection {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "subtitulo")]
    pub subtitle: Option<String>,
    #[serde(rename = "imagem")]
    pub image: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub created_at: String,
}

/// Collection together with the quotations that reference it
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionDetails {
    #[serde(flatten)]
    pub collection: Collection,
    #[serde(rename = "citacoes")]
    pub quotations: Vec<Quotation>,
}

/// Input for creating a collection
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCollectionInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: String,
    pub author: String,
}

/// Partial update for a collection; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCollectionInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
}

/// Quotation record as stored, without joined data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Quotation {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "id_colecao")]
    pub collection_id: i32,
    pub created_at: String,
}

/// Public fields of the parent collection joined onto a quotation
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CollectionSummary {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "subtitulo")]
    pub subtitle: Option<String>,
    #[serde(rename = "imagem")]
    pub image: String,
    #[serde(rename = "autor")]
    pub author: String,
}

impl From<Collection> for CollectionSummary {
    fn from(c: Collection) -> Self {
        Self {
            id: c.id,
            title: c.title,
            subtitle: c.subtitle,
            image: c.image,
            author: c.author,
        }
    }
}

/// Quotation with a snapshot of its parent collection.
///
/// `collection` is `None` when the referenced collection no longer exists
/// (only possible in listings, which use an outer join).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuotationDetails {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "id_colecao")]
    pub collection_id: i32,
    pub created_at: String,
    #[serde(rename = "colecao")]
    pub collection: Option<CollectionSummary>,
}

/// Input for creating a quotation
#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuotationInput {
    pub title: String,
    pub collection_id: i32,
}

/// Partial update for a quotation; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuotationInput {
    pub title: Option<String>,
    pub collection_id: Option<i32>,
}

/// Repository trait for Collection entity
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Find all collections, optionally filtered by a title substring
    async fn find_all(&self, title: Option<String>) -> Result<Vec<Collection>, DomainError>;

    /// Find a collection with its quotations
    async fn find_by_id(&self, id: i32) -> Result<Option<CollectionDetails>, DomainError>;

    /// Load only the collection row, used for existence checks
    async fn find_bare(&self, id: i32) -> Result<Option<Collection>, DomainError>;

    /// Create a new collection
    async fn create(&self, input: CreateCollectionInput) -> Result<Collection, DomainError>;

    /// Overwrite the mutable fields of a collection and return the stored row
    async fn update(
        &self,
        id: i32,
        collection: Collection,
    ) -> Result<Option<Collection>, DomainError>;

    /// Delete a collection by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Quotation entity
#[async_trait]
pub trait QuotationRepository: Send + Sync {
    /// All quotations (outer join on collection), optionally filtered by title substring
    async fn find_all(&self, title: Option<String>)
    -> Result<Vec<QuotationDetails>, DomainError>;

    /// A quotation joined with its collection (inner join)
    async fn find_by_id(&self, id: i32) -> Result<Option<QuotationDetails>, DomainError>;

    /// Load only the quotation row, used for existence checks
    async fn find_bare(&self, id: i32) -> Result<Option<Quotation>, DomainError>;

    /// Create a new quotation
    async fn create(&self, input: CreateQuotationInput) -> Result<Quotation, DomainError>;

    /// Overwrite the mutable fields of a quotation and return the stored row
    async fn update(&self, id: i32, quotation: Quotation)
    -> Result<Option<Quotation>, DomainError>;

    /// Delete a quotation by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

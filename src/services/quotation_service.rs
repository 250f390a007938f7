//! Quotation Service - existence and parent-collection checks for quotations

use std::sync::Arc;

use super::supplied;
use crate::domain::{
    CollectionRepository, CreateQuotationInput, DomainError, Quotation, QuotationDetails,
    QuotationRepository, UpdateQuotationInput,
};

#[derive(Clone)]
pub struct QuotationService {
    quotations: Arc<dyn QuotationRepository>,
    collections: Arc<dyn CollectionRepository>,
}

impl QuotationService {
    pub fn new(
        quotations: Arc<dyn QuotationRepository>,
        collections: Arc<dyn CollectionRepository>,
    ) -> Self {
        Self {
            quotations,
            collections,
        }
    }

    /// List quotations with their collection, optionally filtered by title substring.
    /// Quotations whose collection no longer exists are included with no collection.
    pub async fn find_all(
        &self,
        title: Option<String>,
    ) -> Result<Vec<QuotationDetails>, DomainError> {
        tracing::debug!("List quotations - filter: {:?}", title);
        self.quotations.find_all(title).await
    }

    /// Get a quotation with its collection.
    /// A quotation whose collection no longer exists is reported as not found.
    pub async fn find_by_id(&self, id: i32) -> Result<QuotationDetails, DomainError> {
        match self.quotations.find_by_id(id).await? {
            Some(details) => Ok(details),
            None => {
                tracing::warn!("Quotation {} not found", id);
                Err(DomainError::quotation_not_found(id))
            }
        }
    }

    /// Create a quotation.
    ///
    /// The parent collection is not checked here, only on update.
    pub async fn create(&self, input: CreateQuotationInput) -> Result<Quotation, DomainError> {
        let quotation = self.quotations.create(input).await?;
        tracing::info!(
            "Quotation {} created in collection {}",
            quotation.id,
            quotation.collection_id
        );
        Ok(quotation)
    }

    /// Apply a new title and/or a new parent collection.
    ///
    /// A supplied collection ID must resolve to an existing collection before
    /// any field is touched. Empty titles and a zero collection ID count as
    /// not supplied.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateQuotationInput,
    ) -> Result<Quotation, DomainError> {
        let mut quotation = self.require(id).await?;

        let collection_id = input.collection_id.filter(|cid| *cid != 0);
        if let Some(collection_id) = collection_id {
            if self.collections.find_bare(collection_id).await?.is_none() {
                tracing::warn!(
                    "Quotation {} update rejected: collection {} not found",
                    id,
                    collection_id
                );
                return Err(DomainError::collection_not_found(collection_id));
            }
        }

        if let Some(title) = supplied(input.title) {
            quotation.title = title;
        }
        if let Some(collection_id) = collection_id {
            quotation.collection_id = collection_id;
        }

        let updated = self
            .quotations
            .update(id, quotation)
            .await?
            .ok_or_else(|| DomainError::quotation_not_found(id))?;

        tracing::info!("Quotation {} updated", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.require(id).await?;
        self.quotations.delete(id).await?;
        tracing::info!("Quotation {} deleted", id);
        Ok(())
    }

    /// Load the bare quotation or fail with NotFound
    async fn require(&self, id: i32) -> Result<Quotation, DomainError> {
        match self.quotations.find_bare(id).await? {
            Some(quotation) => Ok(quotation),
            None => {
                tracing::warn!("Quotation {} not found", id);
                Err(DomainError::quotation_not_found(id))
            }
        }
    }
}

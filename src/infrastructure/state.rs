//! Application state containing services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{CollectionRepository, QuotationRepository};
use crate::infrastructure::{SeaOrmCollectionRepository, SeaOrmQuotationRepository};
use crate::services::{CollectionService, QuotationService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (health checks)
    db: DatabaseConnection,
    pub collections: CollectionService,
    pub quotations: QuotationService,
}

impl AppState {
    /// Wire repositories and services over one connection
    pub fn new(db: DatabaseConnection) -> Self {
        let collection_repo: Arc<dyn CollectionRepository> =
            Arc::new(SeaOrmCollectionRepository::new(db.clone()));
        let quotation_repo: Arc<dyn QuotationRepository> =
            Arc::new(SeaOrmQuotationRepository::new(db.clone()));

        Self {
            db,
            collections: CollectionService::new(collection_repo.clone()),
            quotations: QuotationService::new(quotation_repo, collection_repo),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

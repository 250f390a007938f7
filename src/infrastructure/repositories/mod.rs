//! Repository implementations using SeaORM

pub mod collection_repository;
pub mod quotation_repository;

pub use collection_repository::SeaOrmCollectionRepository;
pub use quotation_repository::SeaOrmQuotationRepository;

//! Collection Service - existence checks and partial updates for collections

use std::sync::Arc;

use super::supplied;
use crate::domain::{
    Collection, CollectionDetails, CollectionRepository, CreateCollectionInput, DomainError,
    UpdateCollectionInput,
};

#[derive(Clone)]
pub struct CollectionService {
    repo: Arc<dyn CollectionRepository>,
}

impl CollectionService {
    pub fn new(repo: Arc<dyn CollectionRepository>) -> Self {
        Self { repo }
    }

    /// List collections, optionally filtered by a title substring
    pub async fn find_all(&self, title: Option<String>) -> Result<Vec<Collection>, DomainError> {
        tracing::debug!("List collections - filter: {:?}", title);
        self.repo.find_all(title).await
    }

    /// Get a collection and its quotations
    pub async fn find_by_id(&self, id: i32) -> Result<CollectionDetails, DomainError> {
        match self.repo.find_by_id(id).await? {
            Some(details) => Ok(details),
            None => {
                tracing::warn!("Collection {} not found", id);
                Err(DomainError::collection_not_found(id))
            }
        }
    }

    pub async fn create(&self, input: CreateCollectionInput) -> Result<Collection, DomainError> {
        let collection = self.repo.create(input).await?;
        tracing::info!("Collection {} created", collection.id);
        Ok(collection)
    }

    /// Apply the non-empty fields of `input` over the stored collection.
    ///
    /// Load and persist are two separate gateway calls; concurrent updates
    /// to the same collection are last-writer-wins.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateCollectionInput,
    ) -> Result<Collection, DomainError> {
        let mut collection = self.require(id).await?;

        if let Some(author) = supplied(input.author) {
            collection.author = author;
        }
        if let Some(title) = supplied(input.title) {
            collection.title = title;
        }
        if let Some(subtitle) = supplied(input.subtitle) {
            collection.subtitle = Some(subtitle);
        }
        if let Some(image) = supplied(input.image) {
            collection.image = image;
        }

        let updated = self
            .repo
            .update(id, collection)
            .await?
            .ok_or_else(|| DomainError::collection_not_found(id))?;

        tracing::info!("Collection {} updated", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.require(id).await?;
        self.repo.delete(id).await?;
        tracing::info!("Collection {} deleted", id);
        Ok(())
    }

    /// Load the bare collection or fail with NotFound
    async fn require(&self, id: i32) -> Result<Collection, DomainError> {
        match self.repo.find_bare(id).await? {
            Some(collection) => Ok(collection),
            None => {
                tracing::warn!("Collection {} not found", id);
                Err(DomainError::collection_not_found(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::InMemoryStore;

    fn service(store: &Arc<InMemoryStore>) -> CollectionService {
        CollectionService::new(store.clone())
    }

    fn input() -> CreateCollectionInput {
        CreateCollectionInput {
            title: "titulo".to_string(),
            subtitle: Some("subtitulo".to_string()),
            image: "imagem".to_string(),
            author: "autor".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_all_forwards_filter() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        svc.create(input()).await.unwrap();
        svc.create(CreateCollectionInput {
            title: "Outra".to_string(),
            ..input()
        })
        .await
        .unwrap();

        assert_eq!(svc.find_all(None).await.unwrap().len(), 2);

        let filtered = svc.find_all(Some("utr".to_string())).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Outra");
        assert!(store.calls().contains(&"collection.find_all(Some(\"utr\"))".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_matching_record() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let created = svc.create(input()).await.unwrap();

        let found = svc.find_by_id(created.id).await.unwrap();
        assert_eq!(found.collection.id, created.id);
        assert!(found.quotations.is_empty());
    }

    #[tokio::test]
    async fn test_missing_collection_is_not_found_everywhere() {
        let store = InMemoryStore::new();
        let svc = service(&store);

        assert!(matches!(svc.find_by_id(42).await, Err(DomainError::NotFound(_))));
        assert!(matches!(
            svc.update(42, UpdateCollectionInput::default()).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(svc.delete(42).await, Err(DomainError::NotFound(_))));

        // Nothing was persisted or deleted
        assert!(
            store
                .calls()
                .iter()
                .all(|c| !c.starts_with("collection.update") && !c.starts_with("collection.delete"))
        );
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let store = InMemoryStore::new();
        let created = service(&store).create(input()).await.unwrap();

        assert!(created.id > 0);
        assert!(!created.created_at.is_empty());
        assert_eq!(created.subtitle.as_deref(), Some("subtitulo"));
    }

    #[tokio::test]
    async fn test_update_title_only_changes_title() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let created = svc.create(input()).await.unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateCollectionInput {
                    title: Some("T".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Collection {
                title: "T".to_string(),
                ..created
            }
        );
    }

    #[tokio::test]
    async fn test_update_without_fields_still_round_trips() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let created = svc.create(input()).await.unwrap();
        store.clear_calls();

        let updated = svc
            .update(created.id, UpdateCollectionInput::default())
            .await
            .unwrap();

        assert_eq!(updated, created);
        assert_eq!(
            store.calls(),
            vec![
                format!("collection.find_bare({})", created.id),
                format!("collection.update({})", created.id),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_ignores_empty_strings() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let created = svc.create(input()).await.unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateCollectionInput {
                    title: Some(String::new()),
                    subtitle: Some(String::new()),
                    image: Some("nova-imagem".to_string()),
                    author: Some(String::new()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "titulo");
        assert_eq!(updated.subtitle.as_deref(), Some("subtitulo"));
        assert_eq!(updated.author, "autor");
        assert_eq!(updated.image, "nova-imagem");
    }

    #[tokio::test]
    async fn test_update_fails_when_row_vanishes_before_reload() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let created = svc.create(input()).await.unwrap();
        store.vanish_collection_on_update(created.id);

        // Row vanished between load and persist
        let result = svc
            .update(
                created.id,
                UpdateCollectionInput {
                    author: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_checks_existence_first() {
        let store = InMemoryStore::new();
        let svc = service(&store);
        let created = svc.create(input()).await.unwrap();
        store.clear_calls();

        svc.delete(created.id).await.unwrap();
        assert_eq!(
            store.calls(),
            vec![
                format!("collection.find_bare({})", created.id),
                format!("collection.delete({})", created.id),
            ]
        );

        let err = svc.delete(created.id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Collection with ID {} not found", created.id)
        );
    }
}

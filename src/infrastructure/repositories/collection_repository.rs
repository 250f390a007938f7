//! SeaORM implementation of CollectionRepository
#![allow(clippy::needless_update)] // SeaORM ActiveModels require ..Default::default()

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{
    Collection, CollectionDetails, CollectionRepository, CreateCollectionInput, DomainError,
    Quotation,
};
use crate::models::collection::{ActiveModel, Column, Entity as CollectionEntity, Model};
use crate::models::quotation::{self, Entity as QuotationEntity};

impl From<Model> for Collection {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            image: model.image,
            author: model.author,
            created_at: model.created_at,
        }
    }
}

/// SeaORM-based implementation of CollectionRepository
pub struct SeaOrmCollectionRepository {
    db: DatabaseConnection,
}

impl SeaOrmCollectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository for SeaOrmCollectionRepository {
    async fn find_all(&self, title: Option<String>) -> Result<Vec<Collection>, DomainError> {
        let mut query = CollectionEntity::find();

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            // Bound as a parameter: LIKE '%' || ? || '%'
            query = query.filter(Column::Title.contains(title));
        }

        let collections = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(collections.into_iter().map(Collection::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CollectionDetails>, DomainError> {
        let Some(model) = CollectionEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let quotations = model
            .find_related(QuotationEntity)
            .order_by_asc(quotation::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Some(CollectionDetails {
            collection: Collection::from(model),
            quotations: quotations.into_iter().map(Quotation::from).collect(),
        }))
    }

    async fn find_bare(&self, id: i32) -> Result<Option<Collection>, DomainError> {
        let collection = CollectionEntity::find_by_id(id).one(&self.db).await?;
        Ok(collection.map(Collection::from))
    }

    async fn create(&self, input: CreateCollectionInput) -> Result<Collection, DomainError> {
        let new_collection = ActiveModel {
            title: Set(input.title),
            subtitle: Set(input.subtitle),
            image: Set(input.image),
            author: Set(input.author),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = new_collection.insert(&self.db).await?;
        Ok(Collection::from(result))
    }

    async fn update(
        &self,
        id: i32,
        collection: Collection,
    ) -> Result<Option<Collection>, DomainError> {
        // id and created_at are immutable, leave them NotSet
        let changes = ActiveModel {
            title: Set(collection.title),
            subtitle: Set(collection.subtitle),
            image: Set(collection.image),
            author: Set(collection.author),
            ..Default::default()
        };

        CollectionEntity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        self.find_bare(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        CollectionEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

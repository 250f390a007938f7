//! SeaORM implementation of QuotationRepository
#![allow(clippy::needless_update)] // SeaORM ActiveModels require ..Default::default()

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use crate::domain::{
    CollectionSummary, CreateQuotationInput, DomainError, Quotation, QuotationDetails,
    QuotationRepository,
};
use crate::models::collection;
use crate::models::quotation::{
    ActiveModel, Column, Entity as QuotationEntity, Model, Relation,
};

impl From<Model> for Quotation {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            collection_id: model.collection_id,
            created_at: model.created_at,
        }
    }
}

/// Flat row produced by the quotation/collection join.
/// Collection columns are nullable because listings use an outer join.
#[derive(Debug, FromQueryResult)]
struct QuotationRow {
    id: i32,
    titulo: String,
    id_colecao: i32,
    created_at: String,
    colecao_id: Option<i32>,
    colecao_titulo: Option<String>,
    colecao_subtitulo: Option<String>,
    colecao_imagem: Option<String>,
    colecao_autor: Option<String>,
}

impl From<QuotationRow> for QuotationDetails {
    fn from(row: QuotationRow) -> Self {
        let collection = match (
            row.colecao_id,
            row.colecao_titulo,
            row.colecao_imagem,
            row.colecao_autor,
        ) {
            (Some(id), Some(title), Some(image), Some(author)) => Some(CollectionSummary {
                id,
                title,
                subtitle: row.colecao_subtitulo,
                image,
                author,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.titulo,
            collection_id: row.id_colecao,
            created_at: row.created_at,
            collection,
        }
    }
}

/// SeaORM-based implementation of QuotationRepository
pub struct SeaOrmQuotationRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuotationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Quotation columns plus the parent collection's public columns
    fn joined(join: JoinType) -> Select<QuotationEntity> {
        QuotationEntity::find()
            .select_only()
            .column_as(Column::Id, "id")
            .column_as(Column::Title, "titulo")
            .column_as(Column::CollectionId, "id_colecao")
            .column_as(Column::CreatedAt, "created_at")
            .column_as(collection::Column::Id, "colecao_id")
            .column_as(collection::Column::Title, "colecao_titulo")
            .column_as(collection::Column::Subtitle, "colecao_subtitulo")
            .column_as(collection::Column::Image, "colecao_imagem")
            .column_as(collection::Column::Author, "colecao_autor")
            .join(join, Relation::Collection.def())
    }
}

#[async_trait]
impl QuotationRepository for SeaOrmQuotationRepository {
    async fn find_all(
        &self,
        title: Option<String>,
    ) -> Result<Vec<QuotationDetails>, DomainError> {
        let mut query = Self::joined(JoinType::LeftJoin);

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            query = query.filter(Column::Title.contains(title));
        }

        let rows = query
            .order_by_asc(Column::Id)
            .into_model::<QuotationRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(QuotationDetails::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<QuotationDetails>, DomainError> {
        // Inner join: a quotation whose collection is gone is not found here
        let row = Self::joined(JoinType::InnerJoin)
            .filter(Column::Id.eq(id))
            .into_model::<QuotationRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(QuotationDetails::from))
    }

    async fn find_bare(&self, id: i32) -> Result<Option<Quotation>, DomainError> {
        let quotation = QuotationEntity::find_by_id(id).one(&self.db).await?;
        Ok(quotation.map(Quotation::from))
    }

    async fn create(&self, input: CreateQuotationInput) -> Result<Quotation, DomainError> {
        let new_quotation = ActiveModel {
            title: Set(input.title),
            collection_id: Set(input.collection_id),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = new_quotation.insert(&self.db).await?;
        Ok(Quotation::from(result))
    }

    async fn update(
        &self,
        id: i32,
        quotation: Quotation,
    ) -> Result<Option<Quotation>, DomainError> {
        let changes = ActiveModel {
            title: Set(quotation.title),
            collection_id: Set(quotation.collection_id),
            ..Default::default()
        };

        QuotationEntity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        self.find_bare(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        QuotationEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

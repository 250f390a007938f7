use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "colecao")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "subtitulo")]
    pub subtitle: Option<String>,
    #[sea_orm(column_name = "imagem")]
    pub image: String,
    #[sea_orm(column_name = "autor")]
    pub author: String,
    pub created_at: String, // RFC 3339
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quotation::Entity")]
    Quotation,
}

impl Related<super::quotation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Collection (`/colecao`) handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{
    COLLECTION_AUTHOR_MAX, COLLECTION_IMAGE_MAX, COLLECTION_SUBTITLE_MAX, COLLECTION_TITLE_MAX,
    TitleQuery, Validator,
};
use super::{error_response, message_response};
use crate::domain::{CreateCollectionInput, DomainError, UpdateCollectionInput};
use crate::infrastructure::AppState;

/// Request DTO for creating a collection
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "subtitulo")]
    pub subtitle: Option<String>,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
    #[serde(rename = "autor")]
    pub author: Option<String>,
}

impl CreateCollectionRequest {
    pub fn validate(self) -> Result<CreateCollectionInput, DomainError> {
        let mut v = Validator::default();
        let title = v.required("titulo", self.title, COLLECTION_TITLE_MAX);
        let image = v.required("imagem", self.image, COLLECTION_IMAGE_MAX);
        let author = v.required("autor", self.author, COLLECTION_AUTHOR_MAX);
        let subtitle = v.optional("subtitulo", self.subtitle, 0, COLLECTION_SUBTITLE_MAX);
        v.finish()?;

        Ok(CreateCollectionInput {
            title,
            subtitle,
            image,
            author,
        })
    }
}

/// Request DTO for partial collection updates
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCollectionRequest {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "subtitulo")]
    pub subtitle: Option<String>,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
    #[serde(rename = "autor")]
    pub author: Option<String>,
}

impl UpdateCollectionRequest {
    pub fn validate(self) -> Result<UpdateCollectionInput, DomainError> {
        let mut v = Validator::default();
        let title = v.optional("titulo", self.title, 0, COLLECTION_TITLE_MAX);
        let subtitle = v.optional("subtitulo", self.subtitle, 0, COLLECTION_SUBTITLE_MAX);
        let image = v.optional("imagem", self.image, 0, COLLECTION_IMAGE_MAX);
        let author = v.optional("autor", self.author, 0, COLLECTION_AUTHOR_MAX);
        v.finish()?;

        Ok(UpdateCollectionInput {
            title,
            subtitle,
            image,
            author,
        })
    }
}

#[utoipa::path(
    get,
    path = "/colecao",
    params(TitleQuery),
    responses(
        (status = 200, description = "All collections", body = [crate::domain::Collection]),
        (status = 422, description = "Invalid filter", body = crate::api::ValidationErrorResponse)
    ),
    tag = "colecao"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Response {
    let title = match query.validate() {
        Ok(title) => title,
        Err(e) => return error_response(e),
    };

    match state.collections.find_all(title).await {
        Ok(collections) => (StatusCode::OK, Json(collections)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/colecao/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection with its quotations", body = crate::domain::CollectionDetails),
        (status = 404, description = "Collection not found", body = crate::api::ErrorResponse)
    ),
    tag = "colecao"
)]
pub async fn get_collection(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.collections.find_by_id(id).await {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/colecao",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = crate::domain::Collection),
        (status = 422, description = "Invalid fields", body = crate::api::ValidationErrorResponse)
    ),
    tag = "colecao"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Response {
    let input = match payload.validate() {
        Ok(input) => input,
        Err(e) => return error_response(e),
    };

    match state.collections.create(input).await {
        Ok(collection) => (StatusCode::OK, Json(collection)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/colecao/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Collection updated", body = crate::domain::Collection),
        (status = 404, description = "Collection not found", body = crate::api::ErrorResponse),
        (status = 422, description = "Invalid fields", body = crate::api::ValidationErrorResponse)
    ),
    tag = "colecao"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCollectionRequest>,
) -> Response {
    let input = match payload.validate() {
        Ok(input) => input,
        Err(e) => return error_response(e),
    };

    match state.collections.update(id, input).await {
        Ok(collection) => (StatusCode::OK, Json(collection)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/colecao/{id}",
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection deleted", body = crate::api::MessageResponse),
        (status = 404, description = "Collection not found", body = crate::api::ErrorResponse)
    ),
    tag = "colecao"
)]
pub async fn delete_collection(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.collections.delete(id).await {
        Ok(()) => message_response("Colecao removida com sucesso!"),
        Err(e) => error_response(e),
    }
}

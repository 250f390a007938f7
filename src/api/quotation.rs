//! Quotation (`/citacao`) handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{
    QUOTATION_TITLE_MAX, QUOTATION_UPDATE_TITLE_MAX, QUOTATION_UPDATE_TITLE_MIN, TitleQuery,
    Validator,
};
use super::{error_response, message_response};
use crate::domain::{CreateQuotationInput, DomainError, UpdateQuotationInput};
use crate::infrastructure::AppState;

/// Request DTO for creating a quotation. Any other field in the body is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuotationRequest {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "id_colecao")]
    pub collection_id: Option<i32>,
}

impl CreateQuotationRequest {
    pub fn validate(self) -> Result<CreateQuotationInput, DomainError> {
        let mut v = Validator::default();
        let title = v.required("titulo", self.title, QUOTATION_TITLE_MAX);
        let collection_id = v.required_id("id_colecao", self.collection_id);
        v.finish()?;

        Ok(CreateQuotationInput {
            title,
            collection_id,
        })
    }
}

/// Request DTO for partial quotation updates
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateQuotationRequest {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "id_colecao")]
    pub collection_id: Option<i32>,
}

impl UpdateQuotationRequest {
    pub fn validate(self) -> Result<UpdateQuotationInput, DomainError> {
        let mut v = Validator::default();
        let title = v.optional(
            "titulo",
            self.title,
            QUOTATION_UPDATE_TITLE_MIN,
            QUOTATION_UPDATE_TITLE_MAX,
        );
        v.finish()?;

        Ok(UpdateQuotationInput {
            title,
            collection_id: self.collection_id,
        })
    }
}

#[utoipa::path(
    get,
    path = "/citacao",
    params(TitleQuery),
    responses(
        (status = 200, description = "All quotations with their collection", body = [crate::domain::QuotationDetails]),
        (status = 422, description = "Invalid filter", body = crate::api::ValidationErrorResponse)
    ),
    tag = "citacao"
)]
pub async fn list_quotations(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Response {
    let title = match query.validate() {
        Ok(title) => title,
        Err(e) => return error_response(e),
    };

    match state.quotations.find_all(title).await {
        Ok(quotations) => (StatusCode::OK, Json(quotations)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/citacao/{id}",
    params(("id" = i32, Path, description = "Quotation ID")),
    responses(
        (status = 200, description = "Quotation with its collection", body = crate::domain::QuotationDetails),
        (status = 404, description = "Quotation (or its collection) not found", body = crate::api::ErrorResponse)
    ),
    tag = "citacao"
)]
pub async fn get_quotation(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.quotations.find_by_id(id).await {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/citacao",
    request_body = CreateQuotationRequest,
    responses(
        (status = 200, description = "Quotation created", body = crate::domain::Quotation),
        (status = 422, description = "Invalid fields", body = crate::api::ValidationErrorResponse)
    ),
    tag = "citacao"
)]
pub async fn create_quotation(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuotationRequest>,
) -> Response {
    let input = match payload.validate() {
        Ok(input) => input,
        Err(e) => return error_response(e),
    };

    match state.quotations.create(input).await {
        Ok(quotation) => (StatusCode::OK, Json(quotation)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/citacao/{id}",
    params(("id" = i32, Path, description = "Quotation ID")),
    request_body = UpdateQuotationRequest,
    responses(
        (status = 200, description = "Quotation updated", body = crate::domain::Quotation),
        (status = 404, description = "Quotation or target collection not found", body = crate::api::ErrorResponse),
        (status = 422, description = "Invalid fields", body = crate::api::ValidationErrorResponse)
    ),
    tag = "citacao"
)]
pub async fn update_quotation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuotationRequest>,
) -> Response {
    let input = match payload.validate() {
        Ok(input) => input,
        Err(e) => return error_response(e),
    };

    match state.quotations.update(id, input).await {
        Ok(quotation) => (StatusCode::OK, Json(quotation)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/citacao/{id}",
    params(("id" = i32, Path, description = "Quotation ID")),
    responses(
        (status = 200, description = "Quotation deleted", body = crate::api::MessageResponse),
        (status = 404, description = "Quotation not found", body = crate::api::ErrorResponse)
    ),
    tag = "citacao"
)]
pub async fn delete_quotation(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.quotations.delete(id).await {
        Ok(()) => message_response("Citacao removida com sucesso!"),
        Err(e) => error_response(e),
    }
}

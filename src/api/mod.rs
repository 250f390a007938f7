pub mod collection;
pub mod health;
pub mod quotation;
pub mod validation;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DomainError, FieldError};
use crate::infrastructure::AppState;

/// Body of 404/500 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of 422 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Body of successful deletes
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Translate a domain failure into its HTTP response
pub(crate) fn error_response(e: DomainError) -> Response {
    match e {
        DomainError::NotFound(msg) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse { error: msg })).into_response()
        }
        DomainError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse { errors }),
        )
            .into_response(),
        DomainError::Database(msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", msg),
                }),
            )
                .into_response()
        }
    }
}

pub(crate) fn message_response(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn collection_routes(base: &str) -> Router<AppState> {
    Router::new()
        .route(
            base,
            get(collection::list_collections).post(collection::create_collection),
        )
        .route(
            &format!("{}/:id", base),
            get(collection::get_collection)
                .put(collection::update_collection)
                .delete(collection::delete_collection),
        )
}

fn quotation_routes(base: &str) -> Router<AppState> {
    Router::new()
        .route(
            base,
            get(quotation::list_quotations).post(quotation::create_quotation),
        )
        .route(
            &format!("{}/:id", base),
            get(quotation::get_quotation)
                .put(quotation::update_quotation)
                .delete(quotation::delete_quotation),
        )
}

/// Resource routes, mounted under the Portuguese names and English aliases
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(collection_routes("/colecao"))
        .merge(collection_routes("/collection"))
        .merge(quotation_routes("/citacao"))
        .merge(quotation_routes("/quotation"))
        .with_state(state)
}

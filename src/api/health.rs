use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are healthy"),
        (status = 503, description = "Database is unreachable")
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db = state.db();
    let ping = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1".to_owned(),
        ))
        .await;

    let (status, database) = match ping {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ok" } else { "degraded" },
            "service": "citacoes-api",
            "version": env!("CARGO_PKG_VERSION"),
            "database": database
        })),
    )
}

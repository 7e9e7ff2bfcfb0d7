pub mod images;
pub mod items;

use axum::{extract::State, Json};
use serde_json::json;

use crate::{error::AppResult, AppState};

/// Liveness plus a round trip to the database.
pub async fn health(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("SELECT 1").execute(&state.db).await?;

    Ok(Json(json!({ "status": "ok", "database": "sqlite" })))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    auth::Admin,
    db,
    error::AppResult,
    models::{CreateItem, UpdateItem},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let items = db::fetch_all_items(&state.db).await?;

    info!(count = items.len(), "Listed items");

    Ok((StatusCode::OK, Json(json!({ "items": items }))))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    _admin: Admin,
    Json(payload): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let item = db::insert_item(&state.db, &payload).await?;

    info!(id = item.id, name = ?item.name, quantity = ?item.quantity, "Created item");

    Ok((StatusCode::OK, Json(json!({ "item": item }))))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let item = db::fetch_item_by_id(&state.db, id).await?;

    info!(id, "Fetched item");

    Ok((StatusCode::OK, Json(json!({ "item": item }))))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    _admin: Admin,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateItem>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let item = db::update_item(&state.db, id, &payload).await?;

    info!(id, name = ?item.name, quantity = ?item.quantity, "Updated item");

    Ok((StatusCode::OK, Json(json!({ "item": item }))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    _admin: Admin,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    db::delete_item(&state.db, id).await?;

    info!(id, "Deleted item");

    Ok((StatusCode::OK, Json(json!({ "message": "Item deleted" }))))
}

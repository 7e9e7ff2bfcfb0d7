use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    AppState,
};

/// Multipart form field carrying the image.
const FILE_FIELD: &str = "file";

// ── Upload ────────────────────────────────────────────────────────────────────

/// Attach an image to an item. Not behind the auth gate.
pub async fn upload_item_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // 404 before touching the filesystem
    db::fetch_item_by_id(&state.db, id).await?;

    let (filename, data) = loop {
        let field = multipart
            .next_field()
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("missing `{FILE_FIELD}` field")))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("uploaded file has no filename".to_string()))?
            .to_string();
        let data = field.bytes().await?;

        break (filename, data);
    };

    let path = state.files.save(&filename, &data).await?;
    let item = db::set_item_image(&state.db, id, &filename).await?;

    info!(id, filename = %filename, size = data.len(), path = %path.display(), "Stored item image");

    Ok((StatusCode::OK, Json(json!({ "item": item }))))
}

// ── Serve ─────────────────────────────────────────────────────────────────────

pub async fn serve_static(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> AppResult<([(header::HeaderName, String); 1], Vec<u8>)> {
    let bytes = state.files.load(&file).await?;
    let mime = mime_guess::from_path(&file).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes))
}

//! Item inventory service: CRUD over a SQLite `items` table, Basic-auth
//! gated writes, and image uploads served back from a local directory.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;

use crate::auth::Credentials;
use crate::storage::FileStore;

/// Per-request handle on the pool, upload store and admin credentials.
/// Nothing in here is mutated after start-up.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub files: Arc<dyn FileStore>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(db: SqlitePool, files: impl FileStore + 'static, credentials: Credentials) -> Self {
        Self {
            db,
            files: Arc::new(files),
            credentials: Arc::new(credentials),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Items CRUD ──────────────────────────────────────────────────────
        .route(
            "/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/items/:id",
            get(handlers::items::get_item)
                .patch(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        )

        // ── Images ──────────────────────────────────────────────────────────
        .route(
            "/item-image/:id",
            patch(handlers::images::upload_item_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/static/:file", get(handlers::images::serve_static))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Shared helpers for HTTP-level tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use item_inventory::{auth::Credentials, build_router, db, storage::LocalFileStore, AppState};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password";
pub const BOUNDARY: &str = "----item-inventory-test-boundary";

/// A router wired to a throwaway database and uploads directory.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_credentials(Credentials::new(USERNAME, Secret::new(PASSWORD.to_string()))).await
    }

    pub async fn with_credentials(credentials: Credentials) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let pool = db::connect(&url, 1).await.unwrap();
        db::init_schema(&pool).await.unwrap();

        let files = LocalFileStore::new(dir.path().join("uploads"));
        let router = build_router(AppState::new(pool, files, credentials));

        Self { router, dir }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Create an item as the admin and return its id.
    pub async fn create_item(&self, name: &str, quantity: i64) -> i64 {
        let (status, body) = self
            .send_json(json_request(
                "POST",
                "/items",
                Some(basic(USERNAME, PASSWORD)),
                serde_json::json!({ "name": name, "quantity": quantity }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["item"]["id"].as_i64().unwrap()
    }

    pub async fn get_item(&self, id: i64) -> (StatusCode, Value) {
        self.send_json(empty_request("GET", &format!("/items/{id}"), None))
            .await
    }
}

pub fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub fn json_request(method: &str, uri: &str, auth: Option<String>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

/// Raw body with an explicit content type, for payloads `json!` cannot express.
pub fn raw_request(
    method: &str,
    uri: &str,
    auth: Option<String>,
    content_type: &str,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// A single-part multipart body with `field` carrying `filename`.
pub fn multipart_request(uri: &str, field: &str, filename: &str, data: &[u8]) -> Request<Body> {
    multipart_with_disposition(
        uri,
        &format!("form-data; name=\"{field}\"; filename=\"{filename}\""),
        data,
    )
}

/// A single-part multipart body whose part has no `filename` parameter.
pub fn multipart_request_without_filename(uri: &str, field: &str, data: &[u8]) -> Request<Body> {
    multipart_with_disposition(uri, &format!("form-data; name=\"{field}\""), data)
}

fn multipart_with_disposition(uri: &str, disposition: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

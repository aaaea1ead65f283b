//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use nimbus_core::config::AppConfig;

/// Boundary used by the hand-built multipart bodies.
const BOUNDARY: &str = "nimbus-test-boundary";

/// Test application context over a temporary storage root.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Temporary storage root; dropped (and deleted) with the app.
    pub root: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with default limits.
    pub async fn new() -> Self {
        Self::with_max_upload(104_857_600).await
    }

    /// Create a test application with a custom per-file upload ceiling.
    pub async fn with_max_upload(max_upload_size_bytes: u64) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp storage root");

        let mut config = AppConfig::default();
        config.storage.root_path = root.path().to_string_lossy().into_owned();
        config.storage.max_upload_size_bytes = max_upload_size_bytes;

        let state = nimbus_api::app::build_state(config)
            .await
            .expect("Failed to build app state");

        Self {
            router: nimbus_api::router::build_router(state),
            root,
        }
    }

    /// Send a request and parse the response body as JSON.
    pub async fn request(&self, req: Request<Body>) -> (StatusCode, Value) {
        let (status, _, bytes) = self.request_raw(req).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// Send a request and return the raw response parts.
    pub async fn request_raw(&self, req: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Request failed");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        (status, headers, bytes)
    }

    /// GET a path.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST a JSON body.
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// PUT a JSON body.
    pub async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("PUT")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// DELETE a path.
    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("DELETE")
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// POST a multipart upload with an optional folder field (sent first)
    /// and the given (filename, content) file fields.
    pub async fn upload(
        &self,
        folder: Option<&str>,
        files: &[(&str, &[u8])],
    ) -> (StatusCode, Value) {
        self.request(multipart_request(folder, files)).await
    }
}

/// Build a multipart/form-data upload request by hand.
pub fn multipart_request(folder: Option<&str>, files: &[(&str, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();

    if let Some(folder) = folder {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"folder\"\r\n\r\n");
        body.extend_from_slice(folder.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (name, content) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

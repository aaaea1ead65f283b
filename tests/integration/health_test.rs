//! Health endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_reports_ok_with_version() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
}

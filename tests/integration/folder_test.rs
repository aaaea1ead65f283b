//! Folder creation flows.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_folder_at_root() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/folders", json!({ "name": "photos" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["folder"]["id"], "photos");
    assert_eq!(body["folder"]["name"], "photos");
    assert_eq!(body["folder"]["type"], "folder");
    assert!(app.root.path().join("photos").is_dir());
}

#[tokio::test]
async fn create_nested_folder_builds_intermediate_parents() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/folders", json!({ "name": "inbox", "parent": "a/b" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["folder"]["id"], "a/b/inbox");
    assert!(app.root.path().join("a/b/inbox").is_dir());
}

#[tokio::test]
async fn duplicate_folder_conflicts() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post_json("/api/folders", json!({ "name": "photos" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post_json("/api/folders", json!({ "name": "photos" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn blank_folder_name_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/folders", json!({ "name": "   " }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn folder_name_with_separator_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/folders", json!({ "name": "a/b" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

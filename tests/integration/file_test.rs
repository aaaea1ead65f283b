//! Listing, info, download, rename, and delete flows.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn empty_root_lists_as_empty_success() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/files").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["files"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_a_missing_folder_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/files?folder=ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn listing_derives_types_from_extensions() {
    let app = TestApp::new().await;
    std::fs::create_dir(app.root.path().join("sub")).unwrap();
    std::fs::write(app.root.path().join("pic.jpeg"), b"img").unwrap();
    std::fs::write(app.root.path().join("song.mp3"), b"snd").unwrap();
    std::fs::write(app.root.path().join("mystery"), b"???").unwrap();

    let (status, body) = app.get("/api/files").await;

    assert_eq!(status, StatusCode::OK);
    let files = body["files"].as_array().unwrap();
    assert_eq!(files.len(), 4);
    // Folders sort first.
    assert_eq!(files[0]["type"], "folder");
    assert_eq!(files[0]["name"], "sub");

    let type_of = |name: &str| {
        files
            .iter()
            .find(|f| f["name"] == name)
            .map(|f| f["type"].clone())
            .unwrap()
    };
    assert_eq!(type_of("pic.jpeg"), "image");
    assert_eq!(type_of("song.mp3"), "audio");
    assert_eq!(type_of("mystery"), "default");
}

#[tokio::test]
async fn info_reports_a_nested_entry() {
    let app = TestApp::new().await;
    std::fs::create_dir(app.root.path().join("docs")).unwrap();
    std::fs::write(app.root.path().join("docs/brief.pdf"), b"0123456789").unwrap();

    let (status, body) = app.get("/api/files/docs%2Fbrief.pdf/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "docs/brief.pdf");
    assert_eq!(body["name"], "brief.pdf");
    assert_eq!(body["type"], "document");
    assert_eq!(body["size"], 10);
}

#[tokio::test]
async fn download_streams_content_with_display_name() {
    let app = TestApp::new().await;
    std::fs::write(app.root.path().join("notes.txt"), b"hello world").unwrap();

    let req = http::Request::builder()
        .uri("/api/download/notes.txt")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, headers, bytes) = app.request_raw(req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"hello world");
    let disposition = headers
        .get(http::header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.contains("notes.txt"));
}

#[tokio::test]
async fn download_of_missing_entry_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/download/ghost.txt").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn rename_returns_new_id_and_preserves_content() {
    let app = TestApp::new().await;
    std::fs::write(app.root.path().join("old.txt"), b"stable contents").unwrap();

    let (status, body) = app
        .put_json("/api/files/old.txt/rename", json!({ "name": "new.txt" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newId"], "new.txt");

    let req = http::Request::builder()
        .uri("/api/download/new.txt")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _, bytes) = app.request_raw(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"stable contents");
}

#[tokio::test]
async fn rename_onto_existing_name_conflicts() {
    let app = TestApp::new().await;
    std::fs::write(app.root.path().join("a.txt"), b"a").unwrap();
    std::fs::write(app.root.path().join("b.txt"), b"b").unwrap();

    let (status, body) = app
        .put_json("/api/files/a.txt/rename", json!({ "name": "b.txt" }))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn rename_with_blank_name_is_bad_request() {
    let app = TestApp::new().await;
    std::fs::write(app.root.path().join("a.txt"), b"a").unwrap();

    let (status, body) = app
        .put_json("/api/files/a.txt/rename", json!({ "name": "  " }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn delete_removes_a_folder_and_its_descendants() {
    let app = TestApp::new().await;
    std::fs::create_dir_all(app.root.path().join("docs/deep")).unwrap();
    std::fs::write(app.root.path().join("docs/deep/x.txt"), b"x").unwrap();

    let (status, body) = app.delete("/api/files/docs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = app.get("/api/files?folder=docs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_missing_entry_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.delete("/api/files/ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn traversal_paths_are_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/files?folder=../outside").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

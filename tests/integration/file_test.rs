//! Integration tests for file operations.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::{TestApp, id_of, unique_name};

#[tokio::test]
async fn test_created_file_is_fetchable_and_listed_under_parent() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Invoices"), None).await;
    let folder_id = id_of(&folder);

    let title = unique_name("Jan2025.pdf");
    let file = app.create_file(&title, &folder_id, "pdf_mock_data").await;
    let file_id = id_of(&file);
    assert!(file_id.starts_with("file:"));

    let response = app.request("GET", &format!("/api/files/{file_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], title.as_str());
    assert_eq!(response.body["data"]["content"], "pdf_mock_data");

    let response = app
        .request("GET", &format!("/api/folders/{folder_id}/children"), None)
        .await;
    let files = response.body["data"]["files"].as_array().expect("files array");
    assert!(files.iter().any(|f| f["id"] == file_id.as_str()));
}

#[tokio::test]
async fn test_new_file_timestamps_are_equal() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Notes"), None).await;
    let file = app
        .create_file(&unique_name("note.md"), &id_of(&folder), "")
        .await;

    assert_eq!(file["created_at"], file["updated_at"]);
}

#[tokio::test]
async fn test_create_file_under_file_parent_is_rejected() {
    let app = TestApp::new().await;

    let body = serde_json::json!({
        "title": unique_name("orphan.txt"),
        "parent_id": format!("file:{}", Uuid::new_v4()),
        "content": "",
    });
    let response = app.request("POST", "/api/files", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_get_missing_file_returns_null_not_error() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", &format!("/api/files/file:{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_get_file_with_folder_id_is_rejected() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Docs"), None).await;

    let response = app
        .request("GET", &format!("/api/files/{}", id_of(&folder)), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_update_file_content_refreshes_updated_at() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Docs"), None).await;
    let file = app
        .create_file(&unique_name("README.txt"), &id_of(&folder), "Welcome")
        .await;
    let file_id = id_of(&file);

    let response = app
        .request(
            "PUT",
            &format!("/api/files/{file_id}/content"),
            Some(serde_json::json!({ "content": "Updated README content!" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["content"], "Updated README content!");

    let created_at: chrono::DateTime<chrono::Utc> = file["created_at"]
        .as_str()
        .expect("created_at")
        .parse()
        .expect("timestamp");
    let updated_at: chrono::DateTime<chrono::Utc> = response.body["data"]["updated_at"]
        .as_str()
        .expect("updated_at")
        .parse()
        .expect("timestamp");
    assert!(updated_at >= created_at);
    assert_eq!(response.body["data"]["created_at"], file["created_at"]);

    // Verify by fetching again.
    let response = app.request("GET", &format!("/api/files/{file_id}"), None).await;
    assert_eq!(response.body["data"]["content"], "Updated README content!");
}

#[tokio::test]
async fn test_update_missing_file_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/files/file:{}/content", Uuid::new_v4()),
            Some(serde_json::json!({ "content": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_file_updates_title() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Docs"), None).await;
    let file = app
        .create_file(&unique_name("README.txt"), &id_of(&folder), "Welcome")
        .await;
    let file_id = id_of(&file);
    let new_title = unique_name("README_v2.txt");

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{file_id}/rename"),
            Some(serde_json::json!({ "new_name": new_title })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/files/{file_id}"), None).await;
    assert_eq!(response.body["data"]["title"], new_title.as_str());
}

#[tokio::test]
async fn test_deleted_file_reads_as_absent() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Trash"), None).await;
    let folder_id = id_of(&folder);
    let file = app
        .create_file(&unique_name("old_config.json"), &folder_id, "{}")
        .await;
    let file_id = id_of(&file);

    let response = app.request("DELETE", &format!("/api/files/{file_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/files/{file_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].is_null());

    // The incoming containment edge went with it.
    let response = app
        .request("GET", &format!("/api/folders/{folder_id}/children"), None)
        .await;
    assert!(response.body["data"]["files"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_file_rejects_folder_id() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Keep"), None).await;
    let folder_id = id_of(&folder);

    let response = app
        .request("DELETE", &format!("/api/files/{folder_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");

    // The folder was untouched.
    let response = app
        .request("GET", &format!("/api/folders/{folder_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_missing_file_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request("DELETE", &format!("/api/files/file:{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

//! Integration tests for move semantics and the end-to-end hierarchy
//! scenario.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::{TestApp, id_of, unique_name};

#[tokio::test]
async fn test_move_file_preserves_single_parent() {
    let app = TestApp::new().await;
    let root = app.create_folder(&unique_name("Root"), None).await;
    let root_id = id_of(&root);
    let docs = app
        .create_folder(&unique_name("Documents"), Some(&root_id))
        .await;
    let docs_id = id_of(&docs);
    let file = app
        .create_file(&unique_name("README.txt"), &root_id, "Welcome")
        .await;
    let file_id = id_of(&file);

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{file_id}/move"),
            Some(serde_json::json!({ "new_parent_id": docs_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Gone from the old parent, present under the new one.
    let response = app
        .request("GET", &format!("/api/folders/{root_id}/children"), None)
        .await;
    let root_files = response.body["data"]["files"].as_array().unwrap();
    assert!(!root_files.iter().any(|f| f["id"] == file_id.as_str()));

    let response = app
        .request("GET", &format!("/api/folders/{docs_id}/children"), None)
        .await;
    let docs_files = response.body["data"]["files"].as_array().unwrap();
    assert!(docs_files.iter().any(|f| f["id"] == file_id.as_str()));

    // Exactly one containment edge into the moved node.
    let file_uuid: Uuid = file_id
        .strip_prefix("file:")
        .expect("canonical id")
        .parse()
        .expect("uuid");
    let edges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contains WHERE child_id = $1")
        .bind(file_uuid)
        .fetch_one(&app.db_pool)
        .await
        .expect("edge count");
    assert_eq!(edges, 1);
}

#[tokio::test]
async fn test_moved_folder_stops_being_a_root() {
    let app = TestApp::new().await;
    let attic = app.create_folder(&unique_name("Attic"), None).await;
    let attic_id = id_of(&attic);
    let cellar = app.create_folder(&unique_name("Cellar"), None).await;
    let cellar_id = id_of(&cellar);

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{attic_id}/move"),
            Some(serde_json::json!({ "new_parent_id": cellar_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/folders", None).await;
    let roots = response.body["data"].as_array().unwrap();
    assert!(!roots.iter().any(|f| f["id"] == attic_id.as_str()));
    assert!(roots.iter().any(|f| f["id"] == cellar_id.as_str()));

    let response = app
        .request("GET", &format!("/api/folders/{cellar_id}/children"), None)
        .await;
    let folders = response.body["data"]["folders"].as_array().unwrap();
    assert!(folders.iter().any(|f| f["id"] == attic_id.as_str()));
}

#[tokio::test]
async fn test_move_into_file_destination_is_rejected() {
    let app = TestApp::new().await;
    let root = app.create_folder(&unique_name("Root"), None).await;
    let root_id = id_of(&root);
    let docs = app
        .create_folder(&unique_name("Documents"), Some(&root_id))
        .await;
    let file = app
        .create_file(&unique_name("README.txt"), &root_id, "Welcome")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{}/move", id_of(&docs)),
            Some(serde_json::json!({ "new_parent_id": id_of(&file) })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_move_folder_into_itself_is_rejected() {
    let app = TestApp::new().await;
    let folder = app.create_folder(&unique_name("Loop"), None).await;
    let id = id_of(&folder);

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{id}/move"),
            Some(serde_json::json!({ "new_parent_id": id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_folder_into_descendant_is_rejected() {
    let app = TestApp::new().await;
    let outer = app.create_folder(&unique_name("Outer"), None).await;
    let outer_id = id_of(&outer);
    let inner = app
        .create_folder(&unique_name("Inner"), Some(&outer_id))
        .await;
    let inner_id = id_of(&inner);

    let response = app
        .request(
            "PUT",
            &format!("/api/items/{outer_id}/move"),
            Some(serde_json::json!({ "new_parent_id": inner_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // The hierarchy is unchanged: the inner folder is still a child.
    let response = app
        .request("GET", &format!("/api/folders/{outer_id}/children"), None)
        .await;
    let folders = response.body["data"]["folders"].as_array().unwrap();
    assert!(folders.iter().any(|f| f["id"] == inner_id.as_str()));
}

#[tokio::test]
async fn test_move_missing_item_is_not_found() {
    let app = TestApp::new().await;
    let dest = app.create_folder(&unique_name("Dest"), None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/items/file:{}/move", Uuid::new_v4()),
            Some(serde_json::json!({ "new_parent_id": id_of(&dest) })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_missing_item_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/items/file:{}/rename", Uuid::new_v4()),
            Some(serde_json::json!({ "new_name": "ghost.txt" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_item_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/items/user:{}/rename", Uuid::new_v4()),
            Some(serde_json::json!({ "new_name": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_explorer_walkthrough() {
    let app = TestApp::new().await;

    // Seed: Root containing Documents and README.txt.
    let root = app.create_folder(&unique_name("Root"), None).await;
    let root_id = id_of(&root);
    let docs = app
        .create_folder(&unique_name("Documents"), Some(&root_id))
        .await;
    let docs_id = id_of(&docs);
    let readme = app
        .create_file(&unique_name("README.txt"), &root_id, "Welcome")
        .await;
    let readme_id = id_of(&readme);

    // The root is listed; its contents are one folder and one file.
    let response = app.request("GET", "/api/folders", None).await;
    let roots = response.body["data"].as_array().unwrap();
    assert!(roots.iter().any(|f| f["id"] == root_id.as_str()));

    let response = app
        .request("GET", &format!("/api/folders/{root_id}/children"), None)
        .await;
    assert_eq!(response.body["data"]["folders"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["data"]["files"].as_array().unwrap().len(), 1);

    // Move the file into Documents.
    let response = app
        .request(
            "PUT",
            &format!("/api/items/{readme_id}/move"),
            Some(serde_json::json!({ "new_parent_id": docs_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/folders/{root_id}/children"), None)
        .await;
    assert!(response.body["data"]["files"].as_array().unwrap().is_empty());

    let response = app
        .request("GET", &format!("/api/folders/{docs_id}/children"), None)
        .await;
    let docs_files = response.body["data"]["files"].as_array().unwrap();
    assert!(docs_files.iter().any(|f| f["id"] == readme_id.as_str()));

    // Cascade-delete Documents; the moved file disappears with it.
    let response = app
        .request("DELETE", &format!("/api/folders/{docs_id}/tree"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/files/{readme_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"].is_null());
}

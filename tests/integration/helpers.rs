//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use arbor_api::AppState;
use arbor_core::config::AppConfig;
use arbor_database::DatabasePool;
use arbor_database::repositories::{EdgeRepository, FileRepository, FolderRepository};
use arbor_service::{FileService, FolderService, ItemService};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application wired against the test database.
    ///
    /// Tests run concurrently against a shared database, so scenarios use
    /// uniquely named nodes and membership assertions instead of global
    /// counts.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.pool().clone();

        arbor_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
        let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
        let edge_repo = Arc::new(EdgeRepository::new(db_pool.clone()));

        let folder_service = Arc::new(FolderService::new(Arc::clone(&folder_repo)));
        let file_service = Arc::new(FileService::new(Arc::clone(&file_repo)));
        let item_service = Arc::new(ItemService::new(
            Arc::clone(&folder_repo),
            Arc::clone(&file_repo),
            Arc::clone(&edge_repo),
        ));

        let state = AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            folder_service,
            file_service,
            item_service,
        };

        let router = arbor_api::build_router(state);

        Self { router, db_pool }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a folder through the API and return its JSON representation.
    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> Value {
        let mut body = serde_json::json!({ "name": name });
        if let Some(parent) = parent_id {
            body["parent_id"] = Value::String(parent.to_string());
        }

        let response = self.request("POST", "/api/folders", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Folder creation failed: {:?}",
            response.body
        );
        response.body["data"].clone()
    }

    /// Create a file through the API and return its JSON representation.
    pub async fn create_file(&self, title: &str, parent_id: &str, content: &str) -> Value {
        let body = serde_json::json!({
            "title": title,
            "parent_id": parent_id,
            "content": content,
        });

        let response = self.request("POST", "/api/files", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "File creation failed: {:?}",
            response.body
        );
        response.body["data"].clone()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Produce a unique node name so concurrent tests never collide.
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// Extract the canonical string id from a returned entity.
pub fn id_of(entity: &Value) -> String {
    entity["id"].as_str().expect("entity has an id").to_string()
}

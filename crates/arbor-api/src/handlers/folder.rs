//! Folder handlers: roots, contents, create, and the two delete paths.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use arbor_core::error::AppError;
use arbor_core::types::FolderId;
use arbor_entity::folder::{Folder, FolderContents};

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/folders
pub async fn list_root_folders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let folders = state.folder_service.list_root_folders().await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder_id: FolderId = id.parse()?;
    let folder = state.folder_service.get_folder(folder_id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders/{id}/children
pub async fn get_folder_contents(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FolderContents>>, ApiError> {
    let folder_id: FolderId = id.parse()?;
    let contents = state.folder_service.get_folder_contents(folder_id).await?;
    Ok(Json(ApiResponse::ok(contents)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::invalid_argument(format!("Invalid request: {e}")))?;

    let parent_id = match &req.parent_id {
        Some(raw) => Some(raw.parse::<FolderId>()?),
        None => None,
    };

    let folder = state
        .folder_service
        .create_folder(&req.name, parent_id)
        .await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// DELETE /api/folders/{id}
///
/// Strict single-node delete: rejected when the folder has any child.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let folder_id: FolderId = id.parse()?;
    state.folder_service.delete_folder(folder_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Folder deleted"))))
}

/// DELETE /api/folders/{id}/tree
///
/// Cascading delete: the folder and its entire descendant subtree.
pub async fn delete_folder_and_contents(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let folder_id: FolderId = id.parse()?;
    state
        .folder_service
        .delete_folder_and_contents(folder_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Folder and contents deleted",
    ))))
}

//! File handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use arbor_core::error::AppError;
use arbor_core::types::{FileId, FolderId};
use arbor_entity::file::File;

use crate::dto::request::{CreateFileRequest, UpdateFileContentRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/files/{id}
///
/// A missing file is `data: null`, not an error.
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Option<File>>>, ApiError> {
    let file_id: FileId = id.parse()?;
    let file = state.file_service.get_file(file_id).await?;
    Ok(Json(ApiResponse::ok(file)))
}

/// POST /api/files
pub async fn create_file(
    State(state): State<AppState>,
    Json(req): Json<CreateFileRequest>,
) -> Result<Json<ApiResponse<File>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::invalid_argument(format!("Invalid request: {e}")))?;

    let parent_id: FolderId = req.parent_id.parse()?;
    let file = state
        .file_service
        .create_file(&req.title, parent_id, req.content.unwrap_or_default())
        .await?;
    Ok(Json(ApiResponse::ok(file)))
}

/// PUT /api/files/{id}/content
pub async fn update_file_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFileContentRequest>,
) -> Result<Json<ApiResponse<File>>, ApiError> {
    let file_id: FileId = id.parse()?;
    let file = state
        .file_service
        .update_file_content(file_id, &req.content)
        .await?;
    Ok(Json(ApiResponse::ok(file)))
}

/// DELETE /api/files/{id}
///
/// Kind-locked: a folder identifier fails to parse as a `FileId`, so a
/// subtree can never be lost through this path.
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let file_id: FileId = id.parse()?;
    state.file_service.delete_file(file_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("File deleted"))))
}

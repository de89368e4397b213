//! Handlers for operations accepting either node kind.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use arbor_core::error::AppError;
use arbor_core::types::{FolderId, NodeId};

use crate::dto::request::{MoveItemRequest, RenameItemRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /api/items/{id}/rename
pub async fn rename_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameItemRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::invalid_argument(format!("Invalid request: {e}")))?;

    let item: NodeId = id.parse()?;
    state.item_service.rename_item(item, &req.new_name).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Item renamed"))))
}

/// PUT /api/items/{id}/move
///
/// The destination must parse as a folder identifier; moving into a file
/// fails before any store access.
pub async fn move_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveItemRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let item: NodeId = id.parse()?;
    let new_parent_id: FolderId = req.new_parent_id.parse()?;
    state.item_service.move_item(item, new_parent_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Item moved"))))
}

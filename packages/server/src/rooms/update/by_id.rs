use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::response::RoomResponse;
use crate::state::AppState;
use roomboard_entity::types::RoomPatch;

/// PUT /rooms/update/{id}
///
/// Apply a partial update to the addressed room. Only fields present in
/// the body are touched; the store refreshes `updatedAt` and leaves
/// `createdAt` and the listing ID alone. A malformed ID is 400, a
/// well-formed but unknown ID is 404.
pub async fn put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RoomResponse>, ApiError> {
    let Json(body) = body.map_err(|e| {
        warn!("Room update {} failed - unreadable request body: {}", id, e);
        ApiError::validation("Error updating room", e.body_text())
    })?;

    let patch: RoomPatch = serde_json::from_value(body).map_err(|e| {
        warn!("Room update {} failed - invalid payload: {}", id, e);
        ApiError::validation("Error updating room", e.to_string())
    })?;

    let room = state.room_repository.update_by_id(&id, patch).await.map_err(|e| {
        warn!("Room update {} failed: {}", id, e);
        ApiError::from_repository("Error updating room", e)
    })?;

    info!("Room {} updated", room.room_id);

    Ok(Json(RoomResponse { message: "Room updated successfully", data: room }))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::response::RoomResponse;
use crate::state::AppState;
use roomboard_entity::types::NewRoom;

/// POST /rooms/add
///
/// Create a new room listing. The store assigns the listing ID and
/// timestamps; `available` defaults to true when the payload omits it.
/// Malformed JSON and missing or mistyped fields come back as 400 with
/// the envelope, never as a bare framework error.
pub async fn post(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let Json(body) = body.map_err(|e| {
        warn!("Room create failed - unreadable request body: {}", e);
        ApiError::validation("Error adding room", e.body_text())
    })?;

    let new_room: NewRoom = serde_json::from_value(body).map_err(|e| {
        warn!("Room create failed - invalid payload: {}", e);
        ApiError::validation("Error adding room", e.to_string())
    })?;

    let room = state.room_repository.insert(new_room).await.map_err(|e| {
        warn!("Room create failed: {}", e);
        ApiError::from_repository("Error adding room", e)
    })?;

    info!("Room {} added for owner {}", room.room_id, room.owner_name);

    Ok((StatusCode::CREATED, Json(RoomResponse { message: "Room added successfully", data: room })))
}

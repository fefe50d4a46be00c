use axum::{Json, extract::State};
use tracing::{error, info};

use crate::error::ApiError;
use crate::response::RoomListResponse;
use crate::state::AppState;

/// GET /rooms
///
/// List every stored room in insertion order, wrapped in the standard
/// envelope with the collection count.
pub async fn get(State(state): State<AppState>) -> Result<Json<RoomListResponse>, ApiError> {
    let rooms = state.room_repository.get_all().await.map_err(|e| {
        error!("Room listing failed: {}", e);
        ApiError::from_repository("Error fetching rooms", e)
    })?;

    info!("Fetched {} rooms", rooms.len());

    Ok(Json(RoomListResponse::new("Rooms fetched successfully", rooms)))
}

pub mod add;
pub mod city;
pub mod delete;
pub mod filter;
pub mod update;

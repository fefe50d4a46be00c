use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::error::ApiError;
use crate::response::RoomListResponse;
use crate::state::AppState;

/// GET /rooms/city/{city}
///
/// List rooms whose address contains the given fragment, compared
/// case-insensitively. An unmatched fragment is a successful empty
/// result, not an error.
pub async fn get(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<RoomListResponse>, ApiError> {
    let rooms = state.room_repository.find_by_address(&city).await.map_err(|e| {
        error!("Room search by city {:?} failed: {}", city, e);
        ApiError::from_repository("Error fetching rooms", e)
    })?;

    info!("Fetched {} rooms matching city {:?}", rooms.len(), city);

    Ok(Json(RoomListResponse::new("Rooms fetched by city", rooms)))
}

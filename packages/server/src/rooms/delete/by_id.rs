use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::response::MessageResponse;
use crate::state::AppState;

/// DELETE /rooms/delete/{id}
///
/// Remove the addressed room permanently. A malformed ID is 400, a
/// well-formed but unknown ID is 404; repeating a delete therefore
/// reports 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.room_repository.delete_by_id(&id).await.map_err(|e| {
        warn!("Room delete {} failed: {}", id, e);
        ApiError::from_repository("Error deleting room", e)
    })?;

    info!("Room {} deleted", id);

    Ok(Json(MessageResponse { message: "Room deleted successfully" }))
}

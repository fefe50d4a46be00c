use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::response::RoomListResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RentRangeParams {
    /// Lower rent bound, inclusive; absent leaves the range open below
    pub min: Option<String>,

    /// Upper rent bound, inclusive; absent leaves the range open above
    pub max: Option<String>,
}

/// GET /rooms/filter/rent?min={number}&max={number}
///
/// List rooms whose rent falls inside the inclusive range. Either bound
/// may be omitted; a bound that is present but not numeric is rejected
/// with 400 rather than silently ignored.
pub async fn get(
    State(state): State<AppState>,
    params: Result<Query<RentRangeParams>, QueryRejection>,
) -> Result<Json<RoomListResponse>, ApiError> {
    let Query(params) = params.map_err(|e| {
        warn!("Rent filter failed - unreadable query string: {}", e);
        ApiError::validation("Error filtering rooms", e.body_text())
    })?;

    let min = parse_bound("min", params.min.as_deref())?;
    let max = parse_bound("max", params.max.as_deref())?;

    let rooms = state.room_repository.find_by_rent_range(min, max).await.map_err(|e| {
        error!("Rent filter failed: {}", e);
        ApiError::from_repository("Error filtering rooms", e)
    })?;

    info!("Fetched {} rooms with rent between {:?} and {:?}", rooms.len(), min, max);

    Ok(Json(RoomListResponse::new("Rooms fetched by rent range", rooms)))
}

fn parse_bound(name: &'static str, raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    match raw {
        None => Ok(None),
        Some(text) => text.parse::<f64>().map(Some).map_err(|_| {
            warn!("Rent filter failed - {} is not numeric: {:?}", name, text);
            ApiError::validation(
                "Error filtering rooms",
                format!("query parameter `{name}` must be a number, got {text:?}"),
            )
        }),
    }
}

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;

use crate::response::MessageResponse;
use crate::rooms;
use crate::state::AppState;

/// Assemble the public route table on top of the shared application state.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/rooms/add", post(rooms::add::post))
        .route("/rooms", get(rooms::get))
        .route("/rooms/filter/rent", get(rooms::filter::rent::get))
        .route("/rooms/city/{city}", get(rooms::city::by_city::get))
        .route("/rooms/update/{id}", put(rooms::update::by_id::put))
        .route("/rooms/delete/{id}", delete(rooms::delete::by_id::delete))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .fallback(handler_404)
}

/// GET /
///
/// Liveness check confirming the service is reachable.
async fn index() -> Json<MessageResponse> {
    Json(MessageResponse { message: "Room rental backend is running" })
}

async fn handler_404() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::NOT_FOUND, Json(MessageResponse { message: "Endpoint not found" }))
}

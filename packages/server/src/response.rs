//! Standardized response envelopes shared by every endpoint

use roomboard_entity::types::Room;
use serde::Serialize;

/// Envelope for operations that return only a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Envelope for operations that return a single room
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub message: &'static str,
    pub data: Room,
}

/// Envelope for operations that return a collection of rooms
#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub message: &'static str,
    pub count: usize,
    pub data: Vec<Room>,
}

impl RoomListResponse {
    pub fn new(message: &'static str, data: Vec<Room>) -> Self {
        Self { message, count: data.len(), data }
    }
}

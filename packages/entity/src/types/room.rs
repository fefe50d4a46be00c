use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rental room listing as stored and served over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Listing ID, assigned by the store
    pub room_id: String,

    /// Name of the person offering the room
    pub owner_name: String,

    /// Contact phone number, free-form text
    pub phone: String,

    /// Street address, searched by substring
    pub address: String,

    /// Monthly rent amount
    pub rent: f64,

    /// Room category such as "single", "double" or "pg"
    pub room_type: String,

    /// Whether the room is currently open for rental
    pub available: bool,

    /// Creation timestamp, never modified after insert
    #[serde(with = "crate::types::timestamp")]
    pub created_at: DateTime<Utc>,

    /// Timestamp of the most recent successful update
    #[serde(with = "crate::types::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Client payload for creating a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    /// Name of the person offering the room
    pub owner_name: String,

    /// Contact phone number
    pub phone: String,

    /// Street address
    pub address: String,

    /// Monthly rent amount
    pub rent: f64,

    /// Room category
    pub room_type: String,

    /// Availability flag, defaults to true when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Client payload for a partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// A required text field was present but empty
#[derive(Debug, Clone, PartialEq, Error)]
#[error("field `{field}` must be a non-empty string")]
pub struct ValidationError {
    /// Wire name of the offending field
    pub field: &'static str,
}

impl NewRoom {
    /// Check that every required text field carries actual content.
    ///
    /// Type errors (missing fields, wrong JSON types) are caught during
    /// deserialization; this covers the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("ownerName", self.owner_name.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("roomType", self.room_type.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError { field });
            }
        }
        Ok(())
    }
}

impl RoomPatch {
    /// Check that every text field the patch does provide is non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("ownerName", self.owner_name.as_deref()),
            ("phone", self.phone.as_deref()),
            ("address", self.address.as_deref()),
            ("roomType", self.room_type.as_deref()),
        ] {
            if let Some(text) = value {
                if text.trim().is_empty() {
                    return Err(ValidationError { field });
                }
            }
        }
        Ok(())
    }
}

use crate::repository::error::RepositoryError;
use chrono::{DateTime, Utc};
use roomboard_entity::types::{NewRoom, Room, RoomPatch};
use serde::Serialize;
use surrealdb::{Surreal, engine::any::Any};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct RoomRepository {
    db: Surreal<Any>,
}

/// Merge document for partial updates: the provided fields plus the
/// refreshed update timestamp.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomMerge {
    #[serde(flatten)]
    patch: RoomPatch,
    #[serde(with = "roomboard_entity::types::timestamp")]
    updated_at: DateTime<Utc>,
}

impl RoomRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn insert(&self, new_room: NewRoom) -> Result<Room, RepositoryError> {
        new_room.validate()?;

        let now = Utc::now();
        let room = Room {
            room_id: Uuid::new_v4().simple().to_string(),
            owner_name: new_room.owner_name,
            phone: new_room.phone,
            address: new_room.address,
            rent: new_room.rent,
            room_type: new_room.room_type,
            available: new_room.available.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        let created: Option<Room> = self
            .db
            .create(("room", room.room_id.clone()))
            .content(room)
            .await?;
        match created {
            Some(room) => {
                debug!("Stored room {}", room.room_id);
                Ok(room)
            },
            None => Err(RepositoryError::DatabaseError {
                message: "create returned no record".to_string(),
                operation: "insert".to_string(),
            }),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, RepositoryError> {
        let mut result = self.db.query("SELECT * FROM room ORDER BY createdAt ASC").await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms)
    }

    /// Rooms with `min <= rent <= max`, both bounds inclusive. A missing
    /// bound leaves that side of the range open.
    pub async fn find_by_rent_range(
        &self,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Vec<Room>, RepositoryError> {
        let mut conditions = Vec::new();
        if min.is_some() {
            conditions.push("rent >= $min");
        }
        if max.is_some() {
            conditions.push("rent <= $max");
        }

        let query = if conditions.is_empty() {
            "SELECT * FROM room ORDER BY createdAt ASC".to_string()
        } else {
            format!(
                "SELECT * FROM room WHERE {} ORDER BY createdAt ASC",
                conditions.join(" AND ")
            )
        };

        let mut request = self.db.query(query);
        if let Some(min) = min {
            request = request.bind(("min", min));
        }
        if let Some(max) = max {
            request = request.bind(("max", max));
        }

        let mut result = request.await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms)
    }

    /// Rooms whose address contains the fragment, compared case-insensitively.
    pub async fn find_by_address(&self, fragment: &str) -> Result<Vec<Room>, RepositoryError> {
        let query = "
            SELECT * FROM room
            WHERE string::lowercase(address) CONTAINS string::lowercase($fragment)
            ORDER BY createdAt ASC
        ";
        let mut result = self.db.query(query).bind(("fragment", fragment.to_string())).await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms)
    }

    pub async fn update_by_id(&self, room_id: &str, patch: RoomPatch) -> Result<Room, RepositoryError> {
        validate_id(room_id)?;
        patch.validate()?;

        let merge = RoomMerge { patch, updated_at: Utc::now() };
        let updated: Option<Room> = self.db.update(("room", room_id)).merge(merge).await?;
        match updated {
            Some(room) => {
                debug!("Updated room {}", room.room_id);
                Ok(room)
            },
            None => Err(RepositoryError::NotFound {
                entity_type: "room".to_string(),
                id: room_id.to_string(),
            }),
        }
    }

    pub async fn delete_by_id(&self, room_id: &str) -> Result<(), RepositoryError> {
        validate_id(room_id)?;

        let deleted: Option<Room> = self.db.delete(("room", room_id)).await?;
        match deleted {
            Some(room) => {
                debug!("Deleted room {}", room.room_id);
                Ok(())
            },
            None => Err(RepositoryError::NotFound {
                entity_type: "room".to_string(),
                id: room_id.to_string(),
            }),
        }
    }
}

fn validate_id(room_id: &str) -> Result<(), RepositoryError> {
    match Uuid::parse_str(room_id) {
        Ok(_) => Ok(()),
        Err(_) => Err(RepositoryError::InvalidId { id: room_id.to_string() }),
    }
}

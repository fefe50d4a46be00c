use crate::config::ServerConfig;
use roomboard_surrealdb::repository::room::RoomRepository;
use std::sync::Arc;
use surrealdb::{Surreal, engine::any::Any};

#[derive(Clone)]
pub struct AppState {
    pub db: Surreal<Any>,
    pub config: ServerConfig,
    pub room_repository: Arc<RoomRepository>,
}

impl AppState {
    pub fn new(db: Surreal<Any>, config: ServerConfig) -> Self {
        let room_repository = Arc::new(RoomRepository::new(db.clone()));

        Self { db, config, room_repository }
    }
}

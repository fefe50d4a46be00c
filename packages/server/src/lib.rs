pub mod config;
pub mod error;
pub mod response;
pub mod rooms;
pub mod router;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::router::create_router;
pub use crate::state::AppState;

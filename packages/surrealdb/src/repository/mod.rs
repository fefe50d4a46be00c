pub mod error;
pub mod room;

#[cfg(test)]
mod room_test;

pub use error::RepositoryError;
pub use room::RoomRepository;

use surrealdb::{Surreal, engine::any::Any};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TestUtilsError {
    #[error("Database connection failed: {0}")]
    DatabaseConnection(#[from] surrealdb::Error),
}

/// Connect to a fresh in-memory database under a unique namespace and
/// database name, so concurrently running tests stay fully isolated.
pub async fn create_test_database() -> Result<Surreal<Any>, TestUtilsError> {
    let database_name = format!("test_db_{}", Uuid::new_v4().simple());
    let namespace = format!("test_ns_{}", Uuid::new_v4().simple());

    let db = surrealdb::engine::any::connect("memory")
        .await
        .map_err(TestUtilsError::DatabaseConnection)?;

    db.use_ns(&namespace)
        .use_db(&database_name)
        .await
        .map_err(TestUtilsError::DatabaseConnection)?;

    Ok(db)
}

use roomboard_entity::types::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] surrealdb::Error),

    #[error("Database error: {message} (operation: {operation})")]
    DatabaseError { message: String, operation: String },

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid id: {id}")]
    InvalidId { id: String },

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl From<ValidationError> for RepositoryError {
    fn from(err: ValidationError) -> Self {
        RepositoryError::Validation {
            field: err.field.to_string(),
            message: "must be a non-empty string".to_string(),
        }
    }
}

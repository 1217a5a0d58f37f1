use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(id: impl std::fmt::Display) -> Self { Self::NotFound(format!("ID-{} not found", id)) }
    pub fn no_record(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Found no address record with id {}", id))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidCoordinate(msg) => Self::InvalidCoordinate(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

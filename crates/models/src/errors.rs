use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("database error: {0}")]
    Db(String),
}

use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0} is required and must be valid")]
    InvalidField(Field),

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("CSV file is empty or invalid")]
    MalformedCsv,

    #[error("No valid employee data found in CSV")]
    EmptyCsv,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;

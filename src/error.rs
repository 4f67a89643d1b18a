use crate::schedule::feasibility::Rejection;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("value {value} for '{key}' is out of range")]
    OutOfRange { key: String, value: i64 },
    #[error("duplicate entry '{0}'")]
    Duplicate(String),
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },
    #[error("store failure: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for RosterError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, key } => RosterError::NotFound { entity, key },
            other => RosterError::Store(other),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;

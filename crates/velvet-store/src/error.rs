//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with the given ID.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A record with the given ID already exists.
    #[error("{entity} already exists: {id}")]
    Duplicate { entity: &'static str, id: String },

    /// Failed to load or parse seed fixtures.
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Fixture(e.to_string())
    }
}

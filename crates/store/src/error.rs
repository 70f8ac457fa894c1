//! Datastore error types.

use thiserror::Error;

/// Errors returned by status store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the datastore.
    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Datastore replied with a non-success status.
    #[error("Store API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Store response decode error: {0}")]
    Decode(String),

    /// An insert that should echo the new row returned nothing.
    #[error("Insert into {table} returned no rows")]
    NoRowsInserted { table: &'static str },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

//! Poller error types.

use statuswatch_store::StoreError;
use thiserror::Error;

/// Errors that abort a poll cycle.
#[derive(Debug, Error)]
pub enum PollError {
    /// Network-level failure reaching n8n.
    #[error("n8n request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// n8n replied with a non-success status.
    #[error("n8n API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A response body did not match the documented shape.
    #[error("Unexpected n8n response: {0}")]
    Contract(String),

    /// Writing a derived row failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

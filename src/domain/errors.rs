use thiserror::Error;

use crate::config::ConfigError;

/// Failure reported by the hosted store or the transport in front of it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

/// Fatal failure of a loader or action; the caller gets an error response.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Error fetching products: {0}")]
    Fetch(StoreError),
}

impl StoreError {
    /// HTTP status the store answered with, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Api { status, .. } => Some(*status),
            StoreError::Transport(_) | StoreError::Decode(_) => None,
        }
    }
}

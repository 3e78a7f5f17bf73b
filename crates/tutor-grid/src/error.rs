//! Error types for tutor-grid operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Malformed time of day: {0:?} (expected HH:MM)")]
    MalformedTime(String),

    #[error("Malformed time range: {0:?} (expected HH:MM-HH:MM)")]
    MalformedRange(String),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// One of the required data collections could not be loaded. Loading is
    /// all-or-nothing, so this aborts the whole startup.
    #[error("Failed to load {collection}: {source}")]
    Load {
        collection: &'static str,
        #[source]
        source: Box<GridError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    /// Wrap an error as a load failure of the named collection.
    pub fn load(collection: &'static str, source: impl Into<GridError>) -> Self {
        GridError::Load {
            collection,
            source: Box::new(source.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

//! Error types for sync-core operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error("Empty window: the normalized end does not come after the start")]
    EmptyWindow,

    #[error("A timeframe with ID \"{0}\" already exists")]
    DuplicateId(String),

    #[error("Timeframe with ID \"{0}\" does not exist")]
    NotFound(String),

    #[error("{0} timeframe(s) stored; at least 2 are required")]
    InsufficientTimeframes(usize),
}

pub type Result<T> = std::result::Result<T, SyncError>;

//! Error Types

use thiserror::Error;

/// Failures talking to the key-value store behind the todo list.
///
/// None of these reach the user: loads fall back to an empty list and
/// failed saves are logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode todo list: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Encode(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

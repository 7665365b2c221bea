//! Error Types
//!
//! Backend failures, the two row-level failure kinds, and the fixed
//! messages shown by the notification banner.

use thiserror::Error;

/// Failure talking to the todo backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("command `{command}` failed: {message}")]
    Command { command: &'static str, message: String },
    #[error("serialization error: {0}")]
    Serde(String),
    #[error("todo {0} not found")]
    NotFound(u32),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ApiError::Serde(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a store mutation requested by a row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("update failed: {0}")]
    UpdateFailed(#[source] ApiError),
    #[error("delete failed: {0}")]
    DeleteFailed(#[source] ApiError),
}

impl TodoError {
    /// The notification this failure is surfaced with
    pub fn message(&self) -> ErrorMessage {
        match self {
            TodoError::UpdateFailed(_) => ErrorMessage::UnableToUpdate,
            TodoError::DeleteFailed(_) => ErrorMessage::UnableToDelete,
        }
    }
}

/// User-facing notification text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorMessage {
    #[error("Unable to load todos")]
    UnableToLoad,
    #[error("Unable to update a todo")]
    UnableToUpdate,
    #[error("Unable to delete a todo")]
    UnableToDelete,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable rejection codes the record store puts in error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    DuplicateEmail,
    Validation,
    Internal,
}

/// Error body returned by the record store on a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The full failure taxonomy of the synchronization layer.
///
/// `Validation` is raised locally before any network call. The remaining
/// variants translate remote rejections; the raw transport error is logged
/// at the call site and never reaches the user. No variant is retried
/// automatically; every failure is terminal for that attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("required field '{field}' is missing or invalid")]
    Validation { field: &'static str },
    #[error("a guest with this email already exists")]
    DuplicateEmail,
    #[error("guest record not found")]
    NotFound,
    #[error("failed to load guests")]
    FetchFailed,
    #[error("failed to create guest")]
    CreateFailed,
    #[error("failed to update guest")]
    UpdateFailed,
    #[error("failed to delete guest")]
    DeleteFailed,
}

impl SyncError {
    /// The one user-facing message for each taxonomy entry.
    pub fn user_message(&self) -> &'static str {
        match self {
            SyncError::Validation { .. } => {
                "First name, last name and a valid email are required."
            }
            SyncError::DuplicateEmail => "A guest with this email already exists.",
            SyncError::NotFound => "This guest record no longer exists.",
            SyncError::FetchFailed => "Could not load the guest list. Please try again.",
            SyncError::CreateFailed => "Could not create the guest. Please try again.",
            SyncError::UpdateFailed => "Could not save the changes. Please try again.",
            SyncError::DeleteFailed => "Could not delete the guest. The record was left unchanged.",
        }
    }
}

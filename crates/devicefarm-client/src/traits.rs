//! Upload API abstraction trait
//!
//! This module defines the UploadApi trait that all Device Farm backends must implement.

use async_trait::async_trait;
use devicefarm_core::models::{CreateUploadRequest, UpdateUploadRequest};
use devicefarm_core::{BackendKind, ErrorMetadata, LogLevel, Upload};
use thiserror::Error;

/// Upload API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Upload not found: {0}")]
    NotFound(String),

    #[error("{operation} rejected: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid {operation} response: {message}")]
    InvalidResponse {
        operation: &'static str,
        message: String,
    },

    #[error("Transport error during {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl ErrorMetadata for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "UPLOAD_NOT_FOUND",
            ApiError::Rejected { .. } => "REMOTE_REJECTED",
            ApiError::InvalidResponse { .. } => "INVALID_RESPONSE",
            ApiError::Transport { .. } => "TRANSPORT_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    fn log_level(&self) -> LogLevel {
        match self {
            ApiError::NotFound(_) => LogLevel::Debug,
            ApiError::Transport { .. } => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Result type for upload API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Upload API abstraction trait
///
/// The resource adapter only talks to Device Farm through this trait, so the
/// real service and the in-memory emulation are interchangeable.
#[async_trait]
pub trait UploadApi: Send + Sync {
    /// `CreateUpload`: register a new upload and return it with its assigned ARN
    async fn create_upload(&self, request: CreateUploadRequest) -> ApiResult<Upload>;

    /// `GetUpload`: fetch an upload by ARN
    ///
    /// Returns `ApiError::NotFound` when the service does not know the ARN.
    async fn get_upload(&self, arn: &str) -> ApiResult<Upload>;

    /// `UpdateUpload`: change name and/or content type; unset fields are left alone
    async fn update_upload(&self, request: UpdateUploadRequest) -> ApiResult<Upload>;

    /// `DeleteUpload`: remove an upload by ARN
    async fn delete_upload(&self, arn: &str) -> ApiResult<()>;

    /// Get the backend type
    fn backend_type(&self) -> BackendKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_quiet_and_final() {
        let err = ApiError::NotFound("arn:x".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.error_code(), "UPLOAD_NOT_FOUND");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn transport_errors_are_recoverable() {
        let err = ApiError::Transport {
            operation: "GetUpload",
            message: "timeout".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
        assert_eq!(err.to_string(), "Transport error during GetUpload: timeout");
    }
}
